pub mod builder;
pub mod constant;
pub mod context;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;

pub mod prelude {
    pub use crate::{
        constant::{NAMES_PATH, TEST_TOKEN, TEST_USER_AGENT},
        fixtures, TestBuilder, TestContext,
    };
}
