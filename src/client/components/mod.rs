pub mod entity_name;
pub mod humanized_number;

pub use entity_name::EntityName;
pub use humanized_number::HumanizedNumber;
