//! Display helpers shared by the UI and the command line.

pub mod number;

pub use number::humanize_number;
