pub mod console;
pub mod layout;
pub mod quiz;

pub use layout::{display_title, document};
