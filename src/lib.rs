rust_i18n::i18n!("locales", fallback = "ja");

pub mod editor;
pub mod engine;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod names;
pub mod statics;
pub mod utils;
pub mod views;
