#[macro_use]
extern crate rust_i18n;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod presentation;
pub mod utils;

pub use app::App;

// Initialize i18n
i18n!("locales", fallback = "en");
