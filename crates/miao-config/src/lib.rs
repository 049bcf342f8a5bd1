//! miao-config
//!
//! Terminal preferences for the expense tracker and their on-disk form.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, Theme};
