// LogView Prefs - user preference persistence for the LogView desktop log viewer
//
// This library translates between a flat, string-only slot store and the structured
// user profile. The binary crate (main.rs) is a small host that records a session.

pub mod clock;
pub mod codec;
pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use crate::config::AppConfig;
pub use crate::models::{LogField, LogParserSettings, RecentFile, UserProfile};
pub use crate::services::{SettingsError, SettingsManager, load_profile, save_profile};
pub use crate::store::{MemoryStore, SettingsStore, SlotValue, YamlStore};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
