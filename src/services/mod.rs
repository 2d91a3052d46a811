//! Services module - loading and saving the user profile.
//!
//! # Components
//!
//! - [`load_profile`]: runs the store's pending upgrade, then reads every slot into a
//!   [`UserProfile`](crate::models::UserProfile). Strict for every slot except the nested
//!   parser settings, which fall back to defaults on any error.
//! - [`save_profile`]: the inverse. Truncates recent files to the configured cap, always
//!   persists `show_changelog_at_startup = false`, and persists an empty parser-settings
//!   slot if encoding fails.
//! - [`SettingsManager`]: owns a store and its loaded profile for hosts that want a single
//!   handle.
//! - [`ProcessClock`] / [`SystemClock`]: the process-start boundary used by
//!   [`UserProfile::update_running_time`](crate::models::UserProfile::update_running_time).
//!
//! # Usage Example
//!
//! ```ignore
//! use logview_prefs::services::{SettingsManager, SystemClock};
//! use logview_prefs::store::YamlStore;
//!
//! let clock = SystemClock::new();
//! let mut manager = SettingsManager::open(YamlStore::open("prefs")?)?;
//!
//! manager.profile_mut().increase_number_of_launches();
//! manager.profile_mut().update_running_time(&clock);
//! manager.save()?;
//! ```

pub mod persistence;

pub use crate::clock::{ProcessClock, SystemClock};
pub use persistence::{
    SettingsError, SettingsManager, load_profile, save_profile, upgrade_if_required,
};
