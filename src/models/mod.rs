//! Data models for the preference subsystem.
//!
//! - [`UserProfile`]: every user preference and usage counter, plus the derived views over
//!   encoded text fields
//! - [`RecentFile`]: one (provider identifier, file name) entry of the recent-files list
//! - [`LogParserSettings`]: the nested, JSON-persisted description of how to parse a class
//!   of log files, with its [`LogField`] column mapping
//!
//! Only [`LogParserSettings`] derives `Serialize`/`Deserialize`. The profile itself is
//! flattened into string slots by [`crate::codec`] and [`crate::services`].

pub mod parser_settings;
pub mod profile;

pub use parser_settings::{LogField, LogParserSettings, ParserSettingsError};
pub use profile::{RecentFile, UserProfile};
