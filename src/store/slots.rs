//! Slot keys and their default values.

use super::SlotValue;
use crate::models::profile::{
    DEFAULT_FONT_SIZE, DEFAULT_IDLE_TIME_MINUTES, DEFAULT_PAGING_SIZE, DEFAULT_RECENT_FILES_COUNT,
    DEFAULT_SKIN_NAME,
};
use indexmap::IndexMap;
use std::time::Duration;

pub const UPGRADE_REQUIRED: &str = "upgrade_required";

pub const SKIN_NAME: &str = "application_skin_name";
pub const ENABLE_USER_STATISTICS: &str = "enable_user_statistics";
pub const RUNNING_TIME: &str = "running_time";
pub const LAUNCHES_COUNT: &str = "launches_count";
pub const OPENED_FILES_COUNT: &str = "opened_files_count";
pub const EXCLUDED_TEXT: &str = "excluded_text";
pub const EXCLUDED_SOURCE: &str = "excluded_source";
pub const EXCLUDED_MODULES: &str = "excluded_modules";
pub const INCLUDE_TEXT: &str = "include_text";
pub const SHOW_HISTORY_CLEARED_MESSAGES: &str = "show_history_cleared_messages";
pub const SAVE_EXCLUDE_TEXTS: &str = "save_exclude_texts";
pub const RECENT_FILES: &str = "recent_files";
pub const RECENT_FILES_COUNT: &str = "recent_files_count";
pub const ENABLE_FILE_CACHING: &str = "enable_file_caching";
pub const LOAD_EXTENSIONS_ON_STARTUP: &str = "load_extensions_on_startup";
pub const STARTUP_EXTENSIONS: &str = "startup_extensions";
pub const STARTUP_RIBBON_MINIMIZED: &str = "startup_ribbon_minimized";
pub const STARTUP_ERROR_LOG_LEVEL: &str = "startup_error_log_level";
pub const PAGING_ENABLED: &str = "paging_enabled";
pub const PAGING_SIZE: &str = "paging_size";
pub const SHOW_CHANGELOG_AT_STARTUP: &str = "show_changelog_at_startup";
pub const FONT_SIZE: &str = "font_size";
pub const SEARCH_ALSO_IN_SOURCE_AND_MODULE: &str = "search_also_in_source_and_module";
pub const IDLE_MODE: &str = "idle_mode";
pub const IDLE_TIME_MINUTES: &str = "idle_time_minutes";
pub const WINDOWS_EVENT_LOGS: &str = "windows_event_logs";
pub const AUTO_START_DATA_PROVIDERS: &str = "auto_start_data_providers";
pub const AUTO_SCROLL_TO_LAST_MESSAGE: &str = "auto_scroll_to_last_message";
pub const PARSER_SETTINGS: &str = "parser_settings";

/// Every known slot with its default value, in a stable order.
pub fn defaults() -> IndexMap<String, SlotValue> {
    let empty = || SlotValue::String(String::new());

    [
        (UPGRADE_REQUIRED, SlotValue::Bool(true)),
        (SKIN_NAME, SlotValue::String(DEFAULT_SKIN_NAME.to_string())),
        (ENABLE_USER_STATISTICS, SlotValue::Bool(true)),
        (RUNNING_TIME, SlotValue::Duration(Duration::ZERO)),
        (LAUNCHES_COUNT, SlotValue::Unsigned(0)),
        (OPENED_FILES_COUNT, SlotValue::Unsigned(0)),
        (EXCLUDED_TEXT, empty()),
        (EXCLUDED_SOURCE, empty()),
        (EXCLUDED_MODULES, empty()),
        (INCLUDE_TEXT, empty()),
        (SHOW_HISTORY_CLEARED_MESSAGES, SlotValue::Bool(true)),
        (SAVE_EXCLUDE_TEXTS, SlotValue::Bool(false)),
        (RECENT_FILES, empty()),
        (RECENT_FILES_COUNT, SlotValue::Int(DEFAULT_RECENT_FILES_COUNT)),
        (ENABLE_FILE_CACHING, SlotValue::Bool(false)),
        (LOAD_EXTENSIONS_ON_STARTUP, SlotValue::Bool(true)),
        (STARTUP_EXTENSIONS, empty()),
        (STARTUP_RIBBON_MINIMIZED, SlotValue::Bool(false)),
        (STARTUP_ERROR_LOG_LEVEL, SlotValue::Bool(false)),
        (PAGING_ENABLED, SlotValue::Bool(true)),
        (PAGING_SIZE, SlotValue::Int(DEFAULT_PAGING_SIZE)),
        (SHOW_CHANGELOG_AT_STARTUP, SlotValue::Bool(true)),
        (FONT_SIZE, SlotValue::Float(DEFAULT_FONT_SIZE)),
        (SEARCH_ALSO_IN_SOURCE_AND_MODULE, SlotValue::Bool(false)),
        (IDLE_MODE, SlotValue::Bool(false)),
        (IDLE_TIME_MINUTES, SlotValue::Int(DEFAULT_IDLE_TIME_MINUTES)),
        (WINDOWS_EVENT_LOGS, empty()),
        (AUTO_START_DATA_PROVIDERS, empty()),
        (AUTO_SCROLL_TO_LAST_MESSAGE, SlotValue::Bool(false)),
        (PARSER_SETTINGS, empty()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}
