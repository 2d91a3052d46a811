use crate::codec::{self, TEXT_BLOCK_SPLITTER};
use crate::models::LogParserSettings;
use crate::clock::ProcessClock;
use std::time::Duration;
use uuid::Uuid;

pub const DEFAULT_SKIN_NAME: &str = "Office 2019 Colorful";
pub const DEFAULT_RECENT_FILES_COUNT: i32 = 8;
pub const DEFAULT_PAGING_SIZE: i32 = 5000;
pub const DEFAULT_FONT_SIZE: f32 = 8.25;
pub const DEFAULT_IDLE_TIME_MINUTES: i32 = 5;

/// Data provider selected when the application opens for the first time.
pub const DEFAULT_DATA_PROVIDER: Uuid = Uuid::from_u128(0xD3047F5D_CFEB_4A69_8F10_AE5F4D3F2D04);

/// One entry of the recent-files list: the provider that opened it and the file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecentFile {
    pub id: Uuid,
    pub file_name: String,
}

impl RecentFile {
    pub fn new(id: Uuid, file_name: impl Into<String>) -> Self {
        Self {
            id,
            file_name: file_name.into(),
        }
    }
}

/// The complete set of user preferences and usage statistics.
///
/// Populated from a [`SettingsStore`](crate::store::SettingsStore) by
/// [`load_profile`](crate::services::load_profile) and written back by
/// [`save_profile`](crate::services::save_profile). The host owns one instance and passes
/// it by reference; nothing here is global.
///
/// Text fields such as `include_text` hold raw `*#*#*#`-joined blocks exactly as persisted.
/// Use [`include_entries`](Self::include_entries) and
/// [`excluded_entries`](Self::excluded_entries) for the decoded, bounded views.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub skin_name: String,

    // Statistics
    pub enable_user_statistics: bool,
    pub running_time: Duration,
    pub launches: u32,
    pub opened_files: u32,

    // Filtering
    pub save_exclude_texts: bool,
    pub include_text: String,
    pub excluded_text: String,
    pub excluded_modules: String,
    pub excluded_source: String,
    pub search_also_in_source_and_module: bool,

    // Session-only, never persisted
    pub included_module: String,
    pub included_source: String,
    pub initial_selected_data_provider: Uuid,

    // Recent files, newest first
    pub recent_files: Vec<RecentFile>,
    pub recent_files_count: i32,

    pub show_history_of_cleared_messages: bool,
    pub enable_file_caching: bool,

    // Startup
    pub load_extensions_on_startup: bool,
    pub startup_extensions: Vec<Uuid>,
    pub startup_ribbon_minimized: bool,
    pub startup_error_log_level: bool,
    pub show_changelog_at_startup: bool,
    pub auto_start_data_providers: Vec<Uuid>,

    // Display
    pub paging_enabled: bool,
    pub paging_size: i32,
    pub font_size: f32,
    pub auto_scroll_to_last_message: bool,

    pub idle_mode: bool,
    pub idle_time_minutes: i32,

    pub event_logs: Vec<String>,
    pub parser_settings: LogParserSettings,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            skin_name: DEFAULT_SKIN_NAME.to_string(),
            enable_user_statistics: true,
            running_time: Duration::ZERO,
            launches: 0,
            opened_files: 0,
            save_exclude_texts: false,
            include_text: String::new(),
            excluded_text: String::new(),
            excluded_modules: String::new(),
            excluded_source: String::new(),
            search_also_in_source_and_module: false,
            included_module: String::new(),
            included_source: String::new(),
            initial_selected_data_provider: DEFAULT_DATA_PROVIDER,
            recent_files: Vec::new(),
            recent_files_count: DEFAULT_RECENT_FILES_COUNT,
            show_history_of_cleared_messages: true,
            enable_file_caching: false,
            load_extensions_on_startup: true,
            startup_extensions: Vec::new(),
            startup_ribbon_minimized: false,
            startup_error_log_level: false,
            show_changelog_at_startup: true,
            auto_start_data_providers: Vec::new(),
            paging_enabled: true,
            paging_size: DEFAULT_PAGING_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            auto_scroll_to_last_message: false,
            idle_mode: false,
            idle_time_minutes: DEFAULT_IDLE_TIME_MINUTES,
            event_logs: Vec::new(),
            parser_settings: LogParserSettings::default(),
        }
    }
}

impl UserProfile {
    /// Append `text` to the include block unless it already occurs anywhere in the raw field.
    ///
    /// The check is a plain substring test, not a per-entry comparison: `"err"` is not
    /// added when `"error"` is already present.
    pub fn add_include_entry(&mut self, text: &str) {
        if !self.include_text.contains(text) {
            self.include_text.push_str(TEXT_BLOCK_SPLITTER);
            self.include_text.push_str(text);
        }
    }

    /// Record that a file was opened.
    ///
    /// The opened-files counter always increments. The entry is put at the front of the
    /// list unless the exact (id, file) pair is already present.
    pub fn add_to_recent_files(&mut self, id: Uuid, file: &str) {
        self.opened_files = self.opened_files.saturating_add(1);

        let entry = RecentFile::new(id, file);
        if !self.recent_files.contains(&entry) {
            self.recent_files.insert(0, entry);
        }
    }

    /// Reset running time, launches and opened files. Nothing else is touched.
    pub fn clear_statistics(&mut self) {
        self.running_time = Duration::ZERO;
        self.launches = 0;
        self.opened_files = 0;
    }

    /// Add the time elapsed since process start to the running total.
    ///
    /// Each call adds the whole process lifetime so far, not the time since the previous
    /// call. Hosts call this once per session (typically right before saving).
    pub fn update_running_time<C: ProcessClock + ?Sized>(&mut self, clock: &C) {
        let elapsed = clock
            .now()
            .duration_since(clock.process_started())
            .unwrap_or_default();
        self.running_time = self.running_time.saturating_add(elapsed);
    }

    pub fn increase_number_of_launches(&mut self) {
        self.launches = self.launches.saturating_add(1);
    }

    /// First ten non-empty segments of the excluded-text block.
    pub fn excluded_entries(&self) -> Vec<String> {
        codec::text_block_entries(&self.excluded_text, TEXT_BLOCK_SPLITTER)
    }

    /// First ten non-empty segments of the include-text block.
    pub fn include_entries(&self) -> Vec<String> {
        codec::text_block_entries(&self.include_text, TEXT_BLOCK_SPLITTER)
    }

    /// Running time rendered as `dd.hh:mm:ss days`.
    pub fn display_running_time(&self) -> String {
        let total = self.running_time.as_secs();
        let days = total / 86_400;
        let hours = (total % 86_400) / 3_600;
        let minutes = (total % 3_600) / 60;
        let seconds = total % 60;
        format!(
            "{:02}.{:02}:{:02}:{:02} days",
            days, hours, minutes, seconds
        )
    }
}
