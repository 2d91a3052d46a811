use crate::codec::{self, CodecError};
use crate::models::{LogParserSettings, UserProfile};
use crate::store::{SettingsStore, SlotRead, SlotValue, StoreError, slots};
use thiserror::Error;

/// Errors that abort a profile load or save.
///
/// The nested parser-settings slot never produces one of these: its failures are absorbed.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to decode slot '{slot}': {source}")]
    Decode {
        slot: &'static str,
        #[source]
        source: CodecError,
    },
}

fn decode_slot<T>(
    slot: &'static str,
    result: Result<T, CodecError>,
) -> Result<T, SettingsError> {
    result.map_err(|source| SettingsError::Decode { slot, source })
}

/// Run the store's one-time upgrade if it is still pending.
///
/// The upgrade step, the cleared flag and a flush all happen before any slot is read, so
/// a successful upgrade is never repeated.
pub fn upgrade_if_required<S: SettingsStore + ?Sized>(store: &mut S) -> Result<(), SettingsError> {
    if !store.needs_upgrade() {
        return Ok(());
    }

    tracing::info!("Settings upgrade required, importing previous version");
    store.upgrade()?;
    store.set(slots::UPGRADE_REQUIRED, SlotValue::Bool(false));
    store.save()?;
    Ok(())
}

/// Load a complete profile from `store`.
///
/// Runs the pending upgrade first. Every slot is strict: an unreadable or undecodable slot
/// aborts the load. The exception is the parser-settings slot, which falls back to default
/// settings on any error.
pub fn load_profile<S: SettingsStore + ?Sized>(store: &mut S) -> Result<UserProfile, SettingsError> {
    upgrade_if_required(store)?;

    let recent_files = codec::decode_recent_files(&store.read_string(slots::RECENT_FILES)?);
    let startup_extensions = decode_slot(
        slots::STARTUP_EXTENSIONS,
        codec::decode_identifiers(&store.read_string(slots::STARTUP_EXTENSIONS)?),
    )?;
    let auto_start_data_providers = decode_slot(
        slots::AUTO_START_DATA_PROVIDERS,
        codec::decode_identifiers(&store.read_string(slots::AUTO_START_DATA_PROVIDERS)?),
    )?;

    let profile = UserProfile {
        skin_name: store.read_string(slots::SKIN_NAME)?,
        enable_user_statistics: store.read_bool(slots::ENABLE_USER_STATISTICS)?,
        running_time: store.read_duration(slots::RUNNING_TIME)?,
        launches: store.read_unsigned(slots::LAUNCHES_COUNT)?,
        opened_files: store.read_unsigned(slots::OPENED_FILES_COUNT)?,
        save_exclude_texts: store.read_bool(slots::SAVE_EXCLUDE_TEXTS)?,
        include_text: store.read_string(slots::INCLUDE_TEXT)?,
        excluded_text: store.read_string(slots::EXCLUDED_TEXT)?,
        excluded_modules: store.read_string(slots::EXCLUDED_MODULES)?,
        excluded_source: store.read_string(slots::EXCLUDED_SOURCE)?,
        search_also_in_source_and_module: store
            .read_bool(slots::SEARCH_ALSO_IN_SOURCE_AND_MODULE)?,
        recent_files,
        recent_files_count: store.read_int(slots::RECENT_FILES_COUNT)?,
        show_history_of_cleared_messages: store.read_bool(slots::SHOW_HISTORY_CLEARED_MESSAGES)?,
        enable_file_caching: store.read_bool(slots::ENABLE_FILE_CACHING)?,
        load_extensions_on_startup: store.read_bool(slots::LOAD_EXTENSIONS_ON_STARTUP)?,
        startup_extensions,
        startup_ribbon_minimized: store.read_bool(slots::STARTUP_RIBBON_MINIMIZED)?,
        startup_error_log_level: store.read_bool(slots::STARTUP_ERROR_LOG_LEVEL)?,
        show_changelog_at_startup: store.read_bool(slots::SHOW_CHANGELOG_AT_STARTUP)?,
        auto_start_data_providers,
        paging_enabled: store.read_bool(slots::PAGING_ENABLED)?,
        paging_size: store.read_int(slots::PAGING_SIZE)?,
        font_size: store.read_float(slots::FONT_SIZE)?,
        auto_scroll_to_last_message: store.read_bool(slots::AUTO_SCROLL_TO_LAST_MESSAGE)?,
        idle_mode: store.read_bool(slots::IDLE_MODE)?,
        idle_time_minutes: store.read_int(slots::IDLE_TIME_MINUTES)?,
        event_logs: codec::decode_string_list(&store.read_string(slots::WINDOWS_EVENT_LOGS)?),
        parser_settings: load_parser_settings(store),
        ..UserProfile::default()
    };

    tracing::info!(
        "Loaded user profile: skin={}, recent_files={}, launches={}, parser_configured={}",
        profile.skin_name,
        profile.recent_files.len(),
        profile.launches,
        profile.parser_settings.is_configured
    );
    Ok(profile)
}

/// Best-effort read of the nested parser settings: default on any failure.
fn load_parser_settings<S: SettingsStore + ?Sized>(store: &S) -> LogParserSettings {
    let raw = match store.read_string(slots::PARSER_SETTINGS) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Parser settings slot unreadable, using defaults: {}", e);
            return LogParserSettings::default();
        }
    };

    if raw.is_empty() {
        return LogParserSettings::default();
    }

    match serde_json::from_str::<LogParserSettings>(&raw) {
        Ok(settings) if settings.is_consistent() => settings,
        Ok(_) => {
            tracing::warn!("Parser settings are partially configured, using defaults");
            LogParserSettings::default()
        }
        Err(e) => {
            tracing::warn!("Parser settings are not valid JSON, using defaults: {}", e);
            LogParserSettings::default()
        }
    }
}

/// Best-effort encoding of the nested parser settings: empty string on failure.
fn encode_parser_settings(settings: &LogParserSettings) -> String {
    serde_json::to_string(settings).unwrap_or_else(|e| {
        tracing::warn!("Failed to encode parser settings, persisting empty slot: {}", e);
        String::new()
    })
}

/// Write every persisted field of `profile` into `store` and flush it.
///
/// The recent-files list is truncated to `recent_files_count` entries (a negative count
/// persists none). `show_changelog_at_startup` is always persisted as `false`. Session-only
/// fields are not written. Slots are written one by one; a failing flush can leave the
/// store partially updated.
pub fn save_profile<S: SettingsStore + ?Sized>(
    profile: &UserProfile,
    store: &mut S,
) -> Result<(), SettingsError> {
    let recent_cap = usize::try_from(profile.recent_files_count).unwrap_or(0);
    let recent_len = profile.recent_files.len().min(recent_cap);

    let string_slots = [
        (slots::SKIN_NAME, profile.skin_name.clone()),
        (slots::EXCLUDED_TEXT, profile.excluded_text.clone()),
        (slots::EXCLUDED_SOURCE, profile.excluded_source.clone()),
        (slots::EXCLUDED_MODULES, profile.excluded_modules.clone()),
        (slots::INCLUDE_TEXT, profile.include_text.clone()),
        (
            slots::RECENT_FILES,
            codec::encode_recent_files(&profile.recent_files[..recent_len]),
        ),
        (
            slots::STARTUP_EXTENSIONS,
            codec::encode_identifiers(&profile.startup_extensions),
        ),
        (
            slots::WINDOWS_EVENT_LOGS,
            codec::encode_string_list(&profile.event_logs),
        ),
        (
            slots::AUTO_START_DATA_PROVIDERS,
            codec::encode_identifiers(&profile.auto_start_data_providers),
        ),
        (
            slots::PARSER_SETTINGS,
            encode_parser_settings(&profile.parser_settings),
        ),
    ];
    for (key, value) in string_slots {
        store.set(key, SlotValue::String(value));
    }

    let bool_slots = [
        (slots::ENABLE_USER_STATISTICS, profile.enable_user_statistics),
        (
            slots::SHOW_HISTORY_CLEARED_MESSAGES,
            profile.show_history_of_cleared_messages,
        ),
        (slots::SAVE_EXCLUDE_TEXTS, profile.save_exclude_texts),
        (slots::ENABLE_FILE_CACHING, profile.enable_file_caching),
        (
            slots::LOAD_EXTENSIONS_ON_STARTUP,
            profile.load_extensions_on_startup,
        ),
        (slots::STARTUP_RIBBON_MINIMIZED, profile.startup_ribbon_minimized),
        (slots::STARTUP_ERROR_LOG_LEVEL, profile.startup_error_log_level),
        (slots::PAGING_ENABLED, profile.paging_enabled),
        (slots::SHOW_CHANGELOG_AT_STARTUP, false),
        (
            slots::SEARCH_ALSO_IN_SOURCE_AND_MODULE,
            profile.search_also_in_source_and_module,
        ),
        (slots::IDLE_MODE, profile.idle_mode),
        (
            slots::AUTO_SCROLL_TO_LAST_MESSAGE,
            profile.auto_scroll_to_last_message,
        ),
    ];
    for (key, value) in bool_slots {
        store.set(key, SlotValue::Bool(value));
    }

    store.set(slots::RUNNING_TIME, SlotValue::Duration(profile.running_time));
    store.set(slots::LAUNCHES_COUNT, SlotValue::Unsigned(profile.launches));
    store.set(slots::OPENED_FILES_COUNT, SlotValue::Unsigned(profile.opened_files));
    store.set(
        slots::RECENT_FILES_COUNT,
        SlotValue::Int(profile.recent_files_count),
    );
    store.set(slots::PAGING_SIZE, SlotValue::Int(profile.paging_size));
    store.set(slots::FONT_SIZE, SlotValue::Float(profile.font_size));
    store.set(
        slots::IDLE_TIME_MINUTES,
        SlotValue::Int(profile.idle_time_minutes),
    );

    store.save()?;

    tracing::debug!(
        "Saved user profile: recent_files={} of {}, launches={}",
        recent_len,
        profile.recent_files.len(),
        profile.launches
    );
    Ok(())
}

/// Owns a settings store and the profile loaded from it.
///
/// Every mutation takes `&mut self`; callers sharing a manager across threads must wrap it
/// in their own lock.
#[derive(Debug)]
pub struct SettingsManager<S: SettingsStore> {
    store: S,
    profile: UserProfile,
}

impl<S: SettingsStore> SettingsManager<S> {
    /// Load the profile from `store` and take ownership of both.
    pub fn open(mut store: S) -> Result<Self, SettingsError> {
        let profile = load_profile(&mut store)?;
        Ok(Self { store, profile })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    /// Discard in-memory changes and load the profile again.
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        self.profile = load_profile(&mut self.store)?;
        Ok(())
    }

    /// Persist the current profile.
    pub fn save(&mut self) -> Result<(), SettingsError> {
        save_profile(&self.profile, &mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, UserProfile) {
        (self.store, self.profile)
    }
}
