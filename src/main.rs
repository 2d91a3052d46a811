//! LogView Prefs - session recorder for the user preference store
//!
//! # Execution Flow
//!
//! 1. Capture the process start time
//! 2. Load host configuration (defaults → optional `logview-prefs.yaml` → environment)
//! 3. Initialize logging → `<log_dir>/<log_prefix>.<date>`
//! 4. Open the YAML settings store and load the user profile (runs a pending upgrade)
//! 5. Record the launch and the session's running time
//! 6. Save the profile back to the store

use anyhow::Result;
use camino::Utf8Path;
use logview_prefs::services::SystemClock;
use logview_prefs::{APP_NAME, AppConfig, SettingsManager, VERSION, YamlStore};

fn main() -> Result<()> {
    let clock = SystemClock::new();

    let config = AppConfig::load(Some(Utf8Path::new("logview-prefs.yaml")))?;
    let _guard = logview_prefs::logging::setup_logging(&config)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let store = YamlStore::open(&config.settings_dir)?;
    let mut manager = SettingsManager::open(store)?;

    let profile = manager.profile_mut();
    profile.increase_number_of_launches();

    tracing::info!(
        "Profile: skin={}, launches={}, opened_files={}, running_time={}",
        profile.skin_name,
        profile.launches,
        profile.opened_files,
        profile.display_running_time()
    );
    for file in profile.recent_files.iter().take(5) {
        tracing::info!("Recent file: {} ({})", file.file_name, file.id);
    }
    if profile.parser_settings.is_configured {
        tracing::info!(
            "Custom log parser handles: {}",
            profile.parser_settings.supported_files_extensions.join(", ")
        );
    }

    if profile.enable_user_statistics {
        profile.update_running_time(&clock);
    }
    manager.save()?;

    tracing::info!("Settings saved, shutdown complete");
    Ok(())
}
