use super::{SettingsStore, SlotValue, StoreError, slots};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::fs;

/// File name of the current settings file.
pub const SETTINGS_FILE_NAME: &str = "user_settings.yaml";

/// File name of the settings written by the previous application version.
pub const PREVIOUS_SETTINGS_FILE_NAME: &str = "user_settings.previous.yaml";

/// Slot store backed by a YAML file.
///
/// The file maps slot keys to `{type, value}` pairs. Slots absent from the file keep their
/// default value; slots in the file that are not known defaults are kept and written back.
#[derive(Debug, Clone)]
pub struct YamlStore {
    settings_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
    previous_path: Utf8PathBuf,
    slots: IndexMap<String, SlotValue>,
}

impl YamlStore {
    /// Open the store in `settings_dir`, creating the directory if needed.
    ///
    /// A missing settings file is not an error: the store starts from defaults.
    pub fn open<P: AsRef<Utf8Path>>(settings_dir: P) -> Result<Self, StoreError> {
        let settings_dir = settings_dir.as_ref().to_path_buf();

        if !settings_dir.exists() {
            fs::create_dir_all(&settings_dir).map_err(|source| StoreError::Io {
                path: settings_dir.clone(),
                source,
            })?;
        }

        let settings_path = settings_dir.join(SETTINGS_FILE_NAME);
        let mut slots = slots::defaults();

        if settings_path.exists() {
            let persisted = read_slot_file(&settings_path)?;
            tracing::info!(
                "Loaded {} slots from {}",
                persisted.len(),
                settings_path
            );
            slots.extend(persisted);
        } else {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                settings_path
            );
        }

        Ok(Self {
            previous_path: settings_dir.join(PREVIOUS_SETTINGS_FILE_NAME),
            settings_path,
            settings_dir,
            slots,
        })
    }

    /// Get the settings directory path.
    pub fn settings_dir(&self) -> &Utf8Path {
        &self.settings_dir
    }

    /// Get the path of the settings file written by `save`.
    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}

fn read_slot_file(path: &Utf8Path) -> Result<IndexMap<String, SlotValue>, StoreError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Ok(IndexMap::new());
    }

    serde_yaml_ng::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl SettingsStore for YamlStore {
    fn get(&self, key: &str) -> Option<SlotValue> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: SlotValue) {
        self.slots.insert(key.to_string(), value);
    }

    fn upgrade(&mut self) -> Result<(), StoreError> {
        if !self.previous_path.exists() {
            tracing::info!(
                "No previous settings at {}, nothing to upgrade",
                self.previous_path
            );
            return Ok(());
        }

        let previous = read_slot_file(&self.previous_path)?;
        let mut imported = 0;
        for (key, value) in previous {
            if key == slots::UPGRADE_REQUIRED {
                continue;
            }
            self.slots.insert(key, value);
            imported += 1;
        }

        tracing::info!(
            "Imported {} slots from previous settings {}",
            imported,
            self.previous_path
        );
        Ok(())
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let yaml_string = serde_yaml_ng::to_string(&self.slots).map_err(StoreError::Serialize)?;

        fs::write(&self.settings_path, yaml_string).map_err(|source| StoreError::Io {
            path: self.settings_path.clone(),
            source,
        })?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }
}
