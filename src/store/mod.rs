//! The persisted key-value store boundary.
//!
//! A store is a flat set of named slots, each holding one [`SlotValue`]. Composite values
//! (lists, tuple lists, the nested parser settings) travel through string slots encoded by
//! [`crate::codec`]. Stores are seeded with [`slots::defaults`] so that a key that was never
//! written reads back as its default.
//!
//! Two implementations are provided:
//! - [`MemoryStore`]: in-process only, used by tests and embedding hosts
//! - [`YamlStore`]: one YAML file per user, with a previous-version file consumed by
//!   [`SettingsStore::upgrade`]

pub mod memory;
pub mod slots;
pub mod yaml;

pub use memory::MemoryStore;
pub use yaml::YamlStore;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Value held by one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SlotValue {
    String(String),
    Bool(bool),
    Int(i32),
    Float(f32),
    Unsigned(u32),
    Duration(Duration),
}

impl SlotValue {
    /// Name of the value's kind, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            SlotValue::String(_) => "string",
            SlotValue::Bool(_) => "bool",
            SlotValue::Int(_) => "int",
            SlotValue::Float(_) => "float",
            SlotValue::Unsigned(_) => "unsigned",
            SlotValue::Duration(_) => "duration",
        }
    }
}

/// Errors raised by stores and by typed slot reads.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access settings file {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("Slot '{0}' is not defined")]
    MissingSlot(String),

    #[error("Slot '{key}' holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Narrow interface to the persisted slot store.
///
/// Writes made through [`set`](Self::set) are only durable after [`save`](Self::save).
/// Implementations are not synchronized; callers serialize access.
pub trait SettingsStore {
    /// Current value of a slot, or `None` if the key is unknown to this store.
    fn get(&self, key: &str) -> Option<SlotValue>;

    /// Overwrite a slot in memory.
    fn set(&mut self, key: &str, value: SlotValue);

    /// Whether a one-time upgrade from a previous version is still pending.
    fn needs_upgrade(&self) -> bool {
        matches!(self.get(slots::UPGRADE_REQUIRED), Some(SlotValue::Bool(true)))
    }

    /// Import settings carried over from a previous version.
    fn upgrade(&mut self) -> Result<(), StoreError>;

    /// Flush all slot writes durably.
    fn save(&mut self) -> Result<(), StoreError>;
}

fn read_slot<S: SettingsStore + ?Sized>(store: &S, key: &str) -> Result<SlotValue, StoreError> {
    store
        .get(key)
        .ok_or_else(|| StoreError::MissingSlot(key.to_string()))
}

fn mismatch(key: &str, expected: &'static str, found: &SlotValue) -> StoreError {
    StoreError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Typed reads over any [`SettingsStore`].
///
/// A missing key is [`StoreError::MissingSlot`]; a slot of another kind is
/// [`StoreError::TypeMismatch`].
pub trait SlotRead: SettingsStore {
    fn read_string(&self, key: &str) -> Result<String, StoreError> {
        match read_slot(self, key)? {
            SlotValue::String(value) => Ok(value),
            other => Err(mismatch(key, "string", &other)),
        }
    }

    fn read_bool(&self, key: &str) -> Result<bool, StoreError> {
        match read_slot(self, key)? {
            SlotValue::Bool(value) => Ok(value),
            other => Err(mismatch(key, "bool", &other)),
        }
    }

    fn read_int(&self, key: &str) -> Result<i32, StoreError> {
        match read_slot(self, key)? {
            SlotValue::Int(value) => Ok(value),
            other => Err(mismatch(key, "int", &other)),
        }
    }

    fn read_float(&self, key: &str) -> Result<f32, StoreError> {
        match read_slot(self, key)? {
            SlotValue::Float(value) => Ok(value),
            other => Err(mismatch(key, "float", &other)),
        }
    }

    fn read_unsigned(&self, key: &str) -> Result<u32, StoreError> {
        match read_slot(self, key)? {
            SlotValue::Unsigned(value) => Ok(value),
            other => Err(mismatch(key, "unsigned", &other)),
        }
    }

    fn read_duration(&self, key: &str) -> Result<Duration, StoreError> {
        match read_slot(self, key)? {
            SlotValue::Duration(value) => Ok(value),
            other => Err(mismatch(key, "duration", &other)),
        }
    }
}

impl<S: SettingsStore + ?Sized> SlotRead for S {}
