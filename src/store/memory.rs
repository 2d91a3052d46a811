use super::{SettingsStore, SlotValue, StoreError, slots};
use indexmap::IndexMap;

/// In-process slot store.
///
/// `save` only counts flushes; nothing leaves the process. `upgrade` overlays the slots
/// given to [`with_previous_version`](Self::with_previous_version), if any.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    slots: IndexMap<String, SlotValue>,
    previous: Option<IndexMap<String, SlotValue>>,
    save_count: usize,
}

impl MemoryStore {
    /// A store seeded with every default slot.
    pub fn new() -> Self {
        Self {
            slots: slots::defaults(),
            previous: None,
            save_count: 0,
        }
    }

    /// A store with no slots at all.
    pub fn empty() -> Self {
        Self {
            slots: IndexMap::new(),
            previous: None,
            save_count: 0,
        }
    }

    /// Slots to import on the next `upgrade`.
    pub fn with_previous_version(mut self, previous: IndexMap<String, SlotValue>) -> Self {
        self.previous = Some(previous);
        self
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn slots(&self) -> &IndexMap<String, SlotValue> {
        &self.slots
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<SlotValue> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: SlotValue) {
        self.slots.insert(key.to_string(), value);
    }

    fn upgrade(&mut self) -> Result<(), StoreError> {
        if let Some(previous) = self.previous.take() {
            for (key, value) in previous {
                if key != slots::UPGRADE_REQUIRED {
                    self.slots.insert(key, value);
                }
            }
        }
        Ok(())
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_seeded() {
        let store = MemoryStore::new();
        assert!(store.needs_upgrade());
        assert_eq!(
            store.get(slots::RECENT_FILES),
            Some(SlotValue::String(String::new()))
        );
        assert_eq!(store.get("no_such_slot"), None);
    }

    #[test]
    fn test_upgrade_overlays_previous_slots() {
        let mut previous = IndexMap::new();
        previous.insert(slots::PAGING_SIZE.to_string(), SlotValue::Int(100));
        previous.insert(slots::UPGRADE_REQUIRED.to_string(), SlotValue::Bool(false));

        let mut store = MemoryStore::new().with_previous_version(previous);
        store.upgrade().unwrap();

        assert_eq!(store.get(slots::PAGING_SIZE), Some(SlotValue::Int(100)));
        assert!(store.needs_upgrade());

        // A second upgrade has nothing left to import.
        store.set(slots::PAGING_SIZE, SlotValue::Int(7));
        store.upgrade().unwrap();
        assert_eq!(store.get(slots::PAGING_SIZE), Some(SlotValue::Int(7)));
    }
}
