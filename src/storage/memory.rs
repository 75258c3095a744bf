use std::sync::Mutex;

use crate::data::quests::Quest;
use crate::storage::{QuestStore, StoreError};

/// In-memory store for tests and the demo driver. `seed_raw` lets a
/// test plant a corrupt payload to exercise the fallback path.
#[derive(Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_raw(raw: &str) -> Self {
        Self {
            raw: Mutex::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl QuestStore for MemoryStore {
    fn load_quests(&self) -> Result<Option<Vec<Quest>>, StoreError> {
        let guard = self.raw.lock().unwrap_or_else(|e| e.into_inner());
        let Some(raw) = guard.as_deref() else {
            return Ok(None);
        };
        let quests = serde_json::from_str(raw).map_err(StoreError::Json)?;
        Ok(Some(quests))
    }

    fn save_quests(&self, quests: &[Quest]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(quests).map_err(StoreError::Json)?;
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quests::default_catalog;

    #[test]
    fn round_trips_the_quest_list() {
        let store = MemoryStore::new();
        let quests = default_catalog().quests;
        store.save_quests(&quests).unwrap();
        assert_eq!(store.load_quests().unwrap().unwrap().len(), quests.len());
    }

    #[test]
    fn seeded_garbage_fails_to_parse() {
        let store = MemoryStore::seed_raw("][");
        assert!(matches!(store.load_quests(), Err(StoreError::Json(_))));
    }
}
