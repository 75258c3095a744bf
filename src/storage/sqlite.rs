use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use crate::data::quests::Quest;
use crate::storage::{QuestStore, StoreError, QUEST_LOG_KEY};

const KV_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL
);
"#;

/// Durable key-value store holding the quest blob, the on-disk analog
/// of the browser's local storage.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(StoreError::Db)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(StoreError::Db)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(KV_SCHEMA).map_err(StoreError::Db)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(StoreError::Db)
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(StoreError::Db)?;
        Ok(())
    }
}

impl QuestStore for SqliteStore {
    fn load_quests(&self) -> Result<Option<Vec<Quest>>, StoreError> {
        let Some(raw) = self.read_raw(QUEST_LOG_KEY)? else {
            return Ok(None);
        };
        let quests = serde_json::from_str(&raw).map_err(StoreError::Json)?;
        Ok(Some(quests))
    }

    fn save_quests(&self, quests: &[Quest]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(quests).map_err(StoreError::Json)?;
        self.write_raw(QUEST_LOG_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quests::default_catalog;

    #[test]
    fn empty_store_loads_nothing() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.load_quests().unwrap().is_none());
    }

    #[test]
    fn save_then_load_preserves_completion() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut quests = default_catalog().quests;
        quests[0].completed = true;

        store.save_quests(&quests).unwrap();
        let loaded = store.load_quests().unwrap().unwrap();
        assert_eq!(loaded.len(), quests.len());
        assert!(loaded[0].completed);
        assert!(!loaded[1].completed);
    }

    #[test]
    fn corrupt_blob_is_a_json_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.write_raw(QUEST_LOG_KEY, "{not json").unwrap();
        assert!(matches!(store.load_quests(), Err(StoreError::Json(_))));
    }

    #[test]
    fn second_save_overwrites_the_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut quests = default_catalog().quests;
        store.save_quests(&quests).unwrap();
        quests[2].completed = true;
        store.save_quests(&quests).unwrap();

        let loaded = store.load_quests().unwrap().unwrap();
        assert!(loaded[2].completed);
    }
}
