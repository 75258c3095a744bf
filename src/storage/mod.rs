pub mod memory;
pub mod sqlite;

use crate::data::quests::Quest;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// The storage key holding the JSON-encoded quest array.
pub const QUEST_LOG_KEY: &str = "quest_log";

#[derive(Debug)]
pub enum StoreError {
    Db(rusqlite::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Db(err) => write!(f, "storage error: {}", err),
            StoreError::Json(err) => write!(f, "stored quest log is not valid JSON: {}", err),
        }
    }
}

impl std::error::Error for StoreError {}

/// Key-value persistence for the quest list, read once at startup and
/// written after every completion. Implementations must be shareable as
/// an ECS resource, hence `Send + Sync`.
pub trait QuestStore: Send + Sync {
    /// Returns `Ok(None)` when nothing was ever stored. A present but
    /// unparsable blob is an error; callers fall back to defaults.
    fn load_quests(&self) -> Result<Option<Vec<Quest>>, StoreError>;

    fn save_quests(&self, quests: &[Quest]) -> Result<(), StoreError>;
}
