// Re-export core modules for use by the binary or other consumers
pub mod core;
pub mod data;
pub mod rules;
pub mod session;
pub mod storage;
pub mod systems;

// Expose the main Tracker wrapper and types needed for interaction
pub use crate::core::tracker::{InputEvent, Snapshot, Tracker};
pub use crate::data::config::TrackerConfig;
pub use crate::data::quests::Quest;
pub use crate::data::sections::Section;
pub use crate::rules::classify::{ClickTarget, ElementKind};
pub use crate::rules::konami::Key;
pub use crate::rules::rank::Rank;
pub use crate::session::clock::SessionTimes;
pub use crate::storage::{MemoryStore, QuestStore, SqliteStore};
