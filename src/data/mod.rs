pub mod config;
pub mod quests;
pub mod sections;
