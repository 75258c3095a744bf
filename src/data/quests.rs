use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A one-time engagement milestone with an experience reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub label: String,
    pub xp: u32,
    #[serde(default)]
    pub completed: bool,
    /// Anchor target used to prompt the user toward unseen content.
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestCatalog {
    pub schema_version: u32,
    pub quests: Vec<Quest>,
}

#[derive(Debug)]
pub enum QuestDataError {
    Io { path: String, source: std::io::Error },
    Json { path: String, source: serde_json::Error },
    Validation(String),
}

impl std::fmt::Display for QuestDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestDataError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            QuestDataError::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
            QuestDataError::Validation(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for QuestDataError {}

pub fn load_quest_catalog(path: impl AsRef<Path>) -> Result<QuestCatalog, QuestDataError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| QuestDataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog: QuestCatalog =
        serde_json::from_str(&raw).map_err(|source| QuestDataError::Json {
            path: path.display().to_string(),
            source,
        })?;
    catalog.validate()?;
    Ok(catalog)
}

impl QuestCatalog {
    pub fn validate(&self) -> Result<(), QuestDataError> {
        let mut ids = HashSet::new();
        for quest in &self.quests {
            if quest.id.trim().is_empty() {
                return Err(QuestDataError::Validation(
                    "quest id cannot be empty".to_string(),
                ));
            }
            if !ids.insert(quest.id.clone()) {
                return Err(QuestDataError::Validation(format!(
                    "duplicate quest id {}",
                    quest.id
                )));
            }
            if quest.label.trim().is_empty() {
                return Err(QuestDataError::Validation(format!(
                    "quest {} missing label",
                    quest.id
                )));
            }
        }
        Ok(())
    }
}

/// The built-in registry, in registry order. Quests start incomplete.
pub fn default_catalog() -> QuestCatalog {
    let quest = |id: &str, label: &str, xp: u32, link: Option<&str>| Quest {
        id: id.to_string(),
        label: label.to_string(),
        xp,
        completed: false,
        link: link.map(|l| l.to_string()),
    };

    QuestCatalog {
        schema_version: 1,
        quests: vec![
            quest("scroll_hero", "First Steps", 10, None),
            quest("scroll_deep", "Deep Diver", 20, None),
            quest("click_project", "Project Hunter", 20, Some("#projects")),
            quest("click_github", "Code Explorer", 25, Some("#lab")),
            quest("click_contact", "Networker", 25, Some("#contact")),
            quest("time_spent", "Time Traveler", 15, None),
            quest("konami_code", "Konami Master", 60, None),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid_and_incomplete() {
        let catalog = default_catalog();
        catalog.validate().unwrap();
        assert!(catalog.quests.iter().all(|q| !q.completed));
    }

    #[test]
    fn time_spent_awards_fifteen_xp() {
        let catalog = default_catalog();
        let quest = catalog.quests.iter().find(|q| q.id == "time_spent").unwrap();
        assert_eq!(quest.xp, 15);
    }

    #[test]
    fn validation_rejects_duplicate_ids() {
        let mut catalog = default_catalog();
        let dup = catalog.quests[0].clone();
        catalog.quests.push(dup);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validation_rejects_empty_id() {
        let mut catalog = default_catalog();
        catalog.quests[0].id = "  ".to_string();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn quest_deserializes_with_defaults() {
        let quest: Quest =
            serde_json::from_str(r#"{"id":"x","label":"X","xp":5}"#).unwrap();
        assert!(!quest.completed);
        assert!(quest.link.is_none());
    }
}
