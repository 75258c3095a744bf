use bevy_ecs::prelude::*;

use crate::data::quests::{Quest, QuestCatalog};
use crate::rules::rank::{level_for_xp, rank_for, Rank};

/// Result of a successful completion, carrying the rank as derived
/// after the XP was applied.
#[derive(Debug, Clone)]
pub struct Completion {
    pub id: String,
    pub label: String,
    pub xp: u32,
    pub rank_after: Rank,
}

/// Resource owning the quest list and the hidden rank override.
///
/// Completion is monotonic and idempotent: a completed quest never
/// reverts, and completing it again changes nothing.
#[derive(Resource, Debug, Clone)]
pub struct QuestLog {
    quests: Vec<Quest>,
    hacker_mode: bool,
    xp_per_level: u32,
    dirty: bool,
}

impl QuestLog {
    pub fn from_catalog(catalog: QuestCatalog, xp_per_level: u32) -> Self {
        Self {
            quests: catalog.quests,
            hacker_mode: false,
            xp_per_level,
            dirty: false,
        }
    }

    /// Build from the default catalog with persisted completion flags
    /// merged on by id. Labels, XP values, and order stay canonical;
    /// stored ids with no counterpart in the catalog are dropped.
    pub fn from_catalog_with_saved(
        catalog: QuestCatalog,
        saved: &[Quest],
        xp_per_level: u32,
    ) -> Self {
        let mut log = Self::from_catalog(catalog, xp_per_level);
        for quest in &mut log.quests {
            if saved.iter().any(|s| s.id == quest.id && s.completed) {
                quest.completed = true;
            }
        }
        log
    }

    /// Complete a quest by id. Unknown ids and already-completed quests
    /// are no-ops returning `None`.
    pub fn complete(&mut self, id: &str) -> Option<Completion> {
        let quest = self.quests.iter_mut().find(|q| q.id == id)?;
        if quest.completed {
            return None;
        }
        quest.completed = true;
        let (id, label, xp) = (quest.id.clone(), quest.label.clone(), quest.xp);
        self.dirty = true;
        Some(Completion {
            id,
            label,
            xp,
            rank_after: self.rank(),
        })
    }

    /// Complete a quest addressed by its human-readable label.
    pub fn complete_by_label(&mut self, label: &str) -> Option<Completion> {
        let id = self
            .quests
            .iter()
            .find(|q| q.label == label)
            .map(|q| q.id.clone())?;
        self.complete(&id)
    }

    /// Turn on the rank override. Monotonic; returns true on the first
    /// activation only.
    pub fn set_hacker_mode(&mut self) -> bool {
        if self.hacker_mode {
            return false;
        }
        self.hacker_mode = true;
        true
    }

    pub fn hacker_mode(&self) -> bool {
        self.hacker_mode
    }

    pub fn xp(&self) -> u32 {
        self.quests
            .iter()
            .filter(|q| q.completed)
            .map(|q| q.xp)
            .sum()
    }

    pub fn level(&self) -> u32 {
        level_for_xp(self.xp(), self.xp_per_level)
    }

    pub fn rank(&self) -> Rank {
        rank_for(self.level(), self.hacker_mode)
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.quests.iter().any(|q| q.id == id && q.completed)
    }

    /// Incomplete quests that carry a prompt link, registry order.
    pub fn missed_prompts(&self) -> impl Iterator<Item = &Quest> {
        self.quests
            .iter()
            .filter(|q| !q.completed && q.link.is_some())
    }

    /// Consume the dirty flag; true means state changed since the last
    /// persistence flush.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Resource collecting completions for the presenter to drain.
#[derive(Resource, Default, Debug)]
pub struct CompletionFeed(pub Vec<Completion>);
