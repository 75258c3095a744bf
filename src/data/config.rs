use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunable thresholds for the tracker. Every field has a default so a
/// partial config file only overrides what it names.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Scroll offset in device pixels past which the hero counts as left.
    pub hero_scroll_px: f64,
    /// Fraction of the scrollable range that counts as a deep scroll.
    pub deep_scroll_ratio: f64,
    /// Viewport visibility ratio at which a section becomes current.
    pub visibility_threshold: f64,
    /// How long a completion notification stays visible.
    pub notification_ms: u64,
    /// Dwell time that completes the time quest.
    pub time_quest_secs: u64,
    /// Minimum session length before the end-of-session manifest may show.
    pub manifest_min_secs: u64,
    /// Distance from the document bottom that counts as "reached the end".
    pub manifest_bottom_slack_px: f64,
    pub xp_per_level: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            hero_scroll_px: 150.0,
            deep_scroll_ratio: 0.6,
            visibility_threshold: 0.3,
            notification_ms: 4500,
            time_quest_secs: 60,
            manifest_min_secs: 5,
            manifest_bottom_slack_px: 100.0,
            xp_per_level: 25,
        }
    }
}

/// Load a config file, falling back to defaults on any failure.
pub fn load_config(path: impl AsRef<Path>) -> TrackerConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("failed to parse {}: {}", path.display(), err);
                TrackerConfig::default()
            }
        },
        Err(err) => {
            log::warn!("failed to read {}: {}", path.display(), err);
            TrackerConfig::default()
        }
    }
}
