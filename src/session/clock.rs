use std::collections::HashMap;

use bevy_ecs::prelude::*;

use crate::data::sections::Section;

/// Non-reactive snapshot of the session timers, read on demand so the
/// tick does not drive any rendering.
#[derive(Debug, Clone)]
pub struct SessionTimes {
    pub total_secs: u64,
    pub section_secs: Vec<(Section, u64)>,
}

/// Resource tracking wall-clock dwell for the mounted session.
///
/// Runs in milliseconds so the notification expiry and the second-level
/// thresholds share one clock. Never persisted; dropped with the world.
#[derive(Resource, Debug, Clone)]
pub struct SessionClock {
    total_ms: u64,
    section_ms: HashMap<Section, u64>,
    current: Section,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self {
            total_ms: 0,
            section_ms: HashMap::new(),
            // The page opens at the top, so dwell accrues to the hero
            // until the observer reports otherwise.
            current: Section::Hero,
        }
    }
}

impl SessionClock {
    /// Advance the clock, accruing dwell to the current section.
    pub fn advance(&mut self, dt_ms: u64) {
        self.total_ms += dt_ms;
        *self.section_ms.entry(self.current).or_insert(0) += dt_ms;
    }

    pub fn set_current(&mut self, section: Section) {
        self.current = section;
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn total_secs(&self) -> u64 {
        self.total_ms / 1000
    }

    pub fn section_secs(&self, section: Section) -> u64 {
        self.section_ms.get(&section).copied().unwrap_or(0) / 1000
    }

    /// Section with the highest dwell. Ties resolve to the earliest
    /// section in document order; sections never visited do not appear.
    pub fn top_section(&self) -> Option<(Section, u64)> {
        let mut best: Option<(Section, u64)> = None;
        for section in Section::ALL {
            let Some(&ms) = self.section_ms.get(&section) else {
                continue;
            };
            if best.map_or(true, |(_, best_ms)| ms > best_ms) {
                best = Some((section, ms));
            }
        }
        best.map(|(section, ms)| (section, ms / 1000))
    }

    pub fn times(&self) -> SessionTimes {
        let section_secs = Section::ALL
            .iter()
            .filter_map(|section| {
                self.section_ms
                    .get(section)
                    .map(|ms| (*section, ms / 1000))
            })
            .collect();
        SessionTimes {
            total_secs: self.total_secs(),
            section_secs,
        }
    }
}
