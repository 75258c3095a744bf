use bevy_ecs::prelude::*;
use bevy_ecs::schedule::SystemSet;

use crate::core::tracker::{InputQueue, TickStep};
use crate::data::config::TrackerConfig;
use crate::data::quests::default_catalog;
use crate::session::clock::SessionClock;
use crate::session::notifications::{ManifestState, NotificationState, ScrollMarkers};
use crate::session::quest_log::{CompletionFeed, QuestLog};
use crate::storage::QuestStore;
use crate::systems::engagement::{engagement_system, KonamiState};
use crate::systems::notify::{manifest_system, notification_system};
use crate::systems::persist::{clear_tick_system, persist_system, StoreHandle};
use crate::systems::sections::section_observer_system;
use crate::systems::session::session_timer_system;

/// Canonical tick ordering for the tracker.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TickSet {
    Intake,
    Simulation,
    Time,
    Cleanup,
}

/// Build the tracker world with baseline resources, reading any
/// persisted quest state through the store.
pub fn create_world(config: TrackerConfig, store: Box<dyn QuestStore>) -> World {
    let quest_log = load_quest_log(store.as_ref(), config.xp_per_level);

    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(quest_log);
    world.insert_resource(InputQueue::default());
    world.insert_resource(TickStep::default());
    world.insert_resource(SessionClock::default());
    world.insert_resource(KonamiState::default());
    world.insert_resource(CompletionFeed::default());
    world.insert_resource(NotificationState::default());
    world.insert_resource(ManifestState::default());
    world.insert_resource(ScrollMarkers::default());
    world.insert_resource(StoreHandle(store));
    world
}

/// Build the system schedule in the canonical order.
pub fn create_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.configure_sets(
        (TickSet::Intake, TickSet::Simulation, TickSet::Time, TickSet::Cleanup).chain(),
    );

    schedule.add_systems((
        engagement_system.in_set(TickSet::Intake),
        section_observer_system.in_set(TickSet::Intake),
        notification_system.in_set(TickSet::Simulation),
        manifest_system.in_set(TickSet::Simulation),
        session_timer_system.in_set(TickSet::Time),
        persist_system.in_set(TickSet::Cleanup),
        clear_tick_system.in_set(TickSet::Cleanup),
    ));

    schedule
}

fn load_quest_log(store: &dyn QuestStore, xp_per_level: u32) -> QuestLog {
    match store.load_quests() {
        Ok(Some(saved)) => {
            QuestLog::from_catalog_with_saved(default_catalog(), &saved, xp_per_level)
        }
        Ok(None) => QuestLog::from_catalog(default_catalog(), xp_per_level),
        Err(err) => {
            log::warn!("discarding stored quest state: {}", err);
            QuestLog::from_catalog(default_catalog(), xp_per_level)
        }
    }
}
