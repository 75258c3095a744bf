use bevy_ecs::prelude::*;

use crate::core::ecs::{create_schedule, create_world};
use crate::data::config::TrackerConfig;
use crate::data::quests::Quest;
use crate::data::sections::Section;
use crate::rules::classify::ClickTarget;
use crate::rules::konami::Key;
use crate::rules::rank::Rank;
use crate::session::clock::{SessionClock, SessionTimes};
use crate::session::notifications::{
    ManifestState, Notification, NotificationState, SessionManifest,
};
use crate::session::quest_log::{CompletionFeed, QuestLog};
use crate::storage::QuestStore;
use crate::systems::persist::persist_now;

/// Raw interaction events fed into each tick, in arrival order.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A document-level click, resolved to its nearest interactive
    /// ancestor by the embedding.
    Click(ClickTarget),
    /// Scroll geometry in device pixels.
    Scroll {
        offset: f64,
        viewport: f64,
        document: f64,
    },
    KeyDown(Key),
    /// One viewport-intersection report. Reports are applied in push
    /// order, so within a batch the last section at or above the
    /// visibility threshold wins.
    SectionVisibility { section: Section, ratio: f64 },
}

/// Resource storing the events for the next tick.
#[derive(Resource, Default, Debug)]
pub struct InputQueue(pub Vec<InputEvent>);

/// Milliseconds the current tick advances the session clock by.
#[derive(Resource, Debug)]
pub struct TickStep(pub u64);

impl Default for TickStep {
    fn default() -> Self {
        Self(1000)
    }
}

/// Data snapshot returned to the presentation layer after each tick.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub xp: u32,
    pub level: u32,
    pub rank: Rank,
    pub hacker_mode: bool,
    pub quests: Vec<Quest>,
    pub current_section: Section,
    pub notification: Option<Notification>,
    pub manifest: Option<SessionManifest>,
}

/// Wrapper around the ECS world and schedule. Owns every listener-like
/// piece of state, so dropping the tracker releases the lot.
pub struct Tracker {
    world: World,
    schedule: Schedule,
}

impl Tracker {
    /// Create a tracker with default configuration, loading any
    /// persisted quest state from the store. A missing or unreadable
    /// blob silently falls back to the default registry.
    pub fn new(store: Box<dyn QuestStore>) -> Self {
        Self::with_config(TrackerConfig::default(), store)
    }

    pub fn with_config(config: TrackerConfig, store: Box<dyn QuestStore>) -> Self {
        let world = create_world(config, store);
        let schedule = create_schedule();
        Self { world, schedule }
    }

    /// Run one tick with the provided events, advancing the session
    /// clock by one second, and return a snapshot for rendering.
    pub fn tick(&mut self, events: Vec<InputEvent>) -> Snapshot {
        self.tick_ms(events, 1000)
    }

    /// Run one tick with an explicit time step in milliseconds.
    pub fn tick_ms(&mut self, events: Vec<InputEvent>, dt_ms: u64) -> Snapshot {
        {
            let mut queue = self.world.resource_mut::<InputQueue>();
            queue.0 = events;
        }
        self.world.resource_mut::<TickStep>().0 = dt_ms;

        self.schedule.run(&mut self.world);
        Snapshot::capture(&self.world)
    }

    /// Complete a quest by id from outside the event flow. Unknown and
    /// already-completed ids are no-ops. Persists immediately on
    /// success; the completion also feeds the next tick's notification.
    pub fn complete_quest(&mut self, id: &str) -> bool {
        let completion = self.world.resource_mut::<QuestLog>().complete(id);
        match completion {
            Some(completion) => {
                self.world.resource_mut::<CompletionFeed>().0.push(completion);
                persist_now(&mut self.world);
                true
            }
            None => false,
        }
    }

    /// Label-addressed completion, kept for callers that only know the
    /// human-readable achievement name.
    pub fn unlock_achievement(&mut self, label: &str) -> bool {
        let completion = self.world.resource_mut::<QuestLog>().complete_by_label(label);
        match completion {
            Some(completion) => {
                self.world.resource_mut::<CompletionFeed>().0.push(completion);
                persist_now(&mut self.world);
                true
            }
            None => false,
        }
    }

    pub fn xp(&self) -> u32 {
        self.world.resource::<QuestLog>().xp()
    }

    pub fn level(&self) -> u32 {
        self.world.resource::<QuestLog>().level()
    }

    pub fn rank(&self) -> Rank {
        self.world.resource::<QuestLog>().rank()
    }

    pub fn quests(&self) -> Vec<Quest> {
        self.world.resource::<QuestLog>().quests().to_vec()
    }

    pub fn current_section(&self) -> Section {
        self.world.resource::<SessionClock>().current()
    }

    /// Non-reactive dwell snapshot, read on demand so the one-second
    /// tick never forces a render.
    pub fn times(&self) -> SessionTimes {
        self.world.resource::<SessionClock>().times()
    }
}

impl Snapshot {
    fn capture(world: &World) -> Self {
        let log = world.resource::<QuestLog>();
        let clock = world.resource::<SessionClock>();
        let notification = world.resource::<NotificationState>().current.clone();
        let manifest = world.resource::<ManifestState>().current.clone();

        Snapshot {
            xp: log.xp(),
            level: log.level(),
            rank: log.rank(),
            hacker_mode: log.hacker_mode(),
            quests: log.quests().to_vec(),
            current_section: clock.current(),
            notification,
            manifest,
        }
    }
}
