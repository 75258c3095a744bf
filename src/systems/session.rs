use bevy_ecs::prelude::*;

use crate::core::tracker::TickStep;
use crate::data::config::TrackerConfig;
use crate::session::clock::SessionClock;
use crate::session::quest_log::{CompletionFeed, QuestLog};

/// System: advances the session clock and accrues per-section dwell.
///
/// The time quest completes exactly once, on the tick where total time
/// first reaches the configured threshold. Its completion is picked up
/// by the presenter on the following tick.
pub fn session_timer_system(
    step: Res<TickStep>,
    config: Res<TrackerConfig>,
    mut clock: ResMut<SessionClock>,
    mut quests: ResMut<QuestLog>,
    mut feed: ResMut<CompletionFeed>,
) {
    let threshold_ms = config.time_quest_secs * 1000;
    let before = clock.total_ms();
    clock.advance(step.0);

    if before < threshold_ms && clock.total_ms() >= threshold_ms {
        if let Some(completion) = quests.complete("time_spent") {
            feed.0.push(completion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tracker::InputQueue;
    use crate::session::notifications::{ManifestState, NotificationState, ScrollMarkers};
    use crate::data::quests::default_catalog;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(TrackerConfig::default());
        world.insert_resource(TickStep(1000));
        world.insert_resource(SessionClock::default());
        world.insert_resource(QuestLog::from_catalog(default_catalog(), 25));
        world.insert_resource(CompletionFeed::default());
        world.insert_resource(InputQueue::default());
        world.insert_resource(NotificationState::default());
        world.insert_resource(ManifestState::default());
        world.insert_resource(ScrollMarkers::default());
        world
    }

    #[test]
    fn time_quest_fires_exactly_once_at_the_threshold() {
        let mut world = world();
        let mut schedule = Schedule::default();
        schedule.add_systems(session_timer_system);

        for _ in 0..59 {
            schedule.run(&mut world);
        }
        assert!(!world.resource::<QuestLog>().is_completed("time_spent"));

        schedule.run(&mut world);
        assert!(world.resource::<QuestLog>().is_completed("time_spent"));
        assert_eq!(world.resource::<CompletionFeed>().0.len(), 1);

        schedule.run(&mut world);
        assert_eq!(world.resource::<CompletionFeed>().0.len(), 1);
    }
}
