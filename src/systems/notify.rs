use bevy_ecs::prelude::*;

use crate::data::config::TrackerConfig;
use crate::session::clock::SessionClock;
use crate::session::notifications::{
    ManifestState, MissedPrompt, Notification, NotificationState, ScrollMarkers, SessionManifest,
};
use crate::session::quest_log::{CompletionFeed, QuestLog};

/// System: expires the visible toast, then surfaces fresh completions.
///
/// The feed is drained each tick; when several quests complete at once
/// the newest one wins the single toast slot.
pub fn notification_system(
    config: Res<TrackerConfig>,
    clock: Res<SessionClock>,
    mut feed: ResMut<CompletionFeed>,
    mut state: ResMut<NotificationState>,
) {
    let now = clock.total_ms();
    if let Some(current) = &state.current {
        if now >= current.shown_at_ms + config.notification_ms {
            state.current = None;
        }
    }

    for completion in feed.0.drain(..) {
        state.current = Some(Notification {
            message: completion.label,
            rank: completion.rank_after,
            shown_at_ms: now,
        });
    }
}

/// System: builds the end-of-session manifest, at most once.
///
/// Requires the near-bottom marker raised this tick and a minimum of
/// accumulated dwell, so a visitor who jumps straight to the footer
/// sees nothing.
pub fn manifest_system(
    config: Res<TrackerConfig>,
    clock: Res<SessionClock>,
    quests: Res<QuestLog>,
    markers: Res<ScrollMarkers>,
    mut state: ResMut<ManifestState>,
) {
    if state.shown || !markers.near_bottom || clock.total_secs() <= config.manifest_min_secs {
        return;
    }

    let missed = quests
        .missed_prompts()
        .take(2)
        .map(|quest| MissedPrompt {
            label: quest.label.clone(),
            link: quest.link.clone().unwrap_or_default(),
        })
        .collect();

    state.shown = true;
    state.current = Some(SessionManifest {
        missed,
        top_section: clock.top_section(),
        total_secs: clock.total_secs(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quests::default_catalog;
    use crate::rules::rank::Rank;
    use crate::session::quest_log::Completion;

    #[test]
    fn newest_completion_wins_the_toast() {
        let mut feed = CompletionFeed::default();
        feed.0.push(Completion {
            id: "scroll_hero".to_string(),
            label: "First Steps".to_string(),
            xp: 10,
            rank_after: Rank::Bronze,
        });
        feed.0.push(Completion {
            id: "scroll_deep".to_string(),
            label: "Deep Diver".to_string(),
            xp: 20,
            rank_after: Rank::Bronze,
        });

        let mut world = World::new();
        world.insert_resource(TrackerConfig::default());
        world.insert_resource(SessionClock::default());
        world.insert_resource(feed);
        world.insert_resource(NotificationState::default());

        let mut schedule = Schedule::default();
        schedule.add_systems(notification_system);
        schedule.run(&mut world);

        let state = world.resource::<NotificationState>();
        assert_eq!(state.current.as_ref().unwrap().message, "Deep Diver");
        assert!(world.resource::<CompletionFeed>().0.is_empty());
    }

    #[test]
    fn manifest_respects_minimum_dwell() {
        let mut clock = SessionClock::default();
        clock.advance(5000);

        let mut world = World::new();
        world.insert_resource(TrackerConfig::default());
        world.insert_resource(clock);
        world.insert_resource(QuestLog::from_catalog(default_catalog(), 25));
        world.insert_resource(ScrollMarkers { near_bottom: true });
        world.insert_resource(ManifestState::default());

        let mut schedule = Schedule::default();
        schedule.add_systems(manifest_system);
        schedule.run(&mut world);
        // 5 seconds is not strictly more than the 5-second minimum.
        assert!(world.resource::<ManifestState>().current.is_none());

        world.resource_mut::<SessionClock>().advance(1000);
        schedule.run(&mut world);
        let state = world.resource::<ManifestState>();
        assert!(state.shown);
        let manifest = state.current.as_ref().unwrap();
        assert_eq!(manifest.total_secs, 6);
        assert_eq!(manifest.missed.len(), 2);
        assert_eq!(manifest.missed[0].link, "#projects");
    }
}
