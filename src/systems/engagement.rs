use bevy_ecs::prelude::*;

use crate::core::tracker::{InputEvent, InputQueue};
use crate::data::config::TrackerConfig;
use crate::rules::classify::{classify_click, is_deep_scroll, is_near_bottom, leaves_hero};
use crate::rules::konami::KonamiCursor;
use crate::session::notifications::ScrollMarkers;
use crate::session::quest_log::{CompletionFeed, QuestLog};

/// Resource holding the key-sequence cursor across ticks.
#[derive(Resource, Default, Debug)]
pub struct KonamiState(pub KonamiCursor);

/// System: maps raw interaction events to quest completions.
///
/// The click, scroll, and key rules are independent; events are applied
/// in arrival order and every completion lands in the feed for the
/// presenter.
pub fn engagement_system(
    queue: Res<InputQueue>,
    config: Res<TrackerConfig>,
    mut quests: ResMut<QuestLog>,
    mut konami: ResMut<KonamiState>,
    mut feed: ResMut<CompletionFeed>,
    mut markers: ResMut<ScrollMarkers>,
) {
    for event in queue.0.iter() {
        match event {
            InputEvent::Click(target) => {
                for id in classify_click(target) {
                    if let Some(completion) = quests.complete(id) {
                        feed.0.push(completion);
                    }
                }
            }
            InputEvent::Scroll {
                offset,
                viewport,
                document,
            } => {
                if leaves_hero(*offset, config.hero_scroll_px) {
                    if let Some(completion) = quests.complete("scroll_hero") {
                        feed.0.push(completion);
                    }
                }
                if is_deep_scroll(*offset, *viewport, *document, config.deep_scroll_ratio) {
                    if let Some(completion) = quests.complete("scroll_deep") {
                        feed.0.push(completion);
                    }
                }
                if is_near_bottom(*offset, *viewport, *document, config.manifest_bottom_slack_px)
                {
                    markers.near_bottom = true;
                }
            }
            InputEvent::KeyDown(key) => {
                if konami.0.advance(*key) {
                    if quests.set_hacker_mode() {
                        log::debug!("hacker mode activated");
                    }
                    if let Some(completion) = quests.complete("konami_code") {
                        feed.0.push(completion);
                    }
                }
            }
            // Handled by the section observer.
            InputEvent::SectionVisibility { .. } => {}
        }
    }
}
