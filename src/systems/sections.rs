use bevy_ecs::prelude::*;

use crate::core::tracker::{InputEvent, InputQueue};
use crate::data::config::TrackerConfig;
use crate::session::clock::SessionClock;

/// System: tracks which section currently dominates the viewport.
///
/// Reports below the visibility threshold are ignored. Within a batch
/// the last qualifying report wins; callers push reports in document
/// order, so ties resolve to the later section. Sections whose elements
/// never existed simply never report.
pub fn section_observer_system(
    queue: Res<InputQueue>,
    config: Res<TrackerConfig>,
    mut clock: ResMut<SessionClock>,
) {
    for event in queue.0.iter() {
        if let InputEvent::SectionVisibility { section, ratio } = event {
            if *ratio >= config.visibility_threshold {
                clock.set_current(*section);
            }
        }
    }
}
