use bevy_ecs::prelude::*;

use crate::core::tracker::InputQueue;
use crate::session::notifications::ScrollMarkers;
use crate::session::quest_log::QuestLog;
use crate::storage::QuestStore;

/// Resource owning the persistence backend.
#[derive(Resource)]
pub struct StoreHandle(pub Box<dyn QuestStore>);

/// System: flushes the quest list to storage when it changed this tick.
///
/// Storage failure is logged and swallowed; engagement tracking is
/// best-effort and never surfaces an error to the page.
pub fn persist_system(mut quests: ResMut<QuestLog>, store: Res<StoreHandle>) {
    if !quests.take_dirty() {
        return;
    }
    if let Err(err) = store.0.save_quests(quests.quests()) {
        log::warn!("failed to persist quest state: {}", err);
    }
}

/// System: drops consumed input and per-tick markers.
pub fn clear_tick_system(mut queue: ResMut<InputQueue>, mut markers: ResMut<ScrollMarkers>) {
    queue.0.clear();
    markers.near_bottom = false;
}

/// Immediate flush for completions made outside the tick flow.
pub fn persist_now(world: &mut World) {
    world.resource_scope(|world, mut quests: Mut<QuestLog>| {
        if !quests.take_dirty() {
            return;
        }
        let store = world.resource::<StoreHandle>();
        if let Err(err) = store.0.save_quests(quests.quests()) {
            log::warn!("failed to persist quest state: {}", err);
        }
    });
}
