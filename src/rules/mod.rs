pub mod classify;
pub mod konami;
pub mod rank;

pub use classify::{
    classify_click, is_deep_scroll, is_near_bottom, leaves_hero, ClickTarget, ElementKind,
};
pub use konami::{Key, KonamiCursor};
pub use rank::{level_for_xp, rank_for, Rank};
