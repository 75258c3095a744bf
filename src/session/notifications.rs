use bevy_ecs::prelude::*;

use crate::data::sections::Section;
use crate::rules::rank::Rank;

/// A transient completion toast. Presence means visible; expiry is
/// computed against the session clock rather than a detached timeout,
/// so a newer notification cannot be clobbered by a stale clear.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub rank: Rank,
    pub shown_at_ms: u64,
}

#[derive(Resource, Default, Debug)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

/// One prompt toward content the visitor skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedPrompt {
    pub label: String,
    pub link: String,
}

/// End-of-session summary, derived when the visitor reaches the bottom
/// of the page.
#[derive(Debug, Clone)]
pub struct SessionManifest {
    pub missed: Vec<MissedPrompt>,
    pub top_section: Option<(Section, u64)>,
    pub total_secs: u64,
}

/// Shown at most once per mounted session.
#[derive(Resource, Default, Debug)]
pub struct ManifestState {
    pub shown: bool,
    pub current: Option<SessionManifest>,
}

/// Per-tick markers raised during intake and cleared during cleanup.
#[derive(Resource, Default, Debug)]
pub struct ScrollMarkers {
    pub near_bottom: bool,
}
