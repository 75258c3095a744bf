pub mod clock;
pub mod notifications;
pub mod quest_log;

pub use clock::{SessionClock, SessionTimes};
pub use notifications::{
    ManifestState, MissedPrompt, Notification, NotificationState, ScrollMarkers, SessionManifest,
};
pub use quest_log::{Completion, CompletionFeed, QuestLog};
