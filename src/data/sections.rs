use serde::{Deserialize, Serialize};

/// Named page regions the observer can report on, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Services,
    Projects,
    Lab,
    Contact,
}

impl Section {
    /// Document order, used wherever deterministic iteration matters.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Services,
        Section::Projects,
        Section::Lab,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Lab => "lab",
            Section::Contact => "contact",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
