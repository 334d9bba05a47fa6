use crate::{CardPath, GroupPath};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored card. Serialized with the fully-qualified path under `title`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    #[serde(rename = "title")]
    pub path: CardPath,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(path: CardPath, description: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            path,
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn group(&self) -> &GroupPath {
        self.path.group()
    }

    pub fn title(&self) -> &str {
        self.path.title()
    }

    /// Replaces the description and bumps `updated_at`; identity and
    /// `created_at` are untouched.
    pub fn revise(&mut self, description: impl Into<String>, now: DateTime<Utc>) {
        self.description = description.into();
        self.updated_at = now;
    }
}

/// Caller-supplied fields for add and update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
}

impl CardDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
