//! Domain entities shared by the slices and the network collaborator.
//!
//! The serde representation matches the fake API's JSON: camelCase keys,
//! RFC 3339 dates and a flat reaction counter object.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A known user. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The closed set of reactions a post can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionKind {
    ThumbsUp,
    Tada,
    Heart,
    Rocket,
    Eyes,
}

impl ReactionKind {
    /// All reactions, in display order.
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::ThumbsUp,
        ReactionKind::Tada,
        ReactionKind::Heart,
        ReactionKind::Rocket,
        ReactionKind::Eyes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::ThumbsUp => "thumbsUp",
            ReactionKind::Tada => "tada",
            ReactionKind::Heart => "heart",
            ReactionKind::Rocket => "rocket",
            ReactionKind::Eyes => "eyes",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ReactionKind::ThumbsUp => "👍",
            ReactionKind::Tada => "🎉",
            ReactionKind::Heart => "❤️",
            ReactionKind::Rocket => "🚀",
            ReactionKind::Eyes => "👀",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReactionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownReaction(s.to_string()))
    }
}

/// Non-negative counters, one per [`ReactionKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reactions {
    #[serde(default)]
    pub thumbs_up: u32,
    #[serde(default)]
    pub tada: u32,
    #[serde(default)]
    pub heart: u32,
    #[serde(default)]
    pub rocket: u32,
    #[serde(default)]
    pub eyes: u32,
}

impl Reactions {
    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::Tada => self.tada,
            ReactionKind::Heart => self.heart,
            ReactionKind::Rocket => self.rocket,
            ReactionKind::Eyes => self.eyes,
        }
    }

    /// Returns a copy with the `kind` counter raised by one.
    pub fn incremented(self, kind: ReactionKind) -> Self {
        let mut next = self;
        let counter = match kind {
            ReactionKind::ThumbsUp => &mut next.thumbs_up,
            ReactionKind::Tada => &mut next.tada,
            ReactionKind::Heart => &mut next.heart,
            ReactionKind::Rocket => &mut next.rocket,
            ReactionKind::Eyes => &mut next.eyes,
        };
        *counter = counter.saturating_add(1);
        next
    }

    pub fn total(&self) -> u32 {
        ReactionKind::ALL
            .into_iter()
            .map(|kind| self.get(kind))
            .fold(0, u32::saturating_add)
    }
}

/// A post in the feed.
///
/// `id`, `user` and `date` are fixed at creation; edits only touch
/// `title` and `content`, reactions only touch `reactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Id of the authoring [`User`]. A lookup key, not ownership.
    pub user: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub reactions: Reactions,
}

/// Payload of the create-post call. The collaborator assigns id, date and
/// empty reactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user: user.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_post_fields(&self.title, &self.content)?;
        if self.user.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        Ok(())
    }
}

/// Checks the title/content pair shared by create and edit forms.
pub fn validate_post_fields(title: &str, content: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}
