//! Shared test utilities and source doubles.

#![allow(dead_code, unused_imports)]

pub mod gated_source;

use chirper::model::{Post, Reactions, User};
use chrono::{TimeZone, Utc};

pub use gated_source::GatedSource;

/// A post dated `2024-01-01 12:{minute}:00 UTC`.
pub fn post_at(id: &str, user: &str, minute: u32) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Post {id}"),
        content: format!("Content of post {id}"),
        user: user.to_string(),
        date: Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap(),
        reactions: Reactions::default(),
    }
}

pub fn post(id: &str) -> Post {
    post_at(id, "0", 0)
}

pub fn roster() -> Vec<User> {
    vec![
        User::new("0", "Tianna Jenkins"),
        User::new("1", "Kevin Grant"),
        User::new("2", "Madison Price"),
    ]
}
