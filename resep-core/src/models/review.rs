use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub user: String,
    #[serde(default)]
    pub avatar: String,
    pub rating: u8,
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A review as submitted, before it gets an id and a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub user: String,
    pub avatar: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(user: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            avatar: String::new(),
            rating,
            comment: comment.into(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    pub fn has_comment(&self) -> bool {
        !self.comment.trim().is_empty()
    }
}

impl Review {
    /// Star string for the rating, e.g. `★★★☆☆`.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}
