use chrono::Utc;
use uuid::Uuid;

use super::AppState;
use crate::error::{Error, Result};
use crate::models::{NewReview, RecipeKey, Review};
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> AppState<S> {
    /// Reviews for a recipe, newest first.
    pub fn reviews_for(&self, key: &RecipeKey) -> &[Review] {
        self.reviews.get().get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn average_rating(&self, key: &RecipeKey) -> Option<f32> {
        let reviews = self.reviews_for(key);
        if reviews.is_empty() {
            return None;
        }
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(total as f32 / reviews.len() as f32)
    }

    /// Validates and stores a review as the newest one for `key`.
    ///
    /// The creation time never precedes the newest existing review, so the
    /// sequence stays ordered even if the clock steps backwards.
    pub fn add_review(&mut self, key: &RecipeKey, review: NewReview) -> Result<Review> {
        if !review.has_valid_rating() {
            return Err(Error::InvalidRating(review.rating));
        }
        if !review.has_comment() {
            return Err(Error::EmptyComment);
        }

        let created = self.reviews.update(|reviews| {
            let existing = reviews.entry(key.clone()).or_default();
            let mut created_at = Utc::now();
            if let Some(newest) = existing.first() {
                created_at = created_at.max(newest.created_at);
            }

            let review = Review {
                id: Uuid::new_v4().to_string(),
                user: review.user,
                avatar: review.avatar,
                rating: review.rating,
                comment: review.comment,
                created_at,
            };
            existing.insert(0, review.clone());
            review
        });

        tracing::debug!("Added review {} for {}", created.id, key);
        Ok(created)
    }
}
