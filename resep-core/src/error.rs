//! Domain errors surfaced to the presentation layer.
//!
//! Storage failures never show up here: the persistence adapter absorbs
//! them and falls back to in-memory state.

use thiserror::Error;

use crate::models::{Category, RecipeId};

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Recipe not found: {category} #{id}")]
    RecipeNotFound { category: Category, id: RecipeId },

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Review comment cannot be empty")]
    EmptyComment,
}

pub type Result<T> = std::result::Result<T, Error>;
