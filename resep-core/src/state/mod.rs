//! Application state: profile, favorites and reviews.
//!
//! [`AppState`] is built once at startup and handed to whatever needs it.
//! Each piece lives in its own [`Slice`] with its own storage key, so the
//! three never need a joint update.

mod favorites;
mod profile;
mod reviews;
mod slice;

use std::collections::BTreeMap;

use crate::models::{FavoriteEntry, Profile, RecipeKey, Review};
use crate::storage::{KeyValueStore, PersistentStore, StorageKey};

pub use slice::Slice;

pub type ReviewMap = BTreeMap<RecipeKey, Vec<Review>>;

pub struct AppState<S> {
    profile: Slice<Profile, S>,
    favorites: Slice<Vec<FavoriteEntry>, S>,
    reviews: Slice<ReviewMap, S>,
}

impl<S: KeyValueStore + Clone> AppState<S> {
    /// Loads every slice from `store`, falling back to defaults.
    pub fn load(store: PersistentStore<S>) -> Self {
        Self {
            profile: Slice::load(store.clone(), StorageKey::Profile, Profile::default()),
            favorites: Slice::load(store.clone(), StorageKey::Favorites, Vec::new()),
            reviews: Slice::load(store, StorageKey::Reviews, ReviewMap::new()),
        }
    }
}
