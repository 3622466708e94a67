//! Resep Nusantara Core Library
//!
//! Recipe catalogs, locally persisted user state (profile, favorites,
//! reviews) and the query-string router shared by Resep Nusantara front
//! ends.

pub mod catalog;
pub mod detail;
pub mod error;
pub mod models;
pub mod router;
pub mod state;
pub mod storage;

pub use catalog::{RecipeCatalog, RecipeSource, StaticRecipes};
pub use detail::{resolve_detail, DetailView, RecipeDetail};
pub use error::{Error, Result};
pub use models::{
    AsRecipeId, Category, FavoriteEntry, FavoriteMeta, NewReview, Profile, ProfileUpdate, Recipe,
    RecipeId, RecipeKey, RecipeRef, Review,
};
pub use router::{Location, MemoryLocation, Page, Route, Router};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore, PersistentStore, StorageError, StorageKey};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
