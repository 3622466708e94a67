//! Recipe catalogs and their persisted snapshots.

mod cache;
mod source;

pub use cache::RecipeCatalog;
pub use source::{RecipeSource, StaticRecipes};
