//! Storage key namespaces.

use std::fmt;

use crate::models::Category;

/// Keys in the shared store. Each slice and each category cache owns one,
/// and no two overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Profile,
    Favorites,
    Reviews,
    RecipeCache(Category),
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Profile => "rn-profile",
            StorageKey::Favorites => "rn-favorites",
            StorageKey::Reviews => "rn-reviews",
            StorageKey::RecipeCache(Category::Food) => "rn-cache-makanan",
            StorageKey::RecipeCache(Category::Drink) => "rn-cache-minuman",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
