use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::recipe::{Recipe, RecipeId, RecipeRef};
use super::recipe_key::RecipeKey;

/// Recipe fields copied into a favorite at toggle time.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteMeta {
    pub id: RecipeId,
    pub name: String,
    pub image_url: String,
    pub category: Category,
}

impl FavoriteMeta {
    pub fn from_recipe(category: Category, recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image_url: recipe.image_url.clone(),
            category,
        }
    }

    pub fn key(&self) -> RecipeKey {
        RecipeKey::new(self.category, self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    pub key: RecipeKey,
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(rename = "savedAt", with = "chrono::serde::ts_milliseconds")]
    pub saved_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn new(key: RecipeKey, meta: FavoriteMeta) -> Self {
        Self {
            key,
            id: meta.id,
            name: meta.name,
            image_url: meta.image_url,
            category: meta.category,
            saved_at: Utc::now(),
        }
    }
}

impl RecipeRef for FavoriteEntry {
    fn recipe_id(&self) -> RecipeId {
        self.id
    }
}
