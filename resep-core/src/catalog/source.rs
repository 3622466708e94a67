//! Read-only recipe sources.

use std::collections::BTreeMap;

use crate::models::{Category, Recipe};

const MAKANAN_JSON: &str = include_str!("../../data/makanan.json");
const MINUMAN_JSON: &str = include_str!("../../data/minuman.json");

/// Supplies the full recipe list of a category.
pub trait RecipeSource {
    fn get_all(&self, category: Category) -> Vec<Recipe>;
}

/// The catalogs bundled with the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecipes;

impl RecipeSource for StaticRecipes {
    fn get_all(&self, category: Category) -> Vec<Recipe> {
        let raw = match category {
            Category::Food => MAKANAN_JSON,
            Category::Drink => MINUMAN_JSON,
        };

        match serde_json::from_str(raw) {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::error!("Bundled {} catalog is invalid: {}", category, e);
                Vec::new()
            }
        }
    }
}

impl RecipeSource for BTreeMap<Category, Vec<Recipe>> {
    fn get_all(&self, category: Category) -> Vec<Recipe> {
        self.get(&category).cloned().unwrap_or_default()
    }
}
