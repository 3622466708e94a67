//! Snapshot cache in front of a [`RecipeSource`].

use std::collections::HashMap;

use super::source::{RecipeSource, StaticRecipes};
use crate::models::{AsRecipeId, Category, Recipe};
use crate::storage::{KeyValueStore, PersistentStore, StorageKey};

/// Serves recipe lists per category.
///
/// The first request for a category loads the persisted snapshot. When
/// there is none, or it does not decode, the source list is served and
/// written back as the new snapshot.
pub struct RecipeCatalog<S, R = StaticRecipes> {
    store: PersistentStore<S>,
    source: R,
    loaded: HashMap<Category, Vec<Recipe>>,
}

impl<S: KeyValueStore> RecipeCatalog<S> {
    pub fn new(store: PersistentStore<S>) -> Self {
        Self::with_source(store, StaticRecipes)
    }
}

impl<S: KeyValueStore, R: RecipeSource> RecipeCatalog<S, R> {
    pub fn with_source(store: PersistentStore<S>, source: R) -> Self {
        Self {
            store,
            source,
            loaded: HashMap::new(),
        }
    }

    /// All recipes of a category, in catalog order.
    pub fn recipes(&mut self, category: Category) -> &[Recipe] {
        let store = &self.store;
        let source = &self.source;
        self.loaded
            .entry(category)
            .or_insert_with(|| load_category(store, source, category))
    }

    /// Like [`recipes`](Self::recipes) for a raw type token; an unknown
    /// token yields an empty list.
    pub fn recipes_for(&mut self, token: &str) -> &[Recipe] {
        match token.parse::<Category>() {
            Ok(category) => self.recipes(category),
            Err(_) => &[],
        }
    }

    /// Looks up a recipe by id, comparing ids numerically so `"12"` and
    /// `12` find the same recipe.
    pub fn recipe_by_id(&mut self, category: Category, id: impl AsRecipeId) -> Option<&Recipe> {
        let id = id.as_recipe_id()?;
        self.recipes(category).iter().find(|recipe| recipe.id == id)
    }

    /// Recipes whose name contains `query`, ignoring case. A blank query
    /// returns everything.
    pub fn search(&mut self, category: Category, query: &str) -> Vec<&Recipe> {
        let recipes = self.recipes(category);
        if query.trim().is_empty() {
            return recipes.iter().collect();
        }
        recipes.iter().filter(|recipe| recipe.matches(query)).collect()
    }

    /// The first `count` recipes of a category.
    pub fn featured(&mut self, category: Category, count: usize) -> &[Recipe] {
        let recipes = self.recipes(category);
        &recipes[..count.min(recipes.len())]
    }
}

fn load_category<S: KeyValueStore, R: RecipeSource>(
    store: &PersistentStore<S>,
    source: &R,
    category: Category,
) -> Vec<Recipe> {
    let key = StorageKey::RecipeCache(category);

    if let Some(snapshot) = store.read_snapshot::<Vec<Recipe>>(key) {
        tracing::debug!("Serving {} recipes from snapshot {}", snapshot.len(), key);
        return snapshot;
    }

    let recipes = source.get_all(category);
    tracing::info!("Populating {} with {} recipes", key, recipes.len());
    store.write(key, &recipes);
    recipes
}
