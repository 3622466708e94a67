mod config_cmd;
mod favorite;
mod profile;
mod recipe;
mod review;
mod route;

pub use config_cmd::ConfigCommand;
pub use favorite::FavoriteCommand;
pub use profile::ProfileCommand;
pub use recipe::RecipeCommand;
pub use review::ReviewCommand;
pub use route::RouteCommand;

use clap::ValueEnum;
use resep_core::{
    AppState, AsRecipeId, Category, Error, KeyValueStore, PersistentStore, Recipe, RecipeCatalog,
};

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Catalog and state for one invocation, both over the same store.
pub struct Session<S> {
    pub catalog: RecipeCatalog<S>,
    pub state: AppState<S>,
}

impl<S: KeyValueStore + Clone> Session<S> {
    pub fn open(store: PersistentStore<S>) -> Self {
        Self {
            catalog: RecipeCatalog::new(store.clone()),
            state: AppState::load(store),
        }
    }
}

impl<S: KeyValueStore> Session<S> {
    /// Looks up a recipe by the id as typed on the command line.
    pub fn find_recipe(
        &mut self,
        category: Category,
        id: &str,
    ) -> Result<Recipe, Box<dyn std::error::Error>> {
        let numeric = id
            .as_recipe_id()
            .ok_or_else(|| format!("Invalid recipe id '{}'", id))?;

        match self.catalog.recipe_by_id(category, numeric) {
            Some(recipe) => Ok(recipe.clone()),
            None => {
                eprintln!(
                    "Use 'resep recipe list --category {}' to browse recipes.",
                    category
                );
                Err(Error::RecipeNotFound {
                    category,
                    id: numeric,
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn test_session() -> Session<resep_core::MemoryStore> {
    Session::open(PersistentStore::new(resep_core::MemoryStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_recipe_accepts_string_id() {
        let mut session = test_session();
        let recipe = session.find_recipe(Category::Food, "12").unwrap();
        assert_eq!(recipe.name, "Nasi Goreng");
    }

    #[test]
    fn test_find_recipe_not_found() {
        let mut session = test_session();
        let err = session.find_recipe(Category::Food, "999").unwrap_err();
        assert_eq!(err.to_string(), "Recipe not found: makanan #999");
    }

    #[test]
    fn test_find_recipe_invalid_id() {
        let mut session = test_session();
        let err = session.find_recipe(Category::Drink, "lima").unwrap_err();
        assert!(err.to_string().contains("Invalid recipe id"));
    }
}
