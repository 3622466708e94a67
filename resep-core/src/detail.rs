//! Resolves the detail route into what the detail page shows.

use crate::catalog::{RecipeCatalog, RecipeSource};
use crate::error::{Error, Result};
use crate::models::{Category, FavoriteMeta, Recipe, RecipeId, RecipeKey, Review};
use crate::router::Route;
use crate::state::AppState;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail<'a> {
    pub category: Category,
    pub recipe: &'a Recipe,
    pub key: RecipeKey,
    pub is_favorite: bool,
    pub reviews: &'a [Review],
    pub average_rating: Option<f32>,
}

impl RecipeDetail<'_> {
    /// Fields to copy into a favorite when toggled from this page.
    pub fn favorite_meta(&self) -> FavoriteMeta {
        FavoriteMeta::from_recipe(self.category, self.recipe)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    Found(RecipeDetail<'a>),
    /// The route names a recipe the active catalog does not have.
    NotFound {
        category: Category,
        recipe_id: RecipeId,
    },
}

impl<'a> DetailView<'a> {
    pub fn into_result(self) -> Result<RecipeDetail<'a>> {
        match self {
            DetailView::Found(detail) => Ok(detail),
            DetailView::NotFound {
                category,
                recipe_id,
            } => Err(Error::RecipeNotFound {
                category,
                id: recipe_id,
            }),
        }
    }
}

/// Returns `None` unless `route` is a detail route.
pub fn resolve_detail<'a, C, R, S>(
    route: Route,
    catalog: &'a mut RecipeCatalog<C, R>,
    state: &'a AppState<S>,
) -> Option<DetailView<'a>>
where
    C: KeyValueStore,
    R: RecipeSource,
    S: KeyValueStore,
{
    let (Some(category), Some(recipe_id)) = (route.category(), route.recipe_id()) else {
        return None;
    };

    let Some(recipe) = catalog.recipe_by_id(category, recipe_id) else {
        tracing::info!("Recipe {} #{} not found", category, recipe_id);
        return Some(DetailView::NotFound {
            category,
            recipe_id,
        });
    };

    let key = RecipeKey::new(category, recipe.id);
    Some(DetailView::Found(RecipeDetail {
        category,
        recipe,
        is_favorite: state.is_favorite(&key),
        reviews: state.reviews_for(&key),
        average_rating: state.average_rating(&key),
        key,
    }))
}
