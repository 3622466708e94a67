//! Query-string router.
//!
//! The route is process-local; the only thing mirrored into the address
//! is the recipe being shown (`?recipeType=makanan&recipeId=12`).
//! Transitions replace the current history entry instead of pushing a new
//! one. Back/forward navigation after startup is not reflected in the
//! route.

mod location;
mod query;
mod route;

pub use location::{Location, MemoryLocation};
pub use query::QueryString;
pub use route::{Page, Route};

use crate::models::{AsRecipeId, Category, RecipeRef};

pub const RECIPE_TYPE_PARAM: &str = "recipeType";
pub const RECIPE_ID_PARAM: &str = "recipeId";

pub struct Router<L> {
    location: L,
    route: Route,
}

impl<L: Location> Router<L> {
    /// Starts on the detail page when the address carries a valid recipe
    /// type and id, otherwise on home.
    pub fn new(location: L) -> Self {
        let route = initial_route(&QueryString::parse(location.search()));
        tracing::debug!("Initial route: {}", route);
        Self { location, route }
    }

    pub fn current_route(&self) -> Route {
        self.route
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn navigate(&mut self, page: Page) {
        self.route = page.into();

        let mut query = QueryString::parse(self.location.search());
        query.delete(RECIPE_TYPE_PARAM);
        query.delete(RECIPE_ID_PARAM);
        self.replace_query(&query);
    }

    pub fn open_detail(&mut self, category: Category, recipe: &impl RecipeRef) {
        let recipe_id = recipe.recipe_id();
        self.route = Route::Detail {
            category,
            recipe_id,
        };

        let mut query = QueryString::parse(self.location.search());
        query.set(RECIPE_TYPE_PARAM, category.as_str());
        query.set(RECIPE_ID_PARAM, recipe_id.to_string());
        self.replace_query(&query);
    }

    /// Absolute link to the recipe on the current detail route.
    pub fn share_url(&self) -> Option<String> {
        let (Some(category), Some(recipe_id)) = (self.route.category(), self.route.recipe_id())
        else {
            return None;
        };

        Some(format!(
            "{}{}?{}={}&{}={}",
            self.location.origin(),
            self.location.pathname(),
            RECIPE_TYPE_PARAM,
            category,
            RECIPE_ID_PARAM,
            recipe_id
        ))
    }

    fn replace_query(&mut self, query: &QueryString) {
        let url = if query.is_empty() {
            self.location.pathname().to_string()
        } else {
            format!("{}?{}", self.location.pathname(), query)
        };
        self.location.replace_state(&url);
    }
}

fn initial_route(query: &QueryString) -> Route {
    let category = query
        .get(RECIPE_TYPE_PARAM)
        .and_then(|token| token.parse::<Category>().ok());
    let recipe_id = query.get(RECIPE_ID_PARAM).and_then(|id| id.as_recipe_id());

    match (category, recipe_id) {
        (Some(category), Some(recipe_id)) => Route::Detail {
            category,
            recipe_id,
        },
        _ => Route::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;

    fn router(url: &str) -> Router<MemoryLocation> {
        Router::new(MemoryLocation::parse(url))
    }

    #[test]
    fn test_initial_route_home() {
        assert_eq!(router("http://localhost/").current_route(), Route::Home);
    }

    #[test]
    fn test_initial_route_detail_from_query() {
        let router = router("http://localhost/?recipeType=minuman&recipeId=5");
        assert_eq!(
            router.current_route(),
            Route::Detail {
                category: Category::Drink,
                recipe_id: 5
            }
        );
    }

    #[test]
    fn test_initial_route_detail_with_link_in_query() {
        let router = router("/?recipeType=makanan&recipeId=12&ref=https://wa.me");
        assert_eq!(
            router.current_route(),
            Route::Detail {
                category: Category::Food,
                recipe_id: 12
            }
        );
    }

    #[test]
    fn test_initial_route_requires_both_params() {
        assert_eq!(router("/?recipeType=minuman").current_route(), Route::Home);
        assert_eq!(router("/?recipeId=5").current_route(), Route::Home);
    }

    #[test]
    fn test_initial_route_rejects_invalid_params() {
        assert_eq!(
            router("/?recipeType=kue&recipeId=5").current_route(),
            Route::Home
        );
        assert_eq!(
            router("/?recipeType=makanan&recipeId=lima").current_route(),
            Route::Home
        );
    }

    #[test]
    fn test_navigate_clears_recipe_params() {
        let mut router = router("http://localhost/?recipeType=minuman&recipeId=5");
        router.navigate(Page::Home);

        assert_eq!(router.current_route(), Route::Home);
        assert_eq!(router.location().search(), "");
        assert_eq!(router.location().href(), "http://localhost/");
        assert_eq!(router.location().history_len(), 1);
    }

    #[test]
    fn test_navigate_keeps_unrelated_params() {
        let mut router = router("/app?ref=share&recipeType=makanan&recipeId=3");
        router.navigate(Page::Profile);

        assert_eq!(router.current_route(), Route::Profile);
        assert_eq!(router.location().pathname(), "/app");
        assert_eq!(router.location().search(), "?ref=share");
    }

    #[test]
    fn test_open_detail_sets_params() {
        let mut router = router("http://localhost:5173/");
        let recipe = Recipe::new(12, "Nasi Goreng");
        router.open_detail(Category::Food, &recipe);

        assert_eq!(
            router.current_route(),
            Route::Detail {
                category: Category::Food,
                recipe_id: 12
            }
        );
        assert_eq!(router.location().search(), "?recipeType=makanan&recipeId=12");
        assert_eq!(router.location().history_len(), 1);
    }

    #[test]
    fn test_open_detail_then_navigate_round_trip() {
        let mut router = router("/");
        router.open_detail(Category::Drink, &Recipe::new(5, "Es Doger"));
        router.open_detail(Category::Food, &Recipe::new(1, "Rendang"));
        assert_eq!(router.location().search(), "?recipeType=makanan&recipeId=1");

        router.navigate(Page::FoodList);
        assert_eq!(router.current_route(), Route::FoodList);
        assert_eq!(router.location().search(), "");
    }

    #[test]
    fn test_share_url() {
        let mut router = router("https://resep.example/app");
        assert_eq!(router.share_url(), None);

        router.open_detail(Category::Drink, &Recipe::new(5, "Es Doger"));
        assert_eq!(
            router.share_url().as_deref(),
            Some("https://resep.example/app?recipeType=minuman&recipeId=5")
        );
    }
}
