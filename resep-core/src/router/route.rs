use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, RecipeId};

/// Top-level pages reachable through [`Router::navigate`](super::Router::navigate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Home,
    FoodList,
    DrinkList,
    Profile,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => write!(f, "home"),
            Page::FoodList => write!(f, "makanan"),
            Page::DrinkList => write!(f, "minuman"),
            Page::Profile => write!(f, "profile"),
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "makanan" | "food" | "foodlist" => Ok(Page::FoodList),
            "minuman" | "drink" | "drinklist" => Ok(Page::DrinkList),
            "profile" => Ok(Page::Profile),
            _ => Err(format!(
                "Invalid page '{}'. Valid options: home, makanan, minuman, profile",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum Route {
    #[default]
    Home,
    FoodList,
    DrinkList,
    Profile,
    Detail {
        #[serde(rename = "type")]
        category: Category,
        #[serde(rename = "recipeId")]
        recipe_id: RecipeId,
    },
}

impl Route {
    pub fn is_detail(&self) -> bool {
        matches!(self, Route::Detail { .. })
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Route::Detail { category, .. } => Some(*category),
            _ => None,
        }
    }

    pub fn recipe_id(&self) -> Option<RecipeId> {
        match self {
            Route::Detail { recipe_id, .. } => Some(*recipe_id),
            _ => None,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home,
            Page::FoodList => Route::FoodList,
            Page::DrinkList => Route::DrinkList,
            Page::Profile => Route::Profile,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::FoodList => write!(f, "makanan"),
            Route::DrinkList => write!(f, "minuman"),
            Route::Profile => write!(f, "profile"),
            Route::Detail {
                category,
                recipe_id,
            } => write!(f, "detail({}, {})", category, recipe_id),
        }
    }
}
