mod category;
mod favorite;
mod profile;
mod recipe;
mod recipe_key;
mod review;

pub use category::Category;
pub use favorite::{FavoriteEntry, FavoriteMeta};
pub use profile::{avatar_data_uri, Profile, ProfileUpdate, DEFAULT_ROLE, DEFAULT_USERNAME};
pub use recipe::{AsRecipeId, Recipe, RecipeId, RecipeRef};
pub use recipe_key::RecipeKey;
pub use review::{NewReview, Review, MAX_RATING, MIN_RATING};
