use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::recipe::RecipeId;

/// Composite key `{type}-{id}` indexing favorites and reviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeKey(String);

impl RecipeKey {
    pub fn new(category: Category, id: RecipeId) -> Self {
        Self(format!("{}-{}", category, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the key back into its category and id.
    pub fn parts(&self) -> Option<(Category, RecipeId)> {
        let (category, id) = self.0.split_once('-')?;
        Some((category.parse().ok()?, id.parse().ok()?))
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for RecipeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid recipe key '{}'. Expected <type>-<id>", s);
        let (category, id) = s.split_once('-').ok_or_else(invalid)?;
        let category: Category = category.parse().map_err(|_| invalid())?;
        let id: RecipeId = id.parse().map_err(|_| invalid())?;
        Ok(Self::new(category, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_key_format() {
        assert_eq!(RecipeKey::new(Category::Food, 12).as_str(), "makanan-12");
        assert_eq!(RecipeKey::new(Category::Drink, 5).to_string(), "minuman-5");
    }

    #[test]
    fn test_recipe_key_parse() {
        let key: RecipeKey = "minuman-5".parse().unwrap();
        assert_eq!(key.parts(), Some((Category::Drink, 5)));

        // Aliases normalize to the canonical token
        let key: RecipeKey = "food-3".parse().unwrap();
        assert_eq!(key.as_str(), "makanan-3");
    }

    #[test]
    fn test_recipe_key_parse_invalid() {
        assert!("makanan".parse::<RecipeKey>().is_err());
        assert!("kue-1".parse::<RecipeKey>().is_err());
        assert!("makanan-x".parse::<RecipeKey>().is_err());
    }

    #[test]
    fn test_recipe_key_serializes_as_string() {
        let key = RecipeKey::new(Category::Food, 12);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"makanan-12\"");
    }
}
