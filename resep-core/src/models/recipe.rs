use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub type RecipeId = u32;

/// Anything that can be normalized to a numeric recipe id.
///
/// Ids arrive as numbers from the static catalogs and as strings from the
/// URL query; both sides of a lookup go through this conversion.
pub trait AsRecipeId {
    fn as_recipe_id(&self) -> Option<RecipeId>;
}

impl AsRecipeId for u32 {
    fn as_recipe_id(&self) -> Option<RecipeId> {
        Some(*self)
    }
}

impl AsRecipeId for u64 {
    fn as_recipe_id(&self) -> Option<RecipeId> {
        RecipeId::try_from(*self).ok()
    }
}

impl AsRecipeId for i32 {
    fn as_recipe_id(&self) -> Option<RecipeId> {
        RecipeId::try_from(*self).ok()
    }
}

impl AsRecipeId for i64 {
    fn as_recipe_id(&self) -> Option<RecipeId> {
        RecipeId::try_from(*self).ok()
    }
}

impl AsRecipeId for str {
    fn as_recipe_id(&self) -> Option<RecipeId> {
        self.trim().parse().ok()
    }
}

impl AsRecipeId for String {
    fn as_recipe_id(&self) -> Option<RecipeId> {
        self.as_str().as_recipe_id()
    }
}

impl<T: AsRecipeId + ?Sized> AsRecipeId for &T {
    fn as_recipe_id(&self) -> Option<RecipeId> {
        (**self).as_recipe_id()
    }
}

/// Something that points at a recipe by id (a full recipe or a favorite card).
pub trait RecipeRef {
    fn recipe_id(&self) -> RecipeId;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    #[serde(deserialize_with = "deserialize_recipe_id")]
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Case-insensitive substring match on the recipe name. Surrounding
    /// whitespace in `query` is part of the match.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl RecipeRef for Recipe {
    fn recipe_id(&self) -> RecipeId {
        self.id
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count()))?;
        writeln!(
            f,
            "{} bahan, {} langkah",
            self.ingredients.len(),
            self.steps.len()
        )?;

        if !self.ingredients.is_empty() {
            writeln!(f, "\nBahan:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        if !self.steps.is_empty() {
            writeln!(f, "\nLangkah:")?;
            for (idx, step) in self.steps.iter().enumerate() {
                writeln!(f, "  {}. {}", idx + 1, step)?;
            }
        }

        Ok(())
    }
}

/// Accepts an id written either as a JSON number or a numeric string.
fn deserialize_recipe_id<'de, D>(deserializer: D) -> Result<RecipeId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    let id = match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.as_recipe_id(),
        RawId::Text(s) => s.as_recipe_id(),
    };
    id.ok_or_else(|| serde::de::Error::custom("recipe id is not a valid number"))
}
