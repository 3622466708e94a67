use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recipe category. The wire tokens are the Indonesian names used in
/// storage keys, composite keys and the URL query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "makanan")]
    Food,
    #[serde(rename = "minuman")]
    Drink,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Food, Category::Drink];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "makanan",
            Category::Drink => "minuman",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Makanan",
            Category::Drink => "Minuman",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "makanan" | "food" => Ok(Category::Food),
            "minuman" | "drink" => Ok(Category::Drink),
            _ => Err(format!(
                "Invalid recipe type '{}'. Valid options: makanan, minuman",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", Category::Food), "makanan");
        assert_eq!(format!("{}", Category::Drink), "minuman");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("makanan").unwrap(), Category::Food);
        assert_eq!(Category::from_str("MINUMAN").unwrap(), Category::Drink);
        assert_eq!(Category::from_str("food").unwrap(), Category::Food);
        assert_eq!(Category::from_str(" drink ").unwrap(), Category::Drink);
    }

    #[test]
    fn test_category_from_str_invalid() {
        assert!(Category::from_str("dessert").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn test_category_serializes_as_token() {
        let json = serde_json::to_string(&Category::Drink).unwrap();
        assert_eq!(json, "\"minuman\"");

        let parsed: Category = serde_json::from_str("\"makanan\"").unwrap();
        assert_eq!(parsed, Category::Food);
    }
}
