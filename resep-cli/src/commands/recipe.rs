use clap::{Args, Subcommand};
use resep_core::{
    Category, KeyValueStore, MemoryLocation, Recipe, RecipeKey, RecipeSource, Router,
    StaticRecipes,
};

use super::{OutputFormat, Session};
use crate::config::Config;

/// Home page selection: three dishes, two drinks.
const FEATURED_FOOD: usize = 3;
const FEATURED_DRINKS: usize = 2;

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    pub command: RecipeSubcommand,
}

#[derive(Subcommand)]
pub enum RecipeSubcommand {
    /// List recipes
    List {
        /// Only this category (makanan, minuman)
        #[arg(long, short = 't')]
        category: Option<Category>,

        /// Filter by name
        #[arg(long, short)]
        search: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the recipes featured on the home page
    Featured {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a recipe's details
    Show {
        /// Recipe type (makanan, minuman)
        category: Category,

        /// Recipe ID
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a link that opens the recipe directly
    Share {
        /// Recipe type (makanan, minuman)
        category: Category,

        /// Recipe ID
        id: String,
    },
}

impl RecipeCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        session: &mut Session<S>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RecipeSubcommand::List {
                category,
                search,
                format,
            } => {
                let categories = match category {
                    Some(c) => vec![*c],
                    None => Category::ALL.to_vec(),
                };
                let query = search.as_deref().unwrap_or("");

                let mut sections = Vec::new();
                for category in categories {
                    let recipes: Vec<Recipe> = session
                        .catalog
                        .search(category, query)
                        .into_iter()
                        .cloned()
                        .collect();
                    sections.push((category, recipes));
                }

                print_sections(session, &sections, *format)?;
                Ok(())
            }

            RecipeSubcommand::Featured { format } => {
                let sections = vec![
                    (
                        Category::Food,
                        session.catalog.featured(Category::Food, FEATURED_FOOD).to_vec(),
                    ),
                    (
                        Category::Drink,
                        session
                            .catalog
                            .featured(Category::Drink, FEATURED_DRINKS)
                            .to_vec(),
                    ),
                ];
                print_sections(session, &sections, *format)?;
                Ok(())
            }

            RecipeSubcommand::Show {
                category,
                id,
                format,
            } => {
                let recipe = session.find_recipe(*category, id)?;
                let key = RecipeKey::new(*category, recipe.id);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&recipe)?);
                    }
                    OutputFormat::Text => {
                        println!("Resep {}", category.label());
                        print!("{}", recipe);

                        let reviews = session.state.reviews_for(&key);
                        println!();
                        match session.state.average_rating(&key) {
                            Some(avg) => println!("Ulasan ({}), rata-rata {:.1}", reviews.len(), avg),
                            None => println!("Ulasan (0)"),
                        }
                        if session.state.is_favorite(&key) {
                            println!("♥ Favorit");
                        }
                    }
                }
                Ok(())
            }

            RecipeSubcommand::Share { category, id } => {
                let recipe = session.find_recipe(*category, id)?;
                println!("{}", share_link(&config.share_origin.value, *category, &recipe));
                Ok(())
            }
        }
    }
}

/// Link that opens `recipe` on the detail page.
pub fn share_link(origin: &str, category: Category, recipe: &Recipe) -> String {
    let mut router = Router::new(MemoryLocation::parse(origin));
    router.open_detail(category, recipe);
    router.share_url().unwrap_or_else(|| origin.to_string())
}

fn print_sections<S: KeyValueStore>(
    session: &Session<S>,
    sections: &[(Category, Vec<Recipe>)],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let json: serde_json::Map<String, serde_json::Value> = sections
                .iter()
                .map(|(category, recipes)| {
                    serde_json::to_value(recipes).map(|v| (category.to_string(), v))
                })
                .collect::<Result<_, _>>()?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            for (category, recipes) in sections {
                println!("{}", category.label());
                if recipes.is_empty() {
                    println!("  (tidak ada resep)");
                }
                for recipe in recipes {
                    let key = RecipeKey::new(*category, recipe.id);
                    println!("{}", recipe_line(recipe, session.state.is_favorite(&key)));
                }
                println!();
            }
        }
    }
    Ok(())
}

fn recipe_line(recipe: &Recipe, favorite: bool) -> String {
    format!(
        "  {:>3}  {}{}",
        recipe.id,
        recipe.name,
        if favorite { " ♥" } else { "" }
    )
}

/// Number of recipes bundled for a category, shown by `config show`.
pub fn bundled_count(category: Category) -> usize {
    StaticRecipes.get_all(category).len()
}
