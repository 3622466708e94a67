use clap::{Args, Subcommand};
use resep_core::{Category, FavoriteEntry, FavoriteMeta, KeyValueStore, RecipeKey};

use super::{OutputFormat, Session};

#[derive(Args)]
pub struct FavoriteCommand {
    #[command(subcommand)]
    pub command: FavoriteSubcommand,
}

#[derive(Subcommand)]
pub enum FavoriteSubcommand {
    /// Add a recipe to favorites, or remove it if already there
    Toggle {
        /// Recipe type (makanan, minuman)
        category: Category,

        /// Recipe ID
        id: String,
    },

    /// List favorite recipes
    List {
        /// Only this category (makanan, minuman)
        #[arg(long, short = 't')]
        category: Option<Category>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl FavoriteCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        session: &mut Session<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            FavoriteSubcommand::Toggle { category, id } => {
                let recipe = session.find_recipe(*category, id)?;
                let key = RecipeKey::new(*category, recipe.id);
                let meta = FavoriteMeta::from_recipe(*category, &recipe);

                if session.state.toggle_favorite(&key, meta) {
                    println!("Added '{}' to favorites", recipe.name);
                } else {
                    println!("Removed '{}' from favorites", recipe.name);
                }
                Ok(())
            }

            FavoriteSubcommand::List { category, format } => {
                let favorites = session.state.favorites_in(*category);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&favorites)?);
                    }
                    OutputFormat::Text => {
                        if favorites.is_empty() {
                            println!("No favorites yet. Use 'resep favorite toggle' to save one.");
                            return Ok(());
                        }
                        println!("{} resep favorit", favorites.len());
                        for entry in favorites {
                            println!("{}", favorite_line(entry));
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

fn favorite_line(entry: &FavoriteEntry) -> String {
    format!(
        "  {:<12} {}  (disimpan {})",
        entry.key,
        entry.name,
        entry.saved_at.format("%d/%m/%Y")
    )
}
