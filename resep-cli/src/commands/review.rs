use clap::{Args, Subcommand};
use resep_core::{Category, KeyValueStore, NewReview, RecipeKey, Review};

use super::{OutputFormat, Session};

#[derive(Args)]
pub struct ReviewCommand {
    #[command(subcommand)]
    pub command: ReviewSubcommand,
}

#[derive(Subcommand)]
pub enum ReviewSubcommand {
    /// Review a recipe as the current profile
    Add {
        /// Recipe type (makanan, minuman)
        category: Category,

        /// Recipe ID
        id: String,

        /// Rating from 1 to 5
        #[arg(long, short, default_value_t = 5)]
        rating: u8,

        /// Review text
        #[arg(long, short = 'm')]
        comment: String,
    },

    /// List reviews of a recipe, newest first
    List {
        /// Recipe type (makanan, minuman)
        category: Category,

        /// Recipe ID
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ReviewCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        session: &mut Session<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ReviewSubcommand::Add {
                category,
                id,
                rating,
                comment,
            } => {
                let recipe = session.find_recipe(*category, id)?;
                let key = RecipeKey::new(*category, recipe.id);

                let profile = session.state.profile();
                let review = NewReview::new(profile.username.clone(), *rating, comment.clone())
                    .with_avatar(profile.avatar.clone());
                let created = session.state.add_review(&key, review)?;

                println!(
                    "Reviewed '{}' {} ({} reviews)",
                    recipe.name,
                    created.stars(),
                    session.state.reviews_for(&key).len()
                );
                Ok(())
            }

            ReviewSubcommand::List {
                category,
                id,
                format,
            } => {
                let recipe = session.find_recipe(*category, id)?;
                let key = RecipeKey::new(*category, recipe.id);
                let reviews = session.state.reviews_for(&key);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(reviews)?);
                    }
                    OutputFormat::Text => {
                        println!("Ulasan {} ({})", recipe.name, reviews.len());
                        if reviews.is_empty() {
                            println!("Belum ada ulasan, jadilah yang pertama.");
                        }
                        for review in reviews {
                            print!("{}", review_block(review));
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

fn review_block(review: &Review) -> String {
    format!(
        "\n{} {}  {}\n  {}\n",
        review.user,
        review.stars(),
        review.created_at.format("%d %B %Y"),
        review.comment
    )
}
