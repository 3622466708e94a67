use clap::Args;
use resep_core::{
    resolve_detail, DetailView, KeyValueStore, MemoryLocation, Page, RecipeKey, Route, Router,
};
use serde::Serialize;

use super::{OutputFormat, Session};

/// Resolve an app URL the way the browser would on load.
#[derive(Args)]
pub struct RouteCommand {
    /// App URL, e.g. "http://localhost:5173/?recipeType=makanan&recipeId=12"
    pub url: String,

    /// Navigate to a page afterwards (home, makanan, minuman, profile)
    #[arg(long, conflicts_with = "open")]
    pub navigate: Option<Page>,

    /// Open a recipe afterwards (<type>-<id>, e.g. minuman-5)
    #[arg(long)]
    pub open: Option<RecipeKey>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteReport {
    initial: Route,
    recipe: Option<String>,
    route: Route,
    href: String,
    share_url: Option<String>,
}

impl RouteCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        session: &mut Session<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let report = self.resolve(session)?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                println!("Initial route: {}", report.initial);
                if let Some(name) = &report.recipe {
                    println!("  recipe: {}", name);
                }
                println!("Route: {}", report.route);
                println!("URL: {}", report.href);
                if let Some(link) = &report.share_url {
                    println!("Share: {}", link);
                }
            }
        }
        Ok(())
    }

    fn resolve<S: KeyValueStore>(
        &self,
        session: &mut Session<S>,
    ) -> Result<RouteReport, Box<dyn std::error::Error>> {
        let mut router = Router::new(MemoryLocation::parse(&self.url));
        let initial = router.current_route();

        let recipe = match resolve_detail(initial, &mut session.catalog, &session.state) {
            Some(DetailView::Found(detail)) => Some(detail.recipe.name.clone()),
            Some(DetailView::NotFound {
                category,
                recipe_id,
            }) => Some(format!("(resep {} #{} tidak ditemukan)", category, recipe_id)),
            None => None,
        };

        if let Some(page) = self.navigate {
            router.navigate(page);
        }
        if let Some(key) = &self.open {
            let (category, id) = key
                .parts()
                .ok_or_else(|| format!("Invalid recipe key '{}'", key))?;
            let recipe = session.find_recipe(category, &id.to_string())?;
            router.open_detail(category, &recipe);
        }

        Ok(RouteReport {
            initial,
            recipe,
            route: router.current_route(),
            href: router.location().href(),
            share_url: router.share_url(),
        })
    }
}
