use clap::{Parser, Subcommand};
use resep_core::{FileStore, PersistentStore};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    ConfigCommand, FavoriteCommand, ProfileCommand, RecipeCommand, ReviewCommand, RouteCommand,
    Session,
};
use config::Config;

#[derive(Parser)]
#[command(name = "resep")]
#[command(version)]
#[command(about = "Browse Indonesian food and drink recipes", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse recipes
    Recipe(RecipeCommand),

    /// Manage favorite recipes
    Favorite(FavoriteCommand),

    /// Read and write recipe reviews
    Review(ReviewCommand),

    /// Manage the user profile
    Profile(ProfileCommand),

    /// Resolve an app URL into a route
    Route(RouteCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "resep=debug,resep_core=debug"
    } else {
        "resep=warn,resep_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(cli.config)?;
    tracing::debug!("Data directory: {}", config.data_dir.value.display());

    match &cli.command {
        Some(command) => execute_command(command, &config),
        None => {
            println!("Use --help to see available commands");
            Ok(())
        }
    }
}

fn execute_command(command: &Commands, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // Config commands never touch the data directory
        Commands::Config(cmd) => cmd.run(config),
        Commands::Recipe(cmd) => cmd.run(&mut open_session(config), config),
        Commands::Favorite(cmd) => cmd.run(&mut open_session(config)),
        Commands::Review(cmd) => cmd.run(&mut open_session(config)),
        Commands::Profile(cmd) => cmd.run(&mut open_session(config)),
        Commands::Route(cmd) => cmd.run(&mut open_session(config)),
    }
}

fn open_session(config: &Config) -> Session<FileStore> {
    let store = PersistentStore::new(FileStore::new(config.data_dir.value.clone()));
    Session::open(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_with_data_dir(data_dir: &std::path::Path) -> Config {
        let temp_dir = tempdir().unwrap();
        let dir = data_dir.to_string_lossy().into_owned();
        Config::load_with_env(Some(temp_dir.path().join("config.yaml")), move |name| {
            (name == "RESEP_DATA_DIR").then(|| dir.clone())
        })
        .unwrap()
    }

    fn command(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command.unwrap()
    }

    #[test]
    fn test_config_command_leaves_data_dir_alone() {
        let temp_dir = tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");
        let config = config_with_data_dir(&data_dir);

        execute_command(&command(&["resep", "config", "show"]), &config).unwrap();
        assert!(!data_dir.exists());
    }

    #[test]
    fn test_recipe_command_uses_data_dir() {
        let temp_dir = tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");
        let config = config_with_data_dir(&data_dir);

        execute_command(
            &command(&["resep", "recipe", "list", "--category", "makanan"]),
            &config,
        )
        .unwrap();
        assert!(data_dir.join("rn-cache-makanan.json").exists());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags_do_not_clash_with_globals() {
        let cli = Cli::try_parse_from([
            "resep", "-c", "my.yaml", "review", "add", "makanan", "12", "-r", "4", "-m", "Enak",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.yaml")));
        assert!(matches!(cli.command, Some(Commands::Review(_))));

        assert!(Cli::try_parse_from(["resep", "recipe", "list", "-t", "minuman"]).is_ok());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["resep", "favorite", "list", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Favorite(_))));
    }
}
