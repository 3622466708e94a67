use clap::{Args, Subcommand};
use resep_core::Category;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::recipe::bundled_count;
use super::OutputFormat;
use crate::config::Config;

const DEFAULT_CONFIG: &str = r#"# resep configuration

# Directory for profile, favorites, reviews and recipe caches
# (default: ~/.local/share/resep)
# data_dir: ~/.local/share/resep

# Origin used in share links
share_origin: http://localhost:5173
"#;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        println!("data_dir: {}", config.data_dir.value.display());
                        println!("  source: {}", config.data_dir.source);
                        println!();

                        println!("share_origin: {}", config.share_origin.value);
                        println!("  source: {}", config.share_origin.source);
                        println!();

                        for category in Category::ALL {
                            println!(
                                "{} bundled: {}",
                                category.label(),
                                bundled_count(category)
                            );
                        }
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = Config::default_config_path();
                if write_default_config(&config_path)? {
                    println!("Created config file: {}", config_path.display());
                    println!("\nEdit this file to customize your settings.");
                } else {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'resep config show' to view current configuration.");
                }
                Ok(())
            }
        }
    }
}

/// Writes the default config to `path` unless a file is already there.
/// Returns whether a file was created.
fn write_default_config(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(DEFAULT_CONFIG.as_bytes())?;
    Ok(true)
}
