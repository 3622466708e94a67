use clap::{Args, Subcommand};
use resep_core::{KeyValueStore, ProfileUpdate};
use std::path::{Path, PathBuf};

use super::{OutputFormat, Session};

#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Show the profile and favorite count
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Change username and/or role
    Update {
        /// New username
        #[arg(long)]
        username: Option<String>,

        /// New role
        #[arg(long)]
        role: Option<String>,
    },

    /// Use an image file as the profile picture
    Avatar {
        /// Image file (png, jpg, gif, webp, svg)
        file: PathBuf,
    },
}

impl ProfileCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        session: &mut Session<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProfileSubcommand::Show { format } => {
                let profile = session.state.profile();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(profile)?);
                    }
                    OutputFormat::Text => {
                        println!("{}", profile.username);
                        println!("{}", profile.role);
                        if profile.has_avatar() {
                            println!("Avatar: {} bytes", profile.avatar.len());
                        } else {
                            println!("Avatar: ({})", profile.initial());
                        }
                        println!("{} resep favorit", session.state.favorites().len());
                    }
                }
                Ok(())
            }

            ProfileSubcommand::Update { username, role } => {
                let update = ProfileUpdate {
                    username: username.clone(),
                    role: role.clone(),
                    avatar: None,
                };
                if update.is_empty() {
                    println!("Nothing to update. Pass --username or --role.");
                    return Ok(());
                }

                session.state.update_profile(update)?;
                println!("Profile saved for {}", session.state.profile().username);
                Ok(())
            }

            ProfileSubcommand::Avatar { file } => {
                let mime = image_mime(file)
                    .ok_or_else(|| format!("Not an image file: {}", file.display()))?;
                let bytes = std::fs::read(file)
                    .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;

                session.state.set_avatar(mime, &bytes)?;
                println!("Avatar updated ({} bytes)", bytes.len());
                Ok(())
            }
        }
    }
}

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_session;
    use tempfile::tempdir;

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime(Path::new("me.PNG")), Some("image/png"));
        assert_eq!(image_mime(Path::new("me.jpeg")), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("notes.txt")), None);
        assert_eq!(image_mime(Path::new("noext")), None);
    }

    #[test]
    fn test_update_rejects_blank_username() {
        let mut session = test_session();
        let cmd = ProfileCommand {
            command: ProfileSubcommand::Update {
                username: Some("   ".into()),
                role: Some("Koki".into()),
            },
        };

        assert!(cmd.run(&mut session).is_err());
        assert_eq!(session.state.profile().username, "Rafi Ardian");
        assert_eq!(session.state.profile().role, "Pecinta kuliner Nusantara");
    }

    #[test]
    fn test_avatar_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("me.png");
        std::fs::write(&path, b"abc").unwrap();

        let mut session = test_session();
        let cmd = ProfileCommand {
            command: ProfileSubcommand::Avatar { file: path },
        };
        cmd.run(&mut session).unwrap();

        assert_eq!(session.state.profile().avatar, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_avatar_missing_file_leaves_profile() {
        let temp_dir = tempdir().unwrap();
        let mut session = test_session();
        let cmd = ProfileCommand {
            command: ProfileSubcommand::Avatar {
                file: temp_dir.path().join("missing.jpg"),
            },
        };

        assert!(cmd.run(&mut session).is_err());
        assert!(!session.state.profile().has_avatar());
    }
}
