use super::AppState;
use crate::error::{Error, Result};
use crate::models::{avatar_data_uri, Profile, ProfileUpdate};
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> AppState<S> {
    pub fn profile(&self) -> &Profile {
        self.profile.get()
    }

    /// Shallow-merges `update` into the profile.
    ///
    /// A username that is blank after trimming rejects the whole update.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        let username = match update.username {
            Some(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(Error::EmptyUsername);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        self.profile.update(|profile| {
            if let Some(username) = username {
                profile.username = username;
            }
            if let Some(role) = update.role {
                profile.role = role;
            }
            if let Some(avatar) = update.avatar {
                profile.avatar = avatar;
            }
        });
        tracing::debug!("Profile updated for {}", self.profile().username);
        Ok(())
    }

    /// Stores an uploaded picture as the avatar.
    pub fn set_avatar(&mut self, mime: &str, bytes: &[u8]) -> Result<()> {
        self.update_profile(ProfileUpdate::avatar(avatar_data_uri(mime, bytes)))
    }
}
