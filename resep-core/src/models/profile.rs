use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub const DEFAULT_USERNAME: &str = "Rafi Ardian";
pub const DEFAULT_ROLE: &str = "Pecinta kuliner Nusantara";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub username: String,
    pub role: String,
    /// Data URI of the uploaded picture, or empty.
    #[serde(default)]
    pub avatar: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            role: DEFAULT_ROLE.to_string(),
            avatar: String::new(),
        }
    }
}

impl Profile {
    /// First letter of the username, shown when there is no avatar.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar.is_empty()
    }
}

/// Partial profile; every `Some` field overwrites the stored one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    pub fn avatar(avatar: impl Into<String>) -> Self {
        Self {
            avatar: Some(avatar.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.role.is_none() && self.avatar.is_none()
    }
}

/// Encodes raw image bytes as a `data:` URI.
pub fn avatar_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
