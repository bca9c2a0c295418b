//! User entity representing a signed-in Discord account.

use chrono::{DateTime, Utc};

/// A user record, upserted from the identity provider on every login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub discriminator: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns the CDN URL of the user's avatar, if they have one.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/avatars/{}/{}.png", self.id, hash))
    }

    /// Returns `username#discriminator` for legacy accounts, `username` otherwise.
    pub fn display_name(&self) -> String {
        if self.discriminator.is_empty() || self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }
}

/// Profile fields written on login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub discriminator: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(avatar: Option<&str>, discriminator: &str) -> User {
        User {
            id: "80351110224678912".to_string(),
            username: "nelly".to_string(),
            avatar: avatar.map(str::to_string),
            discriminator: discriminator.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_avatar_url() {
        let u = user(Some("8342729096ea3675442027381ff50dfe"), "0");
        assert_eq!(
            u.avatar_url().unwrap(),
            "https://cdn.discordapp.com/avatars/80351110224678912/8342729096ea3675442027381ff50dfe.png"
        );
        assert!(user(None, "0").avatar_url().is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(user(None, "0").display_name(), "nelly");
        assert_eq!(user(None, "").display_name(), "nelly");
        assert_eq!(user(None, "1337").display_name(), "nelly#1337");
    }
}
