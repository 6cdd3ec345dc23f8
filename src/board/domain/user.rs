//! User profiles referenced by projects and tasks.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Profile of a user account, read for membership and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Login handle.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Human-readable full name.
    pub full_name: String,
}

impl User {
    /// Creates a user profile with a fresh identifier.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            email: email.into(),
            full_name: full_name.into(),
        }
    }

    /// Returns the name shown to other members, falling back to the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            &self.username
        } else {
            full_name
        }
    }
}
