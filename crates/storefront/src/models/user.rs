//! Simulated user domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use producthub_core::{Email, UserId};

/// A signed-in shopper.
///
/// Set wholesale by sign-in/sign-up and replaced wholesale on sign-out; the
/// store never edits individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Session-scoped user ID.
    pub id: UserId,
    /// Email entered at sign-in.
    pub email: Email,
    /// Display name shown in the navigation bar.
    pub name: String,
    /// When the simulated sign-in completed.
    pub signed_in_at: DateTime<Utc>,
}

impl User {
    /// Create a user, deriving the display name from the email when `name` is blank.
    #[must_use]
    pub fn new(email: Email, name: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| email.local_part())
            .to_owned();

        Self {
            id: UserId::generate(),
            email,
            name,
            signed_in_at: Utc::now(),
        }
    }

    /// Uppercased first letter of the display name, for the avatar badge.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_name_falls_back_to_local_part() {
        let email = Email::parse("maria.santos@example.com").unwrap();
        assert_eq!(User::new(email.clone(), None).name, "maria.santos");
        assert_eq!(User::new(email, Some("   ")).name, "maria.santos");
    }

    #[test]
    fn test_explicit_name_kept() {
        let email = Email::parse("ms@example.com").unwrap();
        let user = User::new(email, Some(" Maria Santos "));
        assert_eq!(user.name, "Maria Santos");
        assert_eq!(user.initial(), "M");
    }

    #[test]
    fn test_initial_uppercases() {
        let user = User::new(Email::parse("ana@example.com").unwrap(), None);
        assert_eq!(user.initial(), "A");
    }
}
