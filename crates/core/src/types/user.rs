//! Locally-registered user.

use serde::{Deserialize, Serialize};

use super::Email;

/// A user record as persisted in the local key-value store.
///
/// The password is stored in plaintext, exactly as the store has always
/// held it. `Debug` redacts it so it never reaches the logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Full name from the registration form.
    pub name: String,
    /// Login email, unique within the store.
    pub email: Email,
    /// Plaintext password.
    pub password: String,
}

impl User {
    /// Create a new user record.
    #[must_use]
    pub fn new(name: impl Into<String>, email: Email, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email,
            password: password.into(),
        }
    }

    /// Whether both fields match exactly.
    #[must_use]
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email.matches(email) && self.password == password
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn maria() -> User {
        User::new("Maria", Email::parse("maria@studio.com").unwrap(), "s3nha")
    }

    #[test]
    fn test_matches_credentials_requires_both_fields() {
        let user = maria();
        assert!(user.matches_credentials("maria@studio.com", "s3nha"));
        assert!(!user.matches_credentials("maria@studio.com", "S3nha"));
        assert!(!user.matches_credentials("ana@studio.com", "s3nha"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", maria());
        assert!(debug.contains("maria@studio.com"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("s3nha"));
    }

    #[test]
    fn test_persisted_shape() {
        let value = serde_json::to_value(maria()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Maria",
                "email": "maria@studio.com",
                "password": "s3nha"
            })
        );
    }
}
