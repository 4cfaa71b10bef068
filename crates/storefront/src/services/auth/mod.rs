//! Local authentication service.
//!
//! Users live in the key-value store as one JSON array under [`USERS_KEY`].
//! Login scans that array for an exact email/password match and records the
//! matching user under [`CURRENT_USER_KEY`]. Passwords are plaintext; there
//! is no token, expiry or rate limiting.

mod error;

pub use error::{AuthError, AuthOperation};

use tracing::{info, instrument, warn};

use studio_makeup_core::{Email, User};

use crate::storage::KeyValueStore;

/// Store key holding the JSON array of registered users.
pub const USERS_KEY: &str = "@users";

/// Store key holding the JSON user written on successful login.
pub const CURRENT_USER_KEY: &str = "@currentUser";

/// Authentication service over a key-value store.
///
/// Registration is a read-modify-write of the whole user list performed
/// through [`KeyValueStore::update_item`], so the uniqueness check and the
/// write happen under the store's lock. Concurrent registrations cannot both
/// pass the check, whether they go through one service, several services or
/// several processes sharing the same store.
#[derive(Clone)]
pub struct AuthService<S> {
    store: S,
}

impl<S: KeyValueStore> AuthService<S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Register a new user.
    ///
    /// Surrounding whitespace is stripped from the email. An absent or
    /// unreadable user list counts as empty.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is blank,
    /// `AuthError::InvalidEmail` if the email is malformed,
    /// `AuthError::UserAlreadyExists` if the email is taken, and
    /// `AuthError::Storage` if the store cannot be read or written.
    #[instrument(skip(self, name, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if [name, email, password].iter().any(|f| f.trim().is_empty()) {
            return Err(AuthError::MissingFields);
        }
        let email = Email::parse(email.trim())?;
        let user = User::new(name, email, password);

        let count = self
            .store
            .update_item(USERS_KEY, |raw| -> Result<_, AuthError> {
                let mut users: Vec<User> = match raw {
                    None => Vec::new(),
                    Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                        warn!(error = %e, "Stored user list is unreadable, starting a new one");
                        Vec::new()
                    }),
                };

                if users.iter().any(|u| u.email == user.email) {
                    info!("Registration rejected: email already registered");
                    return Err(AuthError::UserAlreadyExists);
                }

                users.push(user.clone());
                Ok((Some(serde_json::to_string(&users)?), users.len()))
            })
            .await?;

        info!(users = count, "User registered");
        Ok(user)
    }

    /// Log in with email and password.
    ///
    /// On success the user is stored under [`CURRENT_USER_KEY`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no user matches both fields,
    /// and `AuthError::Storage` / `AuthError::MalformedRecord` if the user list
    /// cannot be read.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let users = self.read_users().await?;

        let user = users
            .into_iter()
            .find(|u| u.matches_credentials(email.trim(), password))
            .ok_or(AuthError::InvalidCredentials)?;

        self.store
            .set_item(CURRENT_USER_KEY, serde_json::to_string(&user)?)
            .await?;

        info!("User logged in");
        Ok(user)
    }

    /// The user recorded by the last successful login, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` / `AuthError::MalformedRecord` if the
    /// record cannot be read.
    pub async fn current_session(&self) -> Result<Option<User>, AuthError> {
        match self.store.get_item(CURRENT_USER_KEY).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn read_users(&self) -> Result<Vec<User>, AuthError> {
        match self.store.get_item(USERS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}
