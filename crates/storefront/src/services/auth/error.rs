//! Authentication error types.

use thiserror::Error;

use crate::error::Alert;
use crate::storage::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required form field was left blank.
    #[error("name, email and password are required")]
    MissingFields,

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] studio_makeup_core::EmailError),

    /// No stored user matches the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// The key-value store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A stored record could not be decoded or encoded.
    #[error("malformed user record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// Which auth operation failed; selects the generic alert text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Register,
    Session,
}

impl std::fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
            Self::Session => write!(f, "session"),
        }
    }
}

impl AuthError {
    /// Whether this is an infrastructure failure rather than a user mistake.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::MalformedRecord(_))
    }

    /// User-facing alert for this error. Never exposes the underlying cause.
    #[must_use]
    pub const fn alert(&self, operation: AuthOperation) -> Alert {
        match self {
            Self::MissingFields => {
                Alert::error_titled("Campos obrigatórios", "Preencha todos os campos")
            }
            Self::InvalidEmail(_) => Alert::error("Email inválido"),
            Self::InvalidCredentials => Alert::error("Email ou senha incorretos"),
            Self::UserAlreadyExists => Alert::error("Este email já está cadastrado"),
            Self::Storage(_) | Self::MalformedRecord(_) => match operation {
                AuthOperation::Login => Alert::error("Ocorreu um erro durante o login"),
                AuthOperation::Register => Alert::error("Falha ao cadastrar usuário"),
                AuthOperation::Session => Alert::error("Não foi possível ler a sessão atual"),
            },
        }
    }
}
