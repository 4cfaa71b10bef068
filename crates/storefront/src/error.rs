//! Unified error handling with Sentry integration.
//!
//! Every failure ends in a static [`Alert`] shown to the user. The detailed
//! cause goes to `tracing` (and Sentry, when configured) and never into the
//! alert text.

use core::fmt;

use thiserror::Error;

use crate::catalog::{CatalogError, FormError};
use crate::config::ConfigError;
use crate::services::auth::{AuthError, AuthOperation};

/// A user-facing message with a title, as shown in a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub message: &'static str,
}

impl Alert {
    /// Alert titled "Erro".
    #[must_use]
    pub const fn error(message: &'static str) -> Self {
        Self::error_titled("Erro", message)
    }

    /// Alert with a custom title.
    #[must_use]
    pub const fn error_titled(title: &'static str, message: &'static str) -> Self {
        Self { title, message }
    }

    /// Alert titled "Sucesso".
    #[must_use]
    pub const fn success(message: &'static str) -> Self {
        Self {
            title: "Sucesso",
            message,
        }
    }

    /// Shown after a successful registration.
    pub const REGISTERED: Self = Self::success("Cadastro realizado com sucesso!");
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Application-level error type for the storefront client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog client could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// New product form rejected.
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Authentication operation failed.
    #[error("Auth error ({operation}): {source}")]
    Auth {
        operation: AuthOperation,
        #[source]
        source: AuthError,
    },
}

impl AppError {
    /// Wrap an auth failure together with the operation that raised it.
    #[must_use]
    pub const fn auth(operation: AuthOperation, source: AuthError) -> Self {
        Self::Auth { operation, source }
    }

    /// Log the failure and return the alert to show.
    ///
    /// Internal failures are captured to Sentry; user mistakes are not.
    pub fn alert(&self) -> Alert {
        let internal = match self {
            Self::Config(_) | Self::Catalog(_) => true,
            Self::Form(_) => false,
            Self::Auth { source, .. } => source.is_internal(),
        };

        if internal {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Operation failed"
            );
        } else {
            tracing::info!(error = %self, "Operation rejected");
        }

        match self {
            Self::Config(_) => Alert::error("Configuração inválida"),
            Self::Catalog(e) => {
                Alert::error(crate::catalog::LoadFailure::from(e).message())
            }
            Self::Form(FormError::MissingFields) => Alert::error_titled(
                "Campos obrigatórios",
                "Preencha todos os campos e adicione uma imagem",
            ),
            Self::Form(FormError::InvalidPrice(_)) => {
                Alert::error_titled("Campos obrigatórios", "Preço inválido")
            }
            Self::Auth { operation, source } => source.alert(*operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_display() {
        assert_eq!(
            Alert::REGISTERED.to_string(),
            "Sucesso: Cadastro realizado com sucesso!"
        );
    }

    #[test]
    fn test_form_alerts() {
        let missing = AppError::from(FormError::MissingFields).alert();
        assert_eq!(
            missing.message,
            "Preencha todos os campos e adicione uma imagem"
        );

        let price = AppError::from(FormError::InvalidPrice("x".to_owned())).alert();
        assert_eq!(price.message, "Preço inválido");
    }

    #[test]
    fn test_auth_alert_uses_operation() {
        let err = AppError::auth(AuthOperation::Login, AuthError::InvalidCredentials);
        assert_eq!(err.alert(), Alert::error("Email ou senha incorretos"));
        assert!(err.to_string().contains("login"));
    }

    #[test]
    fn test_alert_never_leaks_cause() {
        let err = AppError::from(ConfigError::InvalidEnvVar(
            "STUDIO_CATALOG_URL".to_owned(),
            "relative URL without a base".to_owned(),
        ));
        let alert = err.alert();
        assert!(!alert.message.contains("STUDIO_CATALOG_URL"));
    }
}
