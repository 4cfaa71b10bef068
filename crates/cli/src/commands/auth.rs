//! Local auth commands.

use studio_makeup_storefront::config::StorefrontConfig;
use studio_makeup_storefront::error::{Alert, AppError};
use studio_makeup_storefront::services::auth::{AuthOperation, AuthService};
use studio_makeup_storefront::storage::FileStore;

use super::{CliError, output};

fn service(config: &StorefrontConfig) -> AuthService<FileStore> {
    AuthService::new(FileStore::new(&config.storage_path))
}

/// Register a new user.
///
/// # Errors
///
/// Returns `CliError::App` carrying the auth failure.
pub async fn register(
    config: &StorefrontConfig,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    service(config)
        .register(name, email, password)
        .await
        .map_err(|e| AppError::auth(AuthOperation::Register, e))?;

    output(&Alert::REGISTERED.to_string())?;
    Ok(())
}

/// Log in and record the session.
///
/// # Errors
///
/// Returns `CliError::App` carrying the auth failure.
pub async fn login(config: &StorefrontConfig, email: &str, password: &str) -> Result<(), CliError> {
    let user = service(config)
        .login(email, password)
        .await
        .map_err(|e| AppError::auth(AuthOperation::Login, e))?;

    output(&format!("Bem-vindo(a), {}!", user.name))?;
    Ok(())
}

/// Show the user recorded by the last login.
///
/// # Errors
///
/// Returns `CliError::App` if the session record cannot be read.
pub async fn session(config: &StorefrontConfig) -> Result<(), CliError> {
    let current = service(config)
        .current_session()
        .await
        .map_err(|e| AppError::auth(AuthOperation::Session, e))?;

    match current {
        Some(user) => output(&format!("{} <{}>", user.name, user.email))?,
        None => output("Nenhuma sessão ativa")?,
    }
    Ok(())
}
