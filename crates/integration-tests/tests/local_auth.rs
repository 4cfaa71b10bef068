//! Integration tests for registration and login over an on-disk store.

#![allow(clippy::unwrap_used)]

use studio_makeup_core::User;
use studio_makeup_integration_tests::file_auth;
use studio_makeup_storefront::services::auth::{AuthError, AuthService, CURRENT_USER_KEY, USERS_KEY};
use studio_makeup_storefront::storage::{FileStore, KeyValueStore};

async fn users_with_email(store: &FileStore, email: &str) -> usize {
    let raw = store.get_item(USERS_KEY).await.unwrap().unwrap_or_default();
    let users: Vec<User> = serde_json::from_str(&raw).unwrap();
    users.iter().filter(|u| u.email.as_str() == email).count()
}

#[tokio::test]
async fn test_register_then_login_across_service_instances() {
    let (auth, _dir) = file_auth();
    auth.register("Maria Silva", "maria@studio.com", "s3nha")
        .await
        .unwrap();

    // A new service over the same file sees the persisted user
    let reopened = AuthService::new(FileStore::new(auth.store().path()));
    let user = reopened.login("maria@studio.com", "s3nha").await.unwrap();
    assert_eq!(user.name, "Maria Silva");

    let session = auth.current_session().await.unwrap().unwrap();
    assert_eq!(session, user);
}

#[tokio::test]
async fn test_duplicate_registration_keeps_exactly_one_record() {
    let (auth, _dir) = file_auth();
    auth.register("Maria", "maria@studio.com", "s3nha").await.unwrap();

    let err = auth
        .register("Maria 2", "maria@studio.com", "outra")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UserAlreadyExists));
    assert_eq!(users_with_email(auth.store(), "maria@studio.com").await, 1);

    // The original password still works, the rejected one does not
    assert!(auth.login("maria@studio.com", "s3nha").await.is_ok());
    assert!(auth.login("maria@studio.com", "outra").await.is_err());
}

#[tokio::test]
async fn test_concurrent_duplicate_registrations_on_disk() {
    let (auth, _dir) = file_auth();

    let mut handles = Vec::new();
    for i in 0..10 {
        let auth = auth.clone();
        handles.push(tokio::spawn(async move {
            auth.register(&format!("Cliente {i}"), "promo@studio.com", "s3nha")
                .await
        }));
    }
    let results: Vec<_> = futures_join(handles).await;

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, AuthError::UserAlreadyExists))
    );
    assert_eq!(users_with_email(auth.store(), "promo@studio.com").await, 1);
}

#[tokio::test]
async fn test_independent_services_on_one_file_admit_one_registration() {
    let (auth, _dir) = file_auth();
    let path = auth.store().path().to_path_buf();

    for round in 0..10 {
        let email = format!("cliente{round}@studio.com");
        let first = AuthService::new(FileStore::new(&path));
        let second = AuthService::new(FileStore::new(&path));

        let (a, b) = tokio::join!(
            first.register("Primeira", &email, "s3nha"),
            second.register("Segunda", &email, "outra"),
        );

        assert_eq!(
            usize::from(a.is_ok()) + usize::from(b.is_ok()),
            1,
            "round {round}: exactly one registration must be accepted"
        );
        assert_eq!(users_with_email(auth.store(), &email).await, 1);
    }
}

async fn futures_join<T>(handles: Vec<tokio::task::JoinHandle<T>>) -> Vec<T> {
    let mut out = Vec::with_capacity(handles.len());
    for handle in handles {
        out.push(handle.await.unwrap());
    }
    out
}

#[tokio::test]
async fn test_login_mismatch_does_not_write_session() {
    let (auth, _dir) = file_auth();
    auth.register("Maria", "maria@studio.com", "s3nha").await.unwrap();

    for (email, password) in [
        ("maria@studio.com", "S3NHA"),
        ("maria@studio.co", "s3nha"),
        ("", ""),
    ] {
        assert!(matches!(
            auth.login(email, password).await,
            Err(AuthError::InvalidCredentials)
        ));
    }
    assert_eq!(auth.store().get_item(CURRENT_USER_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_store_file_surfaces_storage_error() {
    let (auth, _dir) = file_auth();
    tokio::fs::write(auth.store().path(), "garbage").await.unwrap();

    let err = auth.login("maria@studio.com", "s3nha").await.unwrap_err();
    assert!(matches!(err, AuthError::Storage(_)));
    assert!(err.is_internal());

    let err = auth
        .register("Maria", "maria@studio.com", "s3nha")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Storage(_)));
}

#[tokio::test]
async fn test_persisted_layout_matches_legacy_keys() {
    let (auth, _dir) = file_auth();
    auth.register("Maria", "maria@studio.com", "s3nha").await.unwrap();
    auth.login("maria@studio.com", "s3nha").await.unwrap();

    let raw = tokio::fs::read_to_string(auth.store().path()).await.unwrap();
    let items: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let users: serde_json::Value =
        serde_json::from_str(items["@users"].as_str().unwrap()).unwrap();
    assert_eq!(
        users,
        serde_json::json!([{"name": "Maria", "email": "maria@studio.com", "password": "s3nha"}])
    );
    assert!(items["@currentUser"].is_string());
}
