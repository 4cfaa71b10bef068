//! Business logic services for the storefront client.
//!
//! # Services
//!
//! - `auth` - Local registration and login over a key-value store

pub mod auth;
