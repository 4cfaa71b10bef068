//! Core types for the Studio Makeup storefront.
//!
//! This module provides type-safe wrappers for the catalog and auth domains.

pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod user;

pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::Price;
pub use product::Product;
pub use user::User;
