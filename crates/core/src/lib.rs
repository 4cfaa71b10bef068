//! Studio Makeup Core - Shared domain types.
//!
//! This crate provides the types shared by the storefront client components:
//! - `storefront` - Catalog loader, local auth store and text views
//! - `cli` - Terminal front-end driving both flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. Wire formats (the remote catalog JSON and the persisted
//! user records) are expressed here through `serde` attributes.
//!
//! # Modules
//!
//! - [`types`] - Products, prices, product IDs, users and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
