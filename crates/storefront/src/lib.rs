//! Studio Makeup storefront client library.
//!
//! Two independent flows share nothing but this crate:
//!
//! - [`catalog`] - fetches the product list, tracks the view-state and
//!   holds locally-created products in memory
//! - [`services::auth`] - registration and login against a local
//!   [`storage::KeyValueStore`]
//!
//! [`views`] renders the catalog view-state as text, [`error`] maps every
//! failure to a static user-facing alert.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod services;
pub mod storage;
pub mod telemetry;
pub mod views;
