//! ChatClothes Core - Shared types library.
//!
//! This crate provides the types and pure logic shared by all ChatClothes
//! components:
//! - `dashboard` - Record store, services and the HTTP inventory dashboard
//! - `cli` - Text chat interface and staff tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no file access, no
//! HTTP. Everything that touches the data directory lives in `dashboard`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, sizes, phone numbers and credentials
//! - [`models`] - Catalog, account, preference and sale records
//! - [`query`] - Token normalization and free-text filter extraction

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod query;
pub mod types;

pub use models::*;
pub use query::{Filter, interpret, normalize};
pub use types::*;
