//! ChatClothes Dashboard library.
//!
//! Holds everything that touches the data directory: the CSV record store,
//! the catalog, preference, recommendation and account services, and the
//! HTTP inventory dashboard. The `cc-cli` binary reuses the store and
//! services from here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
