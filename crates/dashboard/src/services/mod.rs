//! Business logic over the record store.
//!
//! # Services
//!
//! - `catalog` - Product listing, search, sales and inventory figures
//! - `preferences` - Per-customer taste signals
//! - `recommender` - Suggestions from a customer's most frequent searches
//! - `accounts` - Registration and login by phone number
//!
//! Services borrow a [`Store`](crate::db::Store) and are cheap to build per
//! call. All of them do blocking file I/O.

pub mod accounts;
pub mod catalog;
pub mod preferences;
pub mod recommender;

pub use accounts::{AccountError, AccountService, Registration};
pub use catalog::{CatalogError, CatalogService, CatalogSummary, Listing, SearchOutcome, TopSeller};
pub use preferences::PreferenceTracker;
pub use recommender::{Recommendation, Recommender};
