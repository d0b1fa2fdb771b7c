//! Core types for ChatClothes.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;
pub mod phone;
pub mod price;
pub mod size;

pub use credential::CredentialHash;
pub use id::*;
pub use phone::{Phone, PhoneError};
pub use price::{Price, PriceError};
pub use size::{Size, SizeError};
