//! Core value types for Toyland.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod age;
pub mod id;
pub mod price;

pub use age::{AgeBounds, AgeRange, OPEN_ENDED_MAX_AGE};
pub use id::*;
pub use price::{Price, PriceError};
