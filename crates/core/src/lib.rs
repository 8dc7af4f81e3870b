//! Toyland Core - catalog, filter and cart logic.
//!
//! This crate holds everything the Toyland front ends share:
//! - `storefront` - server-rendered web storefront
//! - `cli` - command-line access to the same catalog and cart
//!
//! # Architecture
//!
//! The core crate contains only types, pure functions and traits - no file
//! access, no HTTP clients. Storage is reached through the [`KeyValueStore`]
//! trait so the session can be driven in tests with a [`MemoryStore`].
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for toy IDs, prices and age ranges
//! - [`toy`] - The catalog record
//! - [`filter`] - The six-criterion catalog filter
//! - [`cart`] - Cart entries, quantities and totals
//! - [`store`] - Key-value storage for the persisted cart
//! - [`session`] - The shopper session that owns all of the above

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod filter;
pub mod session;
pub mod store;
pub mod toy;
pub mod types;

pub use cart::{Cart, CartEntry, CartTotals, parse_quantity_input};
pub use filter::{AgeFilter, FilterOptions, FilterParams, PriceCeiling, ToyFilter, filter_toys};
pub use session::{CheckoutError, CheckoutSummary, SessionError, ShopSession};
pub use store::{CART_STORAGE_KEY, KeyValueStore, MemoryStore, StoreError};
pub use toy::Toy;
pub use types::*;
