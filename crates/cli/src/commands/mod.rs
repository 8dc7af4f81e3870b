//! CLI command implementations.
//!
//! Each command takes the already-opened [`ShopSession`] and returns the text
//! to print, so `main` owns all terminal output.

pub mod cart;
pub mod catalog;

use thiserror::Error;
use toyland_core::{CheckoutError, SessionError, ShopSession, StoreError, ToyId};
use toyland_storefront::catalog::{CATALOG_UNAVAILABLE, load_catalog};
use toyland_storefront::config::ShopConfig;
use toyland_storefront::storage::FileStore;

/// Errors a command can report.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No toy with this ID in the catalog.
    #[error("No toy with id {0} in the catalog")]
    UnknownToy(ToyId),

    /// The toy is not in the cart.
    #[error("Toy {0} is not in the cart")]
    NotInCart(ToyId),

    /// The data directory could not be opened.
    #[error("Cannot open data directory: {0}")]
    Store(#[from] StoreError),

    /// Saving the cart failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Checkout was refused.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Load the catalog and the saved cart.
///
/// A catalog that fails to load is logged and replaced by an empty one, as
/// the storefront does; the saved cart still carries its toys.
///
/// # Errors
///
/// Returns `CommandError::Store` if the data directory cannot be opened.
pub async fn open_session(config: &ShopConfig) -> Result<ShopSession, CommandError> {
    let catalog = match load_catalog(&config.catalog).await {
        Ok(toys) => toys,
        Err(e) => {
            tracing::error!(source = %config.catalog, error = %e, "{}", CATALOG_UNAVAILABLE);
            Vec::new()
        }
    };

    let store = FileStore::open(&config.data_dir)?;
    let mut session = ShopSession::new(catalog, store);
    if let Err(e) = session.restore_cart() {
        tracing::warn!(error = %e, "Saved cart is unreadable, starting empty");
    }

    Ok(session)
}
