//! Application state shared across handlers.

use std::sync::{Arc, Mutex};

use toyland_core::{FilterOptions, ShopSession};

use crate::error::AppError;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The storefront serves a single
/// local shopper, so there is exactly one [`ShopSession`]; handlers reach it
/// through [`AppState::with_session`], which holds the lock only for the
/// synchronous closure.
///
/// Cart mutations save through the session's store inside that closure, so
/// a [`FileStore`](crate::storage::FileStore) write is blocking file I/O done
/// under the lock on the calling runtime worker. The saved cart is a few
/// hundred bytes and there is one shopper, so requests never queue behind it
/// for long.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    session: Mutex<ShopSession>,
    filter_options: FilterOptions,
    catalog_notice: Option<String>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `session` - Shopper session with the catalog already loaded
    /// * `catalog_notice` - Message to show if the catalog failed to load
    #[must_use]
    pub fn new(session: ShopSession, catalog_notice: Option<String>) -> Self {
        let filter_options = FilterOptions::from_catalog(session.catalog());

        Self {
            inner: Arc::new(AppStateInner {
                session: Mutex::new(session),
                filter_options,
                catalog_notice,
            }),
        }
    }

    /// Run `f` with exclusive access to the session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a previous handler panicked while
    /// holding the session.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut ShopSession) -> R) -> Result<R, AppError> {
        let mut session = self
            .inner
            .session
            .lock()
            .map_err(|_| AppError::Internal("Session lock poisoned".to_string()))?;
        Ok(f(&mut session))
    }

    /// Choices for the catalog filter panel.
    #[must_use]
    pub fn filter_options(&self) -> &FilterOptions {
        &self.inner.filter_options
    }

    /// Notice about a failed catalog load, if any.
    #[must_use]
    pub fn catalog_notice(&self) -> Option<&str> {
        self.inner.catalog_notice.as_deref()
    }
}
