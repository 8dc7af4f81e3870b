//! The shopper session.
//!
//! [`ShopSession`] owns everything a storefront page needs: the catalog, the
//! current filter and its result, the cart, and the store the cart is
//! persisted to. Front ends hold one session and call into it; nothing here
//! is global.

use core::fmt;

use crate::cart::{Cart, CartEntry, CartTotals};
use crate::filter::{FilterParams, ToyFilter};
use crate::store::{CART_STORAGE_KEY, KeyValueStore, StoreError};
use crate::toy::Toy;
use crate::types::ToyId;

/// Number of toys shown on the home page.
pub const FEATURED_COUNT: usize = 6;

/// Errors from session operations that touch storage.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The store could not be read or written.
    #[error("cart storage failed: {0}")]
    Store(#[from] StoreError),
    /// The persisted cart could not be decoded or encoded.
    #[error("cart snapshot is invalid: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Reasons checkout cannot proceed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Your cart is empty. Please add some toys before checkout.")]
    EmptyCart,
}

/// What the checkout confirmation shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub lines: Vec<CartEntry>,
    pub totals: CartTotals,
}

/// A single shopper's view of the store.
pub struct ShopSession {
    catalog: Vec<Toy>,
    params: FilterParams,
    filter: ToyFilter,
    /// Catalog indices of the toys that pass `filter`, in catalog order.
    filtered: Vec<usize>,
    cart: Cart,
    store: Box<dyn KeyValueStore>,
}

impl fmt::Debug for ShopSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopSession")
            .field("catalog", &self.catalog.len())
            .field("params", &self.params)
            .field("filtered", &self.filtered.len())
            .field("cart", &self.cart.quantities())
            .finish_non_exhaustive()
    }
}

impl ShopSession {
    /// Start a session with an empty cart and no filter applied.
    ///
    /// Call [`restore_cart`](Self::restore_cart) to pick up a persisted cart.
    pub fn new(catalog: Vec<Toy>, store: impl KeyValueStore + 'static) -> Self {
        let filtered = (0..catalog.len()).collect();
        Self {
            catalog,
            params: FilterParams::default(),
            filter: ToyFilter::default(),
            filtered,
            cart: Cart::new(),
            store: Box::new(store),
        }
    }

    /// Load the persisted cart, replacing the current one.
    ///
    /// A missing snapshot yields an empty cart. Returns the number of entries
    /// restored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the snapshot is
    /// malformed; the cart is left empty in that case.
    pub fn restore_cart(&mut self) -> Result<usize, SessionError> {
        self.cart = Cart::new();
        if let Some(json) = self.store.get(CART_STORAGE_KEY)? {
            self.cart = Cart::from_snapshot(&json)?;
        }
        Ok(self.cart.len())
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn catalog(&self) -> &[Toy] {
        &self.catalog
    }

    /// Look up a toy in the catalog.
    #[must_use]
    pub fn toy(&self, id: ToyId) -> Option<&Toy> {
        self.catalog.iter().find(|toy| toy.id == id)
    }

    /// The first few toys of the catalog, for the home page.
    pub fn featured(&self) -> impl Iterator<Item = &Toy> {
        self.catalog.iter().take(FEATURED_COUNT)
    }

    /// Toys that pass the current filter, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &Toy> {
        self.filtered.iter().filter_map(|&i| self.catalog.get(i))
    }

    /// The raw control values behind the current filter.
    #[must_use]
    pub const fn filter_params(&self) -> &FilterParams {
        &self.params
    }

    /// Replace the filter and recompute the filtered view.
    ///
    /// Returns the number of matching toys.
    pub fn apply_filter(&mut self, params: FilterParams) -> usize {
        self.filter = ToyFilter::from_params(&params);
        self.params = params;
        self.filtered = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, toy)| self.filter.matches(toy))
            .map(|(i, _)| i)
            .collect();
        self.filtered.len()
    }

    /// Change only the category criterion, keeping the others.
    pub fn filter_by_category(&mut self, category: &str) -> usize {
        let params = FilterParams {
            category: Some(category.to_owned()),
            ..self.params.clone()
        };
        self.apply_filter(params)
    }

    /// Reset every criterion.
    pub fn clear_filters(&mut self) -> usize {
        self.apply_filter(FilterParams::default())
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Add one of a toy to the cart.
    ///
    /// A toy already in the cart is incremented even if the catalog no longer
    /// lists it. An ID found in neither is ignored and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails. The in-memory cart keeps
    /// the change.
    pub fn add_to_cart(&mut self, id: ToyId) -> Result<Option<CartTotals>, SessionError> {
        if self.cart.increment(id).is_none() {
            let Some(toy) = self.catalog.iter().find(|toy| toy.id == id) else {
                return Ok(None);
            };
            self.cart.add(toy);
        }
        self.persist().map(Some)
    }

    /// Remove a toy from the cart, whether or not it was there.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn remove_from_cart(&mut self, id: ToyId) -> Result<CartTotals, SessionError> {
        self.cart.remove(id);
        self.persist()
    }

    /// Set a toy's quantity; below one removes it.
    ///
    /// Setting the quantity of a toy that is not in the cart changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn set_quantity(&mut self, id: ToyId, quantity: i64) -> Result<CartTotals, SessionError> {
        if quantity < 1 {
            return self.remove_from_cart(id);
        }
        if self.cart.set_quantity(id, quantity) {
            self.persist()
        } else {
            Ok(self.totals())
        }
    }

    /// Summarize the cart for the checkout confirmation.
    ///
    /// The cart itself is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if there is nothing to check out.
    pub fn checkout(&self) -> Result<CheckoutSummary, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(CheckoutSummary {
            lines: self.cart.entries().cloned().collect(),
            totals: self.cart.totals(),
        })
    }

    /// Write the full cart snapshot and return fresh totals.
    fn persist(&mut self) -> Result<CartTotals, SessionError> {
        let snapshot = self.cart.to_snapshot()?;
        self.store.set(CART_STORAGE_KEY, &snapshot)?;
        Ok(self.cart.totals())
    }
}
