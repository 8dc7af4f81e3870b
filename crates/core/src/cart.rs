//! Cart bookkeeping.
//!
//! The cart maps toy IDs to a snapshot of the toy and a quantity. Quantities
//! are always at least one: any operation that would drop a quantity below one
//! removes the entry instead. Item count and price total are derived on demand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::toy::Toy;
use crate::types::{Price, ToyId};

/// A toy in the cart together with how many the shopper wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Snapshot of the toy taken when it was first added.
    pub toy: Toy,
    pub quantity: u32,
}

impl CartEntry {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.toy.price.times(self.quantity)
    }
}

/// Derived cart figures for the badge and the cart footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of quantity times unit price.
    pub total: Price,
}

/// The shopper's cart.
///
/// Serializes as a JSON object keyed by toy ID, each value holding the toy
/// snapshot and quantity. That shape is what gets persisted, and it restores
/// to the same ID to quantity mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<ToyId, CartEntry>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted snapshot, dropping entries whose quantity is zero.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the snapshot is malformed.
    pub fn from_snapshot(json: &str) -> Result<Self, serde_json::Error> {
        let mut cart: Self = serde_json::from_str(json)?;
        cart.entries.retain(|_, entry| entry.quantity >= 1);
        Ok(cart)
    }

    /// Encode the cart for persistence.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if encoding fails.
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Add one of `toy`: increments an existing entry or inserts quantity 1.
    ///
    /// Returns the entry's new quantity.
    pub fn add(&mut self, toy: &Toy) -> u32 {
        let entry = self.entries.entry(toy.id).or_insert_with(|| CartEntry {
            toy: toy.clone(),
            quantity: 0,
        });
        entry.quantity = entry.quantity.saturating_add(1);
        entry.quantity
    }

    /// Add one more of a toy that is already in the cart.
    ///
    /// Returns the new quantity, or `None` if `id` is not in the cart.
    pub fn increment(&mut self, id: ToyId) -> Option<u32> {
        let entry = self.entries.get_mut(&id)?;
        entry.quantity = entry.quantity.saturating_add(1);
        Some(entry.quantity)
    }

    /// Delete an entry. Returns whether it was present.
    pub fn remove(&mut self, id: ToyId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Set an entry's quantity; anything below one removes it.
    ///
    /// Returns `false` if `id` is not in the cart, in which case nothing
    /// changes.
    pub fn set_quantity(&mut self, id: ToyId, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove(id);
        }
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        true
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, id: ToyId) -> Option<&CartEntry> {
        self.entries.get(&id)
    }

    /// Entries in ascending toy ID order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Number of distinct toys in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// ID to quantity mapping, mostly useful for comparisons.
    #[must_use]
    pub fn quantities(&self) -> BTreeMap<ToyId, u32> {
        self.entries
            .iter()
            .map(|(id, entry)| (*id, entry.quantity))
            .collect()
    }

    /// Recompute item count and total.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.entries().map(|e| u64::from(e.quantity)).sum(),
            total: self.entries().map(CartEntry::line_total).sum(),
        }
    }
}

/// Parse a quantity typed into the cart's quantity field.
///
/// Accepts a whole number of at least one; anything else is rejected so the
/// field can be reverted to its previous value.
#[must_use]
pub fn parse_quantity_input(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&n| n >= 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::filter::tests::toy;

    #[test]
    fn test_add_twice_increments_single_entry() {
        let blocks = toy(1, "Blocks", 1000, "3-5", "Building");
        let mut cart = Cart::new();

        assert_eq!(cart.add(&blocks), 1);
        assert_eq!(cart.add(&blocks), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(blocks.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_increment_only_touches_existing_entries() {
        let blocks = toy(1, "Blocks", 1000, "3-5", "Building");
        let mut cart = Cart::new();

        assert_eq!(cart.increment(blocks.id), None);
        cart.add(&blocks);
        assert_eq!(cart.increment(blocks.id), Some(2));
    }

    #[test]
    fn test_set_quantity_below_one_removes() {
        let blocks = toy(1, "Blocks", 1000, "3-5", "Building");
        let robot = toy(2, "Robot", 2500, "13+", "STEM");
        let mut cart = Cart::new();
        cart.add(&blocks);
        cart.add(&robot);

        assert!(cart.set_quantity(blocks.id, 0));
        assert!(cart.set_quantity(robot.id, -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_has_no_upper_bound() {
        let blocks = toy(1, "Blocks", 1000, "3-5", "Building");
        let mut cart = Cart::new();
        cart.add(&blocks);

        assert!(cart.set_quantity(blocks.id, 500));
        assert_eq!(cart.totals().item_count, 500);
    }

    #[test]
    fn test_set_quantity_on_missing_entry_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(ToyId::new(9), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_unconditional() {
        let blocks = toy(1, "Blocks", 1000, "3-5", "Building");
        let mut cart = Cart::new();
        cart.add(&blocks);
        cart.add(&blocks);

        assert!(cart.remove(blocks.id));
        assert!(!cart.remove(blocks.id));
    }

    #[test]
    fn test_totals() {
        let blocks = toy(1, "Blocks", 1000, "3-5", "Building");
        let kite = toy(4, "Kite", 899, "8+", "Outdoor");
        let mut cart = Cart::new();
        cart.add(&blocks);
        cart.add(&kite);
        cart.add(&kite);

        let totals = cart.totals();
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total.fixed(), "27.98");
        assert_eq!(Cart::new().totals(), CartTotals::default());
    }

    #[test]
    fn test_snapshot_round_trip_preserves_quantities() {
        let mut cart = Cart::new();
        cart.add(&toy(2, "Robot", 2500, "13+", "STEM"));
        cart.add(&toy(10, "Blocks", 1000, "3-5", "Building"));
        cart.set_quantity(ToyId::new(10), 4);

        let json = cart.to_snapshot().unwrap();
        let restored = Cart::from_snapshot(&json).unwrap();

        assert_eq!(restored.quantities(), cart.quantities());
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_snapshot_shape_is_keyed_by_id() {
        let mut cart = Cart::new();
        cart.add(&toy(5, "Yo-yo", 300, "6+", "Classic"));
        let value: serde_json::Value = serde_json::from_str(&cart.to_snapshot().unwrap()).unwrap();

        assert_eq!(value["5"]["quantity"], 1);
        assert_eq!(value["5"]["toy"]["name"], "Yo-yo");
        assert_eq!(value["5"]["toy"]["ageRange"], "6+");
    }

    #[test]
    fn test_snapshot_drops_zero_quantities() {
        let json = r#"{"5":{"toy":{"id":5,"name":"Yo-yo","price":"3","ageRange":"6+"},"quantity":0}}"#;
        assert!(Cart::from_snapshot(json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_quantity_input() {
        assert_eq!(parse_quantity_input(" 3 "), Some(3));
        assert_eq!(parse_quantity_input("0"), None);
        assert_eq!(parse_quantity_input("-2"), None);
        assert_eq!(parse_quantity_input("two"), None);
        assert_eq!(parse_quantity_input(""), None);
    }
}
