//! # Cart
//!
//! The item collection for one customer.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation        Item absent               Item present               │
//! │  ─────────        ───────────               ────────────               │
//! │                                                                         │
//! │  add(item)        insert, link              qty += item.qty            │
//! │                                             price = item.price         │
//! │                                                                         │
//! │  update(item)     insert, link              qty = item.qty             │
//! │                                             price = item.price         │
//! │                                                                         │
//! │  remove(id)       no-op                     drop from cart             │
//! │                                                                         │
//! │  merge(source)    move source item in,      qty += source.qty          │
//! │                   relink to this cart                                   │
//! │                                                                         │
//! │  In every "present" case the stored item keeps its identity.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `item_id`
//! - Every stored item has `cart() == Some(self.id())`
//! - Insertion order is preserved
//!
//! Nothing here validates quantities or prices. See [`crate::validation`]
//! for checks an API layer can run first.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::item::Item;
use crate::types::CartId;

/// A customer's shopping cart.
#[derive(Debug)]
pub struct Cart {
    id: CartId,
    customer_id: String,
    items: Vec<Item>,
}

impl Cart {
    /// Creates an empty cart for `customer_id`.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Cart::with_id(CartId::new(), customer_id.into())
    }

    pub(crate) fn with_id(id: CartId, customer_id: String) -> Self {
        Cart {
            id,
            customer_id,
            items: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> CartId {
        self.id
    }

    #[inline]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by product id. `None` if absent.
    pub fn get_item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.item_id() == item_id)
    }

    fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.item_id() == item_id)
    }

    fn insert(&mut self, mut item: Item) -> &Item {
        item.set_cart(Some(self.id));
        self.items.push(item);
        let idx = self.items.len() - 1;
        &self.items[idx]
    }

    /// Adds an item, summing quantities with an existing line.
    ///
    /// ## Behavior
    /// - If the product is not in the cart: `item` is stored and linked
    /// - If it is: the stored item's quantity grows by `item.quantity()` and
    ///   takes `item`'s unit price; `item` itself is dropped unlinked
    ///
    /// Returns the stored item.
    pub fn add(&mut self, item: Item) -> &Item {
        debug!(
            customer_id = %self.customer_id,
            item_id = %item.item_id(),
            quantity = item.quantity(),
            "cart add"
        );

        match self.position(item.item_id()) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.add_quantity(item.quantity());
                existing.set_unit_price(item.unit_price());
                &self.items[idx]
            }
            None => self.insert(item),
        }
    }

    /// Adds or overwrites an item.
    ///
    /// ## Behavior
    /// - If the product is not in the cart: same as [`Cart::add`]
    /// - If it is: the stored item's quantity and unit price are replaced by
    ///   `item`'s (not summed); the stored item keeps its identity
    pub fn update(&mut self, item: Item) -> &Item {
        debug!(
            customer_id = %self.customer_id,
            item_id = %item.item_id(),
            quantity = item.quantity(),
            "cart update"
        );

        match self.position(item.item_id()) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.overwrite(item.quantity(), item.unit_price());
                &self.items[idx]
            }
            None => self.insert(item),
        }
    }

    /// Removes an item by product id.
    ///
    /// Returns the removed item, now standalone, or `None` if the product was
    /// not in the cart. Calling it twice is safe.
    pub fn remove(&mut self, item_id: &str) -> Option<Item> {
        let idx = self.position(item_id)?;
        let mut item = self.items.remove(idx);
        item.set_cart(None);

        debug!(customer_id = %self.customer_id, item_id = %item_id, "cart remove");
        Some(item)
    }

    /// Merges `source` into this cart, consuming it.
    ///
    /// ## Behavior
    /// For each source item, in source order:
    /// - product absent here: the item itself moves into this cart and is
    ///   relinked, so its identity carries over
    /// - product present here: its quantity is added to the stored item; the
    ///   source item's price is discarded
    ///
    /// The source cart is consumed, not left intact with its collection: its
    /// items either move here or are folded in, so no item is reachable from
    /// two carts.
    /// Callers that need the source's contents afterwards should take a
    /// [`Cart::snapshot`] first.
    pub fn merge(&mut self, source: Cart) {
        debug!(
            customer_id = %self.customer_id,
            source_customer_id = %source.customer_id,
            source_items = source.items.len(),
            "cart merge"
        );

        for item in source.items {
            match self.position(item.item_id()) {
                Some(idx) => self.items[idx].add_quantity(item.quantity()),
                None => {
                    self.insert(item);
                }
            }
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of unique items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .map(Item::quantity)
            .fold(0i64, i64::saturating_add)
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(Item::line_total).sum()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: f64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new("123");
        assert_eq!(cart.customer_id(), "123");
        assert!(cart.items().is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_item_addition() {
        init_tracing();
        let mut cart = Cart::new("123");
        let x1 = Item::new("X1", 5, 10.0);
        let x2 = Item::new("X2", 3, 5.99);
        let (x1_handle, x2_handle) = (x1.handle(), x2.handle());

        cart.add(x1);
        cart.add(x2);

        assert_eq!(cart.len(), 2);
        let stored = cart.get_item("X1").unwrap();
        assert_eq!(stored.handle(), x1_handle);
        assert_eq!(stored.cart(), Some(cart.id()));
        let stored = cart.get_item("X2").unwrap();
        assert_eq!(stored.handle(), x2_handle);
        assert_eq!(stored.cart(), Some(cart.id()));

        let again = Item::new("X1", 5, 10.0);
        let again_handle = again.handle();
        cart.add(again);

        assert_eq!(cart.len(), 2);
        let stored = cart.get_item("X1").unwrap();
        assert_eq!(stored.quantity(), 10);
        assert_eq!(stored.handle(), x1_handle);
        assert_ne!(stored.handle(), again_handle);
    }

    #[test]
    fn test_add_existing_takes_new_price() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", 1, 10.0));
        let stored = cart.add(Item::new("X1", 2, 12.5));

        assert_eq!(stored.quantity(), 3);
        assert_eq!(stored.unit_price(), 12.5);
    }

    #[test]
    fn test_add_is_not_idempotent() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", 2, 1.0));
        cart.add(Item::new("X1", 2, 1.0));
        cart.add(Item::new("X1", 2, 1.0));

        assert_eq!(cart.get_item("X1").unwrap().quantity(), 6);
    }

    #[test]
    fn test_item_update() {
        let mut cart = Cart::new("123");
        let x1 = Item::new("X1", 5, 10.0);
        let x2 = Item::new("X2", 3, 5.99);
        let (x1_handle, x2_handle) = (x1.handle(), x2.handle());

        cart.update(x1);
        cart.update(x2);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get_item("X1").unwrap().handle(), x1_handle);
        assert_eq!(cart.get_item("X1").unwrap().cart(), Some(cart.id()));
        assert_eq!(cart.get_item("X2").unwrap().handle(), x2_handle);
        assert_eq!(cart.get_item("X2").unwrap().cart(), Some(cart.id()));

        cart.update(Item::new("X1", 5, 10.0));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get_item("X1").unwrap().quantity(), 5);
    }

    #[test]
    fn test_update_overwrites_rather_than_sums() {
        let mut cart = Cart::new("123");
        let x1 = Item::new("X1", 5, 10.0);
        let x1_handle = x1.handle();
        cart.add(x1);

        let stored = cart.update(Item::new("X1", 2, 8.0));

        assert_eq!(stored.quantity(), 2);
        assert_eq!(stored.unit_price(), 8.0);
        assert_eq!(stored.handle(), x1_handle);
    }

    #[test]
    fn test_item_removal() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", 5, 10.0));
        cart.add(Item::new("X2", 3, 5.99));
        assert_eq!(cart.len(), 2);

        let removed = cart.remove("X1").unwrap();
        assert_eq!(removed.item_id(), "X1");
        assert_eq!(removed.cart(), None);
        assert_eq!(cart.len(), 1);
        assert!(cart.get_item("X1").is_none());
    }

    #[test]
    fn test_remove_absent_keeps_len() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", 5, 10.0));
        cart.add(Item::new("X2", 3, 5.99));

        assert!(cart.remove("missing").is_none());
        assert_eq!(cart.len(), 2);
        assert!(cart.get_item("X1").is_some());
        assert!(cart.get_item("X2").is_some());
    }

    #[test]
    fn test_add_saturates_quantity() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", i64::MAX, 1.0));
        cart.add(Item::new("X1", 1, 1.0));
        cart.add(Item::new("X2", 1, 1.0));

        assert_eq!(cart.get_item("X1").unwrap().quantity(), i64::MAX);
        assert_eq!(cart.total_quantity(), i64::MAX);
    }

    #[test]
    fn test_merge_saturates_quantity() {
        let mut source = Cart::new("456");
        source.add(Item::new("X1", 1, 1.0));

        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", i64::MAX, 1.0));
        cart.merge(source);

        assert_eq!(cart.get_item("X1").unwrap().quantity(), i64::MAX);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", 5, 10.0));

        assert!(cart.remove("X1").is_some());
        assert!(cart.remove("X1").is_none());
        assert!(cart.remove("missing").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_get_item_miss_is_none() {
        let cart = Cart::new("123");
        assert!(cart.get_item("X1").is_none());
    }

    #[test]
    fn test_cart_merge() {
        init_tracing();
        let mut source = Cart::new("456");
        let s1 = Item::new("X1", 5, 10.0);
        let s2 = Item::new("X2", 3, 5.99);
        let s1_handle = s1.handle();
        source.add(s1);
        source.add(s2);

        let mut cart = Cart::new("123");
        let t1 = Item::new("X2", 3, 5.99);
        let t2 = Item::new("X3", 1, 20.0);
        let (t1_handle, t2_handle) = (t1.handle(), t2.handle());
        cart.add(t1);
        cart.add(t2);

        cart.merge(source);

        assert_eq!(cart.len(), 3);

        let x1 = cart.get_item("X1").unwrap();
        assert_eq!(x1.handle(), s1_handle);
        assert_eq!(x1.cart(), Some(cart.id()));

        let x2 = cart.get_item("X2").unwrap();
        assert_eq!(x2.quantity(), 6);
        assert_eq!(x2.handle(), t1_handle);

        let x3 = cart.get_item("X3").unwrap();
        assert_eq!(x3.handle(), t2_handle);
        assert_eq!(x3.quantity(), 1);
    }

    #[test]
    fn test_merge_keeps_destination_price() {
        let mut source = Cart::new("456");
        source.add(Item::new("X2", 1, 99.0));

        let mut cart = Cart::new("123");
        cart.add(Item::new("X2", 1, 5.0));
        cart.merge(source);

        assert_eq!(cart.get_item("X2").unwrap().unit_price(), 5.0);
    }

    #[test]
    fn test_every_item_links_to_its_cart() {
        let mut source = Cart::new("456");
        source.add(Item::new("A", 1, 1.0));
        source.add(Item::new("B", 1, 1.0));

        let mut cart = Cart::new("123");
        cart.update(Item::new("B", 4, 1.0));
        cart.add(Item::new("C", 1, 1.0));
        cart.merge(source);

        assert!(cart.items().iter().all(|i| i.cart() == Some(cart.id())));
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("B", 1, 1.0));
        cart.add(Item::new("A", 1, 1.0));
        cart.add(Item::new("C", 1, 1.0));
        cart.add(Item::new("A", 1, 1.0));

        let ids: Vec<&str> = cart.items().iter().map(Item::item_id).collect();
        assert_eq!(ids, ["B", "A", "C"]);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", 2, 10.0));
        cart.add(Item::new("X2", 3, 1.5));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 5);
        assert!((totals.subtotal - 24.5).abs() < 1e-9);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new("123");
        cart.add(Item::new("X1", 2, 10.0));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.customer_id(), "123");
    }
}
