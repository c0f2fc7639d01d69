//! # Item
//!
//! One product line: product id, quantity and unit price, plus a
//! back-reference to the cart that currently holds it.
//!
//! ## Lifecycle
//! ```text
//! Item::new("X1", 5, 10.0)          cart() == None   (standalone)
//!      │
//!      ▼
//! cart.add(item) ──┬── absent  ──► stored, cart() == Some(cart.id())
//!                  │
//!                  └── present ──► quantity folded into the stored item,
//!                                  this value is dropped unlinked
//! ```

use crate::types::{CartId, ItemHandle};

/// A line item.
///
/// ## Equality
/// `PartialEq` compares instance identity ([`ItemHandle`]), not field
/// values. After `add` or `merge` this tells apart the item that was kept
/// from an equal-looking one that was discarded.
#[derive(Debug)]
pub struct Item {
    handle: ItemHandle,
    item_id: String,
    quantity: i64,
    unit_price: f64,
    cart: Option<CartId>,
}

impl Item {
    /// Creates a standalone item (no owning cart).
    pub fn new(item_id: impl Into<String>, quantity: i64, unit_price: f64) -> Self {
        Item {
            handle: ItemHandle::new(),
            item_id: item_id.into(),
            quantity,
            unit_price,
            cart: None,
        }
    }

    /// Rebuilds an item with a known identity, e.g. from a snapshot.
    pub(crate) fn with_handle(
        handle: ItemHandle,
        item_id: String,
        quantity: i64,
        unit_price: f64,
    ) -> Self {
        Item {
            handle,
            item_id,
            quantity,
            unit_price,
            cart: None,
        }
    }

    #[inline]
    pub fn handle(&self) -> ItemHandle {
        self.handle
    }

    #[inline]
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// The cart holding this item, if any.
    #[inline]
    pub fn cart(&self) -> Option<CartId> {
        self.cart
    }

    /// Sets the back-reference.
    ///
    /// This does not insert the item anywhere. Cart operations keep the two
    /// sides consistent.
    #[inline]
    pub fn set_cart(&mut self, cart: Option<CartId>) {
        self.cart = cart;
    }

    /// Quantity × unit price.
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }

    /// Saturates at `i64::MAX` / `i64::MIN` rather than overflowing.
    pub(crate) fn add_quantity(&mut self, quantity: i64) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    pub(crate) fn overwrite(&mut self, quantity: i64, unit_price: f64) {
        self.quantity = quantity;
        self.unit_price = unit_price;
    }

    pub(crate) fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Item {}

// =============================================================================
// Unit Tests
// =============================================================================
