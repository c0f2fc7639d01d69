//! # Cart Snapshots
//!
//! Serializable form of a cart, for the storage layer to save and load.
//!
//! ## Load Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Cart ──snapshot()──► CartSnapshot ──(storage)──► CartSnapshot          │
//! │                                                          │              │
//! │                                                     restore()           │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                     Cart with same ids and handles,     │
//! │                                     every item linked back to it        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Back-references are not stored. They are derived from the cart the items
//! are restored into.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::cart::Cart;
use crate::item::Item;
use crate::types::{CartId, ItemHandle};

/// A stored cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    #[ts(as = "String")]
    pub cart_id: CartId,
    pub customer_id: String,
    pub items: Vec<ItemSnapshot>,
}

/// A stored line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    #[ts(as = "String")]
    pub handle: ItemHandle,
    pub item_id: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl From<&Item> for ItemSnapshot {
    fn from(item: &Item) -> Self {
        ItemSnapshot {
            handle: item.handle(),
            item_id: item.item_id().to_string(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
        }
    }
}

impl From<ItemSnapshot> for Item {
    fn from(snapshot: ItemSnapshot) -> Self {
        Item::with_handle(
            snapshot.handle,
            snapshot.item_id,
            snapshot.quantity,
            snapshot.unit_price,
        )
    }
}

impl Cart {
    /// Captures the cart for storage.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            cart_id: self.id(),
            customer_id: self.customer_id().to_string(),
            items: self.items().iter().map(ItemSnapshot::from).collect(),
        }
    }

    /// Rebuilds a cart from storage.
    ///
    /// Cart id and item handles are kept; every item is linked to the
    /// restored cart. Repeated item ids are folded together as by
    /// [`Cart::add`]. A handle already taken by an earlier item is replaced
    /// with a fresh one, so no two stored items compare equal.
    pub fn restore(snapshot: CartSnapshot) -> Cart {
        let mut cart = Cart::with_id(snapshot.cart_id, snapshot.customer_id);
        let mut seen = HashSet::with_capacity(snapshot.items.len());
        for mut item in snapshot.items {
            if !seen.insert(item.handle) {
                warn!(
                    item_id = %item.item_id,
                    handle = %item.handle,
                    "Duplicate item handle in snapshot, assigning a new one"
                );
                item.handle = ItemHandle::new();
                seen.insert(item.handle);
            }
            cart.add(Item::from(item));
        }
        cart
    }
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        cart.snapshot()
    }
}

impl From<CartSnapshot> for Cart {
    fn from(snapshot: CartSnapshot) -> Self {
        Cart::restore(snapshot)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
