//! # Identity Types
//!
//! Opaque identities for carts and items.
//!
//! ## Dual-Key Identity Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Identity vs Business Key                        │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │        Cart         │            │        Item         │            │
//! │  │  ─────────────────  │            │  ─────────────────  │            │
//! │  │  id: CartId (UUID)  │◄───────────│  cart: CartId       │            │
//! │  │  customer_id        │            │  handle: ItemHandle │            │
//! │  └─────────────────────┘            │  item_id (product)  │            │
//! │                                     └─────────────────────┘            │
//! │                                                                         │
//! │  Business keys (customer_id, item_id) say WHAT a value is.             │
//! │  Handles (CartId, ItemHandle) say WHICH instance it is.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An item's back-reference to its cart is a `CartId` value, never a pointer,
//! so there is no ownership cycle between a cart and its items.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Cart Identity
// =============================================================================

/// Identity of one cart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

impl CartId {
    /// Generates a fresh identity (UUID v4).
    pub fn new() -> Self {
        CartId(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one loaded from storage.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        CartId(uuid)
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CartId {
    fn default() -> Self {
        CartId::new()
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Item Identity
// =============================================================================

/// Identity of one item instance.
///
/// Two items with the same product id, quantity and price are still different
/// items unless their handles match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemHandle(Uuid);

impl ItemHandle {
    /// Generates a fresh identity (UUID v4).
    pub fn new() -> Self {
        ItemHandle(Uuid::new_v4())
    }

    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        ItemHandle(uuid)
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemHandle {
    fn default() -> Self {
        ItemHandle::new()
    }
}

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
