//! # carts-core: Shopping Cart Model
//!
//! A cart is an owner (customer) id plus a collection of line items. This
//! crate holds the rules for reconciling duplicate items: `add` sums,
//! `update` overwrites, `merge` moves or sums.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    API layer (external)                        │   │
//! │  │    add item, update item, remove item, merge carts            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ carts-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   item    │  │ snapshot  │  │ validation│  │   │
//! │  │   │   Cart    │  │   Item    │  │  storage  │  │   limits  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Storage layer (external)                        │   │
//! │  │          saves / loads CartSnapshot by customer id              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart and its operations
//! - [`item`] - Item (line item)
//! - [`types`] - Cart and item identities
//! - [`snapshot`] - Serializable form for storage
//! - [`validation`] - Boundary checks for the API layer
//! - [`config`] - Limits used by validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use carts_core::{Cart, Item};
//!
//! let mut source = Cart::new("guest");
//! source.add(Item::new("X1", 5, 10.0));
//!
//! let mut cart = Cart::new("123");
//! cart.add(Item::new("X1", 1, 10.0));
//! cart.merge(source);
//!
//! assert_eq!(cart.get_item("X1").map(|i| i.quantity()), Some(6));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod error;
pub mod item;
pub mod snapshot;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use config::CartLimits;
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::Item;
pub use snapshot::{CartSnapshot, ItemSnapshot};
pub use types::{CartId, ItemHandle};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum of unique items in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Default maximum quantity of a single line.
pub const MAX_ITEM_QUANTITY: i64 = 999;
