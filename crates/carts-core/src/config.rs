//! # Cart Limits Configuration
//!
//! Limits used by the boundary checks in [`crate::validation`].
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CARTS_MAX_ITEMS=50                                                 │
//! │     CARTS_MAX_ITEM_QUANTITY=20                                         │
//! │                                                                         │
//! │  2. Embedding service config (deserialized CartLimits)                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     MAX_CART_ITEMS, MAX_ITEM_QUANTITY                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Environment variable overriding [`CartLimits::max_items`].
pub const ENV_MAX_ITEMS: &str = "CARTS_MAX_ITEMS";

/// Environment variable overriding [`CartLimits::max_item_quantity`].
pub const ENV_MAX_ITEM_QUANTITY: &str = "CARTS_MAX_ITEM_QUANTITY";

/// Limits applied at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartLimits {
    /// Maximum unique items per cart.
    pub max_items: usize,

    /// Maximum quantity of a single line.
    pub max_item_quantity: i64,
}

impl Default for CartLimits {
    fn default() -> Self {
        CartLimits {
            max_items: MAX_CART_ITEMS,
            max_item_quantity: MAX_ITEM_QUANTITY,
        }
    }
}

impl CartLimits {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` on top of `self`.
    ///
    /// Values that do not parse (or are zero) are logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(max) = parse_positive::<usize>(&lookup, ENV_MAX_ITEMS) {
            self.max_items = max;
        }
        if let Some(max) = parse_positive::<i64>(&lookup, ENV_MAX_ITEM_QUANTITY) {
            self.max_item_quantity = max;
        }

        debug!(
            max_items = self.max_items,
            max_item_quantity = self.max_item_quantity,
            "Cart limits resolved"
        );
        self
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Some(value),
        _ => {
            warn!(key = %key, value = %raw, "Ignoring invalid cart limit override");
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
