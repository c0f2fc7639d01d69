//! # Validation Module
//!
//! Boundary checks for the API layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: API layer (request handler)                                  │
//! │  ├── Deserialization                                                   │
//! │  └── THIS MODULE: item and limit checks                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart (this crate)                                            │
//! │  └── Accepts any Item; add/update/remove/merge never fail              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use carts_core::validation::check_add;
//! use carts_core::{Cart, CartLimits, Item};
//!
//! let mut cart = Cart::new("123");
//! let item = Item::new("X1", 5, 10.0);
//!
//! check_add(&cart, &item, &CartLimits::default()).unwrap();
//! cart.add(item);
//! ```

use crate::cart::Cart;
use crate::config::CartLimits;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::item::Item;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum product id length.
pub const MAX_ITEM_ID_LEN: usize = 64;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_ITEM_ID_LEN`] characters
///
/// ## Example
/// ```rust
/// use carts_core::validation::validate_item_id;
///
/// assert!(validate_item_id("X1").is_ok());
/// assert!(validate_item_id("  ").is_err());
/// ```
pub fn validate_item_id(item_id: &str) -> ValidationResult<()> {
    let item_id = item_id.trim();

    if item_id.is_empty() {
        return Err(ValidationError::Required {
            field: "item_id".to_string(),
        });
    }

    if item_id.chars().count() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "item_id".to_string(),
            max: MAX_ITEM_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `limits.max_item_quantity`
pub fn validate_quantity(qty: i64, limits: &CartLimits) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > limits.max_item_quantity {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: limits.max_item_quantity,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed for free items)
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "unit_price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates every field of an item.
pub fn validate_item(item: &Item, limits: &CartLimits) -> ValidationResult<()> {
    validate_item_id(item.item_id())?;
    validate_quantity(item.quantity(), limits)?;
    validate_unit_price(item.unit_price())
}

// =============================================================================
// Cart Checks
// =============================================================================

/// Checks that `cart.add(item)` would stay within `limits`.
///
/// ## Rules
/// - `item` passes [`validate_item`]
/// - A new line must not push the cart past `max_items`
/// - The summed quantity of an existing line must not exceed
///   `max_item_quantity`
pub fn check_add(cart: &Cart, item: &Item, limits: &CartLimits) -> CoreResult<()> {
    validate_item(item, limits)?;

    match cart.get_item(item.item_id()) {
        Some(existing) => {
            let too_large = |requested| CoreError::QuantityTooLarge {
                item_id: item.item_id().to_string(),
                requested,
                max: limits.max_item_quantity,
            };
            let requested = existing
                .quantity()
                .checked_add(item.quantity())
                .ok_or_else(|| too_large(i64::MAX))?;
            if requested > limits.max_item_quantity {
                return Err(too_large(requested));
            }
        }
        None => {
            if cart.len() >= limits.max_items {
                return Err(CoreError::CartTooLarge {
                    max: limits.max_items,
                });
            }
        }
    }

    Ok(())
}

/// Checks that `cart.update(item)` would stay within `limits`.
///
/// Same as [`check_add`] except the quantity replaces rather than adds.
pub fn check_update(cart: &Cart, item: &Item, limits: &CartLimits) -> CoreResult<()> {
    validate_item(item, limits)?;

    if cart.get_item(item.item_id()).is_none() && cart.len() >= limits.max_items {
        return Err(CoreError::CartTooLarge {
            max: limits.max_items,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
