//! Cart and table-order types
//!
//! A [`CartItem`] is one configured line of an order: a menu item with a
//! chosen quantity, a subset of the item's add-ons and a free-text note.
//! Two additions of the same configuration stay as two separate lines;
//! line identity is a fresh UUID, never derived from the menu item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AddOn, MenuItem};
use crate::money;

/// Cart construction errors
///
/// Only raised when building a line; mutating an existing cart by an
/// unknown line id is a silent no-op, not an error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),

    #[error("add-on {0} does not belong to the menu item")]
    UnknownAddOn(String),

    #[error("add-on {0} selected more than once")]
    DuplicateAddOn(String),
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Line id, unique per cart entry (UUID v4)
    pub id: String,
    /// Catalog entry this line was configured from
    pub menu_item: MenuItem,
    /// Quantity, always >= 1 (a line that reaches 0 is removed)
    pub quantity: i32,
    /// Selected add-ons, each a member of `menu_item.add_ons`
    pub selected_add_ons: Vec<AddOn>,
    /// Free-text kitchen note
    #[serde(default)]
    pub notes: String,
}

impl CartItem {
    /// Build a new line, validating quantity and add-on membership.
    ///
    /// Every selected add-on must belong to the menu item's add-on set
    /// and may be selected at most once.
    pub fn new(
        menu_item: MenuItem,
        add_ons: Vec<AddOn>,
        notes: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        for (idx, add_on) in add_ons.iter().enumerate() {
            if !menu_item.add_ons.iter().any(|a| a.id == add_on.id) {
                return Err(CartError::UnknownAddOn(add_on.id.clone()));
            }
            if add_ons[..idx].iter().any(|a| a.id == add_on.id) {
                return Err(CartError::DuplicateAddOn(add_on.id.clone()));
            }
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            menu_item,
            quantity,
            selected_add_ons: add_ons,
            notes: notes.into(),
        })
    }

    /// Per-unit price including add-ons
    pub fn unit_price(&self) -> Decimal {
        money::item_unit_price(self)
    }

    /// Line total: unit price times quantity
    pub fn line_total(&self) -> Decimal {
        money::item_line_total(self)
    }

    /// Copy of this line with a different quantity, same identity.
    ///
    /// Used by the split operation to carry add-ons and notes over
    /// unchanged while partitioning the quantity.
    pub fn with_quantity(&self, quantity: i32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// A table's committed order, as loaded from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOrder {
    pub table_number: u32,
    /// Ordered sequence of committed lines
    pub items: Vec<CartItem>,
    pub guest_count: u32,
    /// Guest type id (see [`crate::models::GuestType`])
    pub guest_type: String,
    /// Creation timestamp, unix millis
    pub created_at: i64,
}

impl TableOrder {
    /// Total over all committed lines
    pub fn total(&self) -> Decimal {
        money::items_total(&self.items)
    }

    /// Look up a line by id
    pub fn item(&self, item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == item_id)
    }
}
