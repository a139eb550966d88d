//! Table transfer operations
//!
//! Pure computations of the effect of reassigning a table's order across
//! tables. Each action validates its preconditions against the source
//! order and the live table list, then returns a [`TransferOutcome`]
//! describing the new item partition. Nothing here persists anything;
//! persistence belongs to the backend collaborator.
//!
//! Every precondition is re-checked inside `execute`, regardless of what
//! the UI disabled client-side. A confirmation built from stale screen
//! state fails with a typed [`TransferError`] instead of producing a bad
//! partition.

mod join_tables;
mod move_table;
mod split_table;

pub use join_tables::JoinTablesAction;
pub use move_table::MoveTableAction;
pub use split_table::{SplitSelection, SplitTableAction};

use shared::models::{DiningTable, TableStatus};
use shared::order::CartItem;

/// Transfer precondition failures
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("target table {0} is the source table")]
    SameTable(u32),

    #[error("table {0} does not exist")]
    UnknownTable(u32),

    #[error("table {table} is not empty ({status:?})")]
    TargetNotEmpty { table: u32, status: TableStatus },

    #[error("table {0} has no order to join")]
    TargetNotOccupied(u32),

    #[error("no target table selected")]
    NoTargetSelected,

    #[error("no items selected")]
    NoItemsSelected,

    #[error("item {0} is not part of the order")]
    UnknownItem(String),

    #[error("split quantity {requested} for item {item_id} outside [0, {available}]")]
    QuantityOutOfBounds {
        item_id: String,
        requested: i32,
        available: i32,
    },
}

/// Result of a transfer computation
#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutcome {
    /// The whole order relocated; the source table becomes empty
    Moved {
        source_table: u32,
        target_table: u32,
        items: Vec<CartItem>,
        guest_count: u32,
        guest_type: String,
    },
    /// Target tables' orders merged under the source table identity
    Joined {
        source_table: u32,
        absorbed_tables: Vec<u32>,
        items: Vec<CartItem>,
    },
    /// Selected quantities split off to the target; remainder stays
    Split {
        source_table: u32,
        target_table: u32,
        remaining: Vec<CartItem>,
        moved: Vec<CartItem>,
    },
}

impl TransferOutcome {
    /// Human-readable confirmation line for the notification sink
    pub fn message(&self) -> String {
        match self {
            TransferOutcome::Moved {
                source_table,
                target_table,
                ..
            } => format!("Order moved from table {source_table} to table {target_table}"),
            TransferOutcome::Joined {
                source_table,
                absorbed_tables,
                ..
            } => {
                let joined: Vec<String> =
                    absorbed_tables.iter().map(|t| t.to_string()).collect();
                format!(
                    "Table {} joined with table {}",
                    source_table,
                    joined.join(", ")
                )
            }
            TransferOutcome::Split {
                source_table,
                target_table,
                moved,
                ..
            } => {
                let quantity: i32 = moved.iter().map(|i| i.quantity).sum();
                format!(
                    "{quantity} item(s) split from table {source_table} to table {target_table}"
                )
            }
        }
    }
}

/// Look up a transfer target and require it to be an empty table.
fn require_empty_target(
    source_table: u32,
    target_table: u32,
    tables: &[DiningTable],
) -> Result<&DiningTable, TransferError> {
    if target_table == source_table {
        return Err(TransferError::SameTable(target_table));
    }
    let target = tables
        .iter()
        .find(|t| t.number == target_table)
        .ok_or(TransferError::UnknownTable(target_table))?;
    if target.status != TableStatus::Empty {
        return Err(TransferError::TargetNotEmpty {
            table: target_table,
            status: target.status,
        });
    }
    Ok(target)
}

#[cfg(test)]
pub(crate) mod test_support {
    use shared::models::{AddOn, DiningTable, MenuItem, TableStatus};
    use shared::order::{CartItem, TableOrder};

    pub fn table(number: u32, status: TableStatus) -> DiningTable {
        DiningTable {
            id: format!("t{number}"),
            number,
            name: format!("Meja {number}"),
            status,
            capacity: 4,
            zone: "Main".to_string(),
            floor: "1".to_string(),
            customer: None,
            pax: 0,
            customer_type: None,
            taken_by: None,
            invoice_id: None,
        }
    }

    pub fn floor_plan() -> Vec<DiningTable> {
        vec![
            table(1, TableStatus::Empty),
            table(2, TableStatus::Empty),
            table(3, TableStatus::Occupied),
            table(5, TableStatus::Served),
            table(7, TableStatus::Billing),
            table(8, TableStatus::Ordered),
        ]
    }

    pub fn menu_item(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            category: "Mains".to_string(),
            add_ons: vec![AddOn {
                id: format!("{id}-ao"),
                name: "Sambal".to_string(),
                price: 1.5,
            }],
        }
    }

    pub fn line(item_id: &str, name: &str, price: f64, quantity: i32, notes: &str) -> CartItem {
        CartItem::new(menu_item(item_id, name, price), vec![], notes, quantity).unwrap()
    }

    pub fn order_at(table_number: u32, items: Vec<CartItem>) -> TableOrder {
        TableOrder {
            table_number,
            items,
            guest_count: 3,
            guest_type: "regular".to_string(),
            created_at: 1_700_000_000_000,
        }
    }
}
