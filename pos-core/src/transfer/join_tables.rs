//! JoinTables action
//!
//! Merges one or more occupied tables' orders into the source table.
//! The merged items keep the source table identity; absorbed tables are
//! left to be cleared by the persistence collaborator.

use shared::models::DiningTable;
use shared::order::{CartItem, TableOrder};

use super::{TransferError, TransferOutcome};

/// JoinTables action
#[derive(Debug, Clone)]
pub struct JoinTablesAction {
    pub source_table: u32,
    /// Tables whose orders merge into the source, in selection order
    pub target_tables: Vec<u32>,
}

impl JoinTablesAction {
    /// Whether the confirmation control may be enabled
    pub fn can_confirm(&self) -> bool {
        !self.target_tables.is_empty()
    }

    pub fn execute(
        &self,
        source_order: &TableOrder,
        target_orders: &[TableOrder],
        tables: &[DiningTable],
    ) -> Result<TransferOutcome, TransferError> {
        // 1. At least one target selected
        if self.target_tables.is_empty() {
            return Err(TransferError::NoTargetSelected);
        }

        // 2. Each target must be a distinct, occupied table
        for &target in &self.target_tables {
            if target == self.source_table {
                return Err(TransferError::SameTable(target));
            }
            let table = tables
                .iter()
                .find(|t| t.number == target)
                .ok_or(TransferError::UnknownTable(target))?;
            if !table.status.is_occupied() {
                return Err(TransferError::TargetNotOccupied(target));
            }
        }

        // 3. Merge items under the source identity, source lines first,
        //    then each absorbed table in selection order. A target that
        //    is occupied but has not ordered yet contributes nothing.
        let mut items: Vec<CartItem> = source_order.items.clone();
        for &target in &self.target_tables {
            if let Some(order) = target_orders.iter().find(|o| o.table_number == target) {
                items.extend(order.items.iter().cloned());
            }
        }

        Ok(TransferOutcome::Joined {
            source_table: self.source_table,
            absorbed_tables: self.target_tables.clone(),
            items,
        })
    }
}
