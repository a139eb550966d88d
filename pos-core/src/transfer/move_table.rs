//! MoveTable action
//!
//! Relocates a table's entire order, guest count and guest type to an
//! empty target table. No partial move; the source becomes empty.

use shared::models::DiningTable;
use shared::order::TableOrder;

use super::{require_empty_target, TransferError, TransferOutcome};

/// MoveTable action
#[derive(Debug, Clone)]
pub struct MoveTableAction {
    pub source_table: u32,
    pub target_table: u32,
}

impl MoveTableAction {
    pub fn execute(
        &self,
        order: &TableOrder,
        tables: &[DiningTable],
    ) -> Result<TransferOutcome, TransferError> {
        // 1. Target must be a distinct empty table
        require_empty_target(self.source_table, self.target_table, tables)?;

        // 2. Whole order relocates
        Ok(TransferOutcome::Moved {
            source_table: self.source_table,
            target_table: self.target_table,
            items: order.items.clone(),
            guest_count: order.guest_count,
            guest_type: order.guest_type.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::test_support::{floor_plan, line, order_at};
    use shared::models::TableStatus;

    #[test]
    fn test_move_to_empty_table() {
        let order = order_at(3, vec![line("m1", "Nasi Goreng", 9.0, 2, "")]);
        let action = MoveTableAction {
            source_table: 3,
            target_table: 2,
        };

        let outcome = action.execute(&order, &floor_plan()).unwrap();

        match &outcome {
            TransferOutcome::Moved {
                source_table,
                target_table,
                items,
                guest_count,
                guest_type,
            } => {
                assert_eq!(*source_table, 3);
                assert_eq!(*target_table, 2);
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].quantity, 2);
                assert_eq!(*guest_count, 3);
                assert_eq!(guest_type, "regular");
            }
            other => panic!("expected Moved, got {other:?}"),
        }
        assert_eq!(outcome.message(), "Order moved from table 3 to table 2");
    }

    #[test]
    fn test_move_to_source_table_fails() {
        let order = order_at(3, vec![]);
        let action = MoveTableAction {
            source_table: 3,
            target_table: 3,
        };
        assert_eq!(
            action.execute(&order, &floor_plan()),
            Err(TransferError::SameTable(3))
        );
    }

    #[test]
    fn test_move_to_unknown_table_fails() {
        let order = order_at(3, vec![]);
        let action = MoveTableAction {
            source_table: 3,
            target_table: 42,
        };
        assert_eq!(
            action.execute(&order, &floor_plan()),
            Err(TransferError::UnknownTable(42))
        );
    }

    #[test]
    fn test_move_to_occupied_table_fails() {
        let order = order_at(3, vec![]);
        for occupied in [5u32, 7, 8] {
            let action = MoveTableAction {
                source_table: 3,
                target_table: occupied,
            };
            let err = action.execute(&order, &floor_plan()).unwrap_err();
            assert!(
                matches!(err, TransferError::TargetNotEmpty { table, .. } if table == occupied),
                "table {occupied}: {err:?}"
            );
        }
    }

    #[test]
    fn test_move_reports_target_status() {
        let order = order_at(3, vec![]);
        let action = MoveTableAction {
            source_table: 3,
            target_table: 7,
        };
        assert_eq!(
            action.execute(&order, &floor_plan()),
            Err(TransferError::TargetNotEmpty {
                table: 7,
                status: TableStatus::Billing,
            })
        );
    }
}
