//! SplitTable action
//!
//! Splits selected quantities off a table's order onto an empty target
//! table. [`SplitSelection`] models the per-item quantity picker: a tap
//! cycles `0 -> 1 -> ... -> max -> 0`, the +/- controls clamp to
//! `[0, quantity]`. The action re-validates every bound on execute.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::models::DiningTable;
use shared::order::{CartItem, TableOrder};

use super::{require_empty_target, TransferError, TransferOutcome};

/// Per-item split quantities, keyed by cart line id
///
/// Only positive quantities are stored; an item absent from the map has
/// split quantity 0 and is excluded from the target entirely.
#[derive(Debug, Clone, Default)]
pub struct SplitSelection {
    quantities: BTreeMap<String, i32>,
}

impl SplitSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tap cycle: 0 -> 1, then +1 up to `max_quantity`, then back to 0.
    pub fn toggle(&mut self, item_id: &str, max_quantity: i32) {
        let current = self.quantity(item_id);
        if current == 0 {
            self.quantities.insert(item_id.to_string(), 1);
        } else if current < max_quantity {
            self.quantities.insert(item_id.to_string(), current + 1);
        } else {
            self.quantities.remove(item_id);
        }
    }

    /// Adjust by `delta`, clamped to `[0, max_quantity]`.
    pub fn adjust(&mut self, item_id: &str, delta: i32, max_quantity: i32) {
        let next = (self.quantity(item_id) + delta).clamp(0, max_quantity);
        if next == 0 {
            self.quantities.remove(item_id);
        } else {
            self.quantities.insert(item_id.to_string(), next);
        }
    }

    /// Split quantity for an item (0 when unselected)
    pub fn quantity(&self, item_id: &str) -> i32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Total quantity selected across all items
    pub fn total_quantity(&self) -> i32 {
        self.quantities.values().sum()
    }

    /// Monetary value of the selection against an order
    pub fn split_amount(&self, order: &TableOrder) -> Decimal {
        self.quantities
            .iter()
            .filter_map(|(id, qty)| order.item(id).map(|item| item.unit_price() * Decimal::from(*qty)))
            .sum()
    }

    fn entries(&self) -> impl Iterator<Item = (&str, i32)> {
        self.quantities.iter().map(|(id, qty)| (id.as_str(), *qty))
    }
}

/// SplitTable action
#[derive(Debug, Clone)]
pub struct SplitTableAction {
    pub source_table: u32,
    pub target_table: u32,
    pub selection: SplitSelection,
}

impl SplitTableAction {
    /// Whether the confirmation control may be enabled: a target table
    /// plus at least one item with split quantity > 0.
    pub fn can_confirm(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn execute(
        &self,
        order: &TableOrder,
        tables: &[DiningTable],
    ) -> Result<TransferOutcome, TransferError> {
        // 1. Target must be a distinct empty table
        require_empty_target(self.source_table, self.target_table, tables)?;

        // 2. At least one positive split quantity
        if self.selection.is_empty() {
            return Err(TransferError::NoItemsSelected);
        }

        // 3. Every selected id must name an order line, every quantity
        //    must stay within [0, line quantity]
        for (item_id, qty) in self.selection.entries() {
            let item = order
                .item(item_id)
                .ok_or_else(|| TransferError::UnknownItem(item_id.to_string()))?;
            if qty < 0 || qty > item.quantity {
                return Err(TransferError::QuantityOutOfBounds {
                    item_id: item_id.to_string(),
                    requested: qty,
                    available: item.quantity,
                });
            }
        }

        // 4. Partition. Add-ons and notes carry over unchanged on both
        //    sides; a line split at full quantity leaves no remainder,
        //    remainder = original - split, never negative.
        let mut moved = Vec::new();
        let mut remaining = Vec::new();
        for item in &order.items {
            let split_qty = self.selection.quantity(&item.id);
            if split_qty > 0 {
                moved.push(item.with_quantity(split_qty));
            }
            let remainder = item.quantity - split_qty;
            if remainder > 0 {
                remaining.push(item.with_quantity(remainder));
            }
        }

        Ok(TransferOutcome::Split {
            source_table: self.source_table,
            target_table: self.target_table,
            remaining,
            moved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::test_support::{floor_plan, menu_item, order_at};
    use shared::money::to_f64;
    use shared::order::CartItem;

    fn split_order() -> TableOrder {
        let sambal = menu_item("m1", "Nasi Goreng", 9.0).add_ons[0].clone();
        order_at(
            3,
            vec![
                CartItem::new(menu_item("m1", "Nasi Goreng", 9.0), vec![sambal], "pedas", 3)
                    .unwrap(),
                CartItem::new(menu_item("m2", "Es Teh", 2.0), vec![], "", 2).unwrap(),
            ],
        )
    }

    // ========== SplitSelection ==========

    #[test]
    fn test_toggle_cycles_through_max_back_to_zero() {
        let mut selection = SplitSelection::new();
        selection.toggle("a", 2);
        assert_eq!(selection.quantity("a"), 1);
        selection.toggle("a", 2);
        assert_eq!(selection.quantity("a"), 2);
        selection.toggle("a", 2);
        assert_eq!(selection.quantity("a"), 0);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_adjust_clamps_to_bounds() {
        let mut selection = SplitSelection::new();
        selection.adjust("a", -1, 3);
        assert_eq!(selection.quantity("a"), 0);
        selection.adjust("a", 1, 3);
        selection.adjust("a", 1, 3);
        selection.adjust("a", 5, 3);
        assert_eq!(selection.quantity("a"), 3);
        selection.adjust("a", -10, 3);
        assert_eq!(selection.quantity("a"), 0);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_total_quantity_and_amount() {
        let order = split_order();
        let mut selection = SplitSelection::new();
        selection.adjust(&order.items[0].id, 2, 3); // (9.0 + 1.5 sambal) * 2
        selection.adjust(&order.items[1].id, 1, 2); // 2.0
        assert_eq!(selection.total_quantity(), 3);
        assert_eq!(to_f64(selection.split_amount(&order)), 23.0);
    }

    // ========== SplitTableAction ==========

    #[test]
    fn test_partial_split_leaves_remainder() {
        let order = split_order();
        let mut selection = SplitSelection::new();
        selection.adjust(&order.items[0].id, 2, 3);

        let action = SplitTableAction {
            source_table: 3,
            target_table: 2,
            selection,
        };
        let outcome = action.execute(&order, &floor_plan()).unwrap();

        match &outcome {
            TransferOutcome::Split {
                remaining, moved, ..
            } => {
                // Moved: 2 of 3 Nasi Goreng, same add-ons and notes
                assert_eq!(moved.len(), 1);
                assert_eq!(moved[0].quantity, 2);
                assert_eq!(moved[0].id, order.items[0].id);
                assert_eq!(moved[0].selected_add_ons, order.items[0].selected_add_ons);
                assert_eq!(moved[0].notes, "pedas");

                // Source keeps 1 Nasi Goreng and the untouched Es Teh
                assert_eq!(remaining.len(), 2);
                assert_eq!(remaining[0].quantity, 1);
                assert_eq!(remaining[1].quantity, 2);
            }
            other => panic!("expected Split, got {other:?}"),
        }
        assert_eq!(outcome.message(), "2 item(s) split from table 3 to table 2");
    }

    #[test]
    fn test_full_quantity_split_moves_the_line() {
        let order = split_order();
        let mut selection = SplitSelection::new();
        selection.adjust(&order.items[0].id, 3, 3);

        let action = SplitTableAction {
            source_table: 3,
            target_table: 2,
            selection,
        };

        if let TransferOutcome::Split {
            remaining, moved, ..
        } = action.execute(&order, &floor_plan()).unwrap()
        {
            assert_eq!(moved[0].quantity, 3);
            // No zero-quantity remainder row
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].id, order.items[1].id);
        } else {
            panic!("expected Split");
        }
    }

    #[test]
    fn test_quantity_conservation() {
        let order = split_order();
        for split_qty in 0..=3 {
            let mut selection = SplitSelection::new();
            selection.adjust(&order.items[0].id, split_qty, 3);
            // Es Teh keeps the selection non-empty for the qty=0 case
            selection.adjust(&order.items[1].id, 1, 2);

            let action = SplitTableAction {
                source_table: 3,
                target_table: 2,
                selection,
            };
            if let TransferOutcome::Split {
                remaining, moved, ..
            } = action.execute(&order, &floor_plan()).unwrap()
            {
                let moved_qty: i32 = moved
                    .iter()
                    .filter(|i| i.id == order.items[0].id)
                    .map(|i| i.quantity)
                    .sum();
                let left_qty: i32 = remaining
                    .iter()
                    .filter(|i| i.id == order.items[0].id)
                    .map(|i| i.quantity)
                    .sum();
                assert_eq!(moved_qty, split_qty);
                assert_eq!(left_qty, 3 - split_qty);
            } else {
                panic!("expected Split");
            }
        }
    }

    #[test]
    fn test_unselected_item_excluded_from_target() {
        let order = split_order();
        let mut selection = SplitSelection::new();
        selection.adjust(&order.items[1].id, 1, 2);

        let action = SplitTableAction {
            source_table: 3,
            target_table: 2,
            selection,
        };
        if let TransferOutcome::Split { moved, .. } = action.execute(&order, &floor_plan()).unwrap()
        {
            assert_eq!(moved.len(), 1);
            assert_eq!(moved[0].id, order.items[1].id);
        } else {
            panic!("expected Split");
        }
    }

    #[test]
    fn test_empty_selection_fails() {
        let order = split_order();
        let action = SplitTableAction {
            source_table: 3,
            target_table: 2,
            selection: SplitSelection::new(),
        };
        assert!(!action.can_confirm());
        assert_eq!(
            action.execute(&order, &floor_plan()),
            Err(TransferError::NoItemsSelected)
        );
    }

    #[test]
    fn test_split_to_occupied_table_fails() {
        let order = split_order();
        let mut selection = SplitSelection::new();
        selection.adjust(&order.items[0].id, 1, 3);
        let action = SplitTableAction {
            source_table: 3,
            target_table: 5,
            selection,
        };
        assert!(matches!(
            action.execute(&order, &floor_plan()),
            Err(TransferError::TargetNotEmpty { table: 5, .. })
        ));
    }

    #[test]
    fn test_split_to_source_fails() {
        let order = split_order();
        let mut selection = SplitSelection::new();
        selection.adjust(&order.items[0].id, 1, 3);
        let action = SplitTableAction {
            source_table: 3,
            target_table: 3,
            selection,
        };
        assert_eq!(
            action.execute(&order, &floor_plan()),
            Err(TransferError::SameTable(3))
        );
    }

    #[test]
    fn test_unknown_item_fails() {
        let order = split_order();
        let mut selection = SplitSelection::new();
        selection.adjust("missing", 1, 3);
        let action = SplitTableAction {
            source_table: 3,
            target_table: 2,
            selection,
        };
        assert_eq!(
            action.execute(&order, &floor_plan()),
            Err(TransferError::UnknownItem("missing".to_string()))
        );
    }

    #[test]
    fn test_stale_selection_bounds_rechecked() {
        // Selection built against quantity 3, order meanwhile reduced to 1
        let mut order = split_order();
        let item_id = order.items[0].id.clone();
        let mut selection = SplitSelection::new();
        selection.adjust(&item_id, 3, 3);
        order.items[0].quantity = 1;

        let action = SplitTableAction {
            source_table: 3,
            target_table: 2,
            selection,
        };
        assert_eq!(
            action.execute(&order, &floor_plan()),
            Err(TransferError::QuantityOutOfBounds {
                item_id,
                requested: 3,
                available: 1,
            })
        );
    }
}
