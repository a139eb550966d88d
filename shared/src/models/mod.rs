//! Data models shared across the workspace

pub mod dining_table;
pub mod guest_type;
pub mod menu;

pub use dining_table::{DiningTable, TableStatus, UpstreamTable};
pub use guest_type::GuestType;
pub use menu::{AddOn, BranchMenuRow, MenuCategory, MenuItem};
