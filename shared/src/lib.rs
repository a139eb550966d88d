//! Shared types for the POS order core and gateway
//!
//! Common types used across the workspace: catalog and table models,
//! cart/order types, money helpers, and the request/response DTOs of
//! the gateway proxy endpoints.

pub mod client;
pub mod models;
pub mod money;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::AuthUser;
pub use models::{
    AddOn, BranchMenuRow, DiningTable, GuestType, MenuCategory, MenuItem, TableStatus,
    UpstreamTable,
};
pub use order::{CartError, CartItem, TableOrder};
