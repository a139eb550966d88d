//! Menu catalog models
//!
//! [`MenuItem`] / [`AddOn`] are the immutable catalog entries the cart
//! is built from. [`BranchMenuRow`] is the raw upstream shape; rows are
//! adapted at the boundary, never interpreted elsewhere.

use serde::{Deserialize, Serialize};

/// Menu catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price
    pub price: f64,
    pub category: String,
    /// Add-ons this item can be configured with
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

/// Price-incrementing add-on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Menu category extracted from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
}

/// Raw Branch Menu row as returned by the upstream restaurant API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchMenuRow {
    /// Upstream document name, used as the item id
    pub name: String,
    #[serde(default)]
    pub menu_category: String,
    pub menu_item: String,
    #[serde(default)]
    pub short_name: String,
    /// Unit price
    pub rate: f64,
    /// 1 when the item is sellable
    #[serde(default)]
    pub enabled: i32,
    #[serde(default)]
    pub menu_code: String,
}

impl BranchMenuRow {
    /// Adapt an upstream row to the catalog model.
    ///
    /// The upstream menu carries no add-on data; add-ons arrive through
    /// the item configuration flow and start out empty here.
    pub fn into_menu_item(self) -> MenuItem {
        MenuItem {
            id: self.name,
            name: self.menu_item,
            description: self.short_name,
            price: self.rate,
            category: self.menu_category,
            add_ons: Vec::new(),
        }
    }
}

/// Extract the sorted list of distinct categories from enabled rows
pub fn extract_categories(rows: &[BranchMenuRow]) -> Vec<MenuCategory> {
    let mut names: Vec<&str> = rows
        .iter()
        .filter(|r| r.enabled == 1 && !r.menu_category.is_empty())
        .map(|r| r.menu_category.as_str())
        .collect();
    names.sort_unstable();
    names.dedup();

    names
        .into_iter()
        .map(|name| MenuCategory {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
        })
        .collect()
}
