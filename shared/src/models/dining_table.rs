//! Dining Table Model
//!
//! The upstream restaurant API reports table occupancy in a mixed
//! vocabulary (`Kosong`, `Terisi`, `Has Ordered`, ...). Everything past
//! this module speaks the canonical [`TableStatus`] enumeration; the
//! adapter here is the only place the upstream labels are interpreted.

use serde::{Deserialize, Serialize};

/// Canonical table occupancy status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    /// Free table, valid target for move and split
    Empty,
    /// Guests seated, no order yet
    Occupied,
    /// Order placed
    Ordered,
    /// Food served
    Served,
    /// Waiting for the bill
    Billing,
}

impl TableStatus {
    /// Map an upstream status label to the canonical status.
    ///
    /// Unknown labels fall back to `Empty`, matching the upstream
    /// contract where anything unrecognized is treated as a free table.
    pub fn from_upstream(label: &str) -> Self {
        match label {
            "Kosong" => TableStatus::Empty,
            "Terisi" => TableStatus::Occupied,
            "Has Ordered" => TableStatus::Ordered,
            "Disajikan" => TableStatus::Served,
            "Tagihan" => TableStatus::Billing,
            _ => TableStatus::Empty,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TableStatus::Empty => "Meja Kosong",
            TableStatus::Occupied => "Meja Terisi",
            TableStatus::Ordered => "Sudah Order",
            TableStatus::Served => "Meja Disajikan",
            TableStatus::Billing => "Meja Tagihan",
        }
    }

    /// Whether the table holds an order (any non-empty status)
    pub fn is_occupied(&self) -> bool {
        !matches!(self, TableStatus::Empty)
    }
}

/// Raw table row as returned by the upstream restaurant API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamTable {
    pub id: String,
    pub name: String,
    pub status: String,
    /// Capacity, carried as a string by the upstream API
    #[serde(rename = "type")]
    pub table_type: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub pax: i32,
    #[serde(rename = "typeCustomer", default)]
    pub type_customer: Option<String>,
    #[serde(rename = "takenBy", default)]
    pub taken_by: Option<String>,
    /// POS Invoice id for occupied tables
    #[serde(default)]
    pub invoice_name: Option<String>,
}

/// Dining table entity with canonical status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    /// Table number as shown on the floor plan
    pub number: u32,
    pub name: String,
    pub status: TableStatus,
    pub capacity: i32,
    pub zone: String,
    pub floor: String,
    pub customer: Option<String>,
    pub pax: i32,
    pub customer_type: Option<String>,
    pub taken_by: Option<String>,
    /// POS Invoice id for occupied tables
    pub invoice_id: Option<String>,
}

impl DiningTable {
    /// Convert an upstream row into the canonical model.
    ///
    /// The table number is the trailing digits of the upstream name
    /// ("Meja 7" -> 7); names without digits get number 0.
    pub fn from_upstream(raw: UpstreamTable) -> Self {
        let number = parse_table_number(&raw.name);
        Self {
            id: raw.id,
            number,
            status: TableStatus::from_upstream(&raw.status),
            capacity: raw.table_type.parse().unwrap_or(2),
            name: raw.name,
            zone: raw.zone,
            floor: raw.floor,
            customer: raw.customer,
            pax: raw.pax,
            customer_type: raw.type_customer,
            taken_by: raw.taken_by,
            invoice_id: raw.invoice_name,
        }
    }
}

fn parse_table_number(name: &str) -> u32 {
    let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
