//! Guest type reference data
//!
//! Fixed catalog describing the nature of the visiting party. Reference
//! data only, no lifecycle.

use serde::{Deserialize, Serialize};

/// Guest type catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl GuestType {
    /// The builtin catalog
    pub fn builtin() -> Vec<GuestType> {
        fn entry(id: &str, name: &str, description: &str, icon: &str) -> GuestType {
            GuestType {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
            }
        }

        vec![
            entry("regular", "Regular", "Tamu biasa", "👤"),
            entry("vip", "VIP", "Tamu prioritas", "⭐"),
            entry("member", "Member", "Anggota terdaftar", "💳"),
            entry("family", "Keluarga", "Tamu keluarga", "👨‍👩‍👧‍👦"),
            entry("business", "Bisnis", "Pertemuan bisnis", "💼"),
            entry("celebration", "Perayaan", "Ulang tahun, anniversary", "🎉"),
        ]
    }

    /// Look up a builtin guest type by id
    pub fn find(id: &str) -> Option<GuestType> {
        Self::builtin().into_iter().find(|g| g.id == id)
    }
}
