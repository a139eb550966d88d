//! Screen state machine
//!
//! Forward path: `login -> tables -> guest-input -> menu -> cart ->
//! confirmation`, with the back edges the flow supports. Leaving `login`
//! happens through [`crate::OrderSession::login`]; returning to it only
//! through `logout`, so the transition table never targets `Login`.

use serde::{Deserialize, Serialize};

/// POS screen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AppScreen {
    #[default]
    Login,
    Tables,
    GuestInput,
    Menu,
    Cart,
    Confirmation,
}

impl AppScreen {
    /// Whether the flow allows a direct transition `self -> to`.
    pub fn can_transition(self, to: AppScreen) -> bool {
        use AppScreen::*;
        matches!(
            (self, to),
            (Login, Tables)
                | (Tables, GuestInput)
                | (GuestInput, Menu)
                | (GuestInput, Tables)
                | (Menu, Cart)
                | (Menu, Tables)
                | (Cart, Confirmation)
                | (Cart, Menu)
                | (Confirmation, Menu)
                | (Confirmation, Tables)
        )
    }
}

impl std::fmt::Display for AppScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AppScreen::Login => "login",
            AppScreen::Tables => "tables",
            AppScreen::GuestInput => "guest-input",
            AppScreen::Menu => "menu",
            AppScreen::Cart => "cart",
            AppScreen::Confirmation => "confirmation",
        };
        f.write_str(name)
    }
}
