//! OrderSession - the authoritative order state store
//!
//! Single owner of the in-progress cart, the loaded pre-existing order,
//! guest metadata and the current screen. All mutations are synchronous
//! and total-order consistent; the session is owned by the UI event loop
//! and never shared across threads.
//!
//! Derived totals are recomputed from the item lists on every call.
//! There is no cached total that can desync from mutations.

use shared::client::AuthUser;
use shared::models::{AddOn, GuestType, MenuItem};
use shared::money;
use shared::order::{CartError, CartItem, TableOrder};

use crate::screen::AppScreen;

/// Navigation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderStateError {
    /// Any screen other than login requires a completed login
    #[error("not authenticated")]
    NotAuthenticated,

    /// The flow has no edge `from -> to`
    #[error("invalid screen transition: {from} -> {to}")]
    InvalidTransition { from: AppScreen, to: AppScreen },
}

/// Order state store
#[derive(Debug, Default)]
pub struct OrderSession {
    screen: AppScreen,
    current_user: Option<AuthUser>,
    selected_table: Option<u32>,
    /// Not-yet-submitted lines of the current session
    cart: Vec<CartItem>,
    /// Lines already committed to the table before this session
    existing_order_items: Vec<CartItem>,
    guest_count: Option<u32>,
    guest_type: Option<GuestType>,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Reads ==========

    pub fn screen(&self) -> AppScreen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&AuthUser> {
        self.current_user.as_ref()
    }

    pub fn selected_table(&self) -> Option<u32> {
        self.selected_table
    }

    pub fn guest_count(&self) -> Option<u32> {
        self.guest_count
    }

    pub fn guest_type(&self) -> Option<&GuestType> {
        self.guest_type.as_ref()
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn existing_order_items(&self) -> &[CartItem] {
        &self.existing_order_items
    }

    /// Total of the new-items cart, recomputed on every call
    pub fn cart_total(&self) -> f64 {
        money::to_f64(money::items_total(&self.cart))
    }

    /// Total of the loaded pre-existing order, recomputed on every call
    pub fn existing_order_total(&self) -> f64 {
        money::to_f64(money::items_total(&self.existing_order_items))
    }

    /// Sum of quantities in the new-items cart (not line count)
    pub fn cart_item_count(&self) -> i32 {
        self.cart.iter().map(|i| i.quantity).sum()
    }

    // ========== Auth ==========

    /// Complete a login: store the user and land on the tables screen.
    pub fn login(&mut self, user: AuthUser) {
        tracing::info!(user = %user.full_name, "login completed");
        self.current_user = Some(user);
        self.screen = AppScreen::Tables;
    }

    /// Log out: back to the login screen with all session state cleared.
    pub fn logout(&mut self) {
        self.current_user = None;
        self.selected_table = None;
        self.cart.clear();
        self.existing_order_items.clear();
        self.guest_count = None;
        self.guest_type = None;
        self.screen = AppScreen::Login;
    }

    // ========== Navigation ==========

    /// Transition to another screen.
    ///
    /// Rejects any target while unauthenticated and any edge the flow
    /// does not support. Side effects bound to back edges: leaving the
    /// menu for the tables screen drops the table selection; leaving the
    /// confirmation screen clears the cart.
    pub fn go_to(&mut self, to: AppScreen) -> Result<(), OrderStateError> {
        if !self.is_authenticated() {
            return Err(OrderStateError::NotAuthenticated);
        }
        if !self.screen.can_transition(to) {
            return Err(OrderStateError::InvalidTransition {
                from: self.screen,
                to,
            });
        }

        match (self.screen, to) {
            (AppScreen::Menu, AppScreen::Tables) => {
                self.selected_table = None;
            }
            (AppScreen::Confirmation, AppScreen::Menu) => {
                self.cart.clear();
            }
            (AppScreen::Confirmation, AppScreen::Tables) => {
                self.cart.clear();
                self.selected_table = None;
            }
            _ => {}
        }

        self.screen = to;
        Ok(())
    }

    // ========== Guest info ==========

    pub fn select_table(&mut self, table_number: u32) {
        self.selected_table = Some(table_number);
    }

    pub fn set_guest_count(&mut self, count: Option<u32>) {
        self.guest_count = count;
    }

    pub fn set_guest_type(&mut self, guest_type: Option<GuestType>) {
        self.guest_type = guest_type;
    }

    // ========== Cart mutations ==========

    /// Append a freshly configured line and return its id.
    ///
    /// Identical configurations are never merged; two additions produce
    /// two separate lines.
    pub fn add_to_cart(
        &mut self,
        menu_item: MenuItem,
        add_ons: Vec<AddOn>,
        notes: impl Into<String>,
        quantity: i32,
    ) -> Result<String, CartError> {
        let item = CartItem::new(menu_item, add_ons, notes, quantity)?;
        let id = item.id.clone();
        self.cart.push(item);
        Ok(id)
    }

    /// Delete the matching line. No-op when the id is unknown.
    pub fn remove_from_cart(&mut self, cart_item_id: &str) {
        self.cart.retain(|i| i.id != cart_item_id);
    }

    /// Replace a line's quantity in place, preserving add-ons and notes.
    ///
    /// A quantity of 0 or less removes the line instead of keeping a
    /// zero-quantity row. No-op when the id is unknown.
    pub fn update_cart_item_quantity(&mut self, cart_item_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_from_cart(cart_item_id);
            return;
        }
        if let Some(item) = self.cart.iter_mut().find(|i| i.id == cart_item_id) {
            item.quantity = quantity;
        }
    }

    /// Empty the new-items cart. Existing-order items are untouched.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Load a table's committed order for adding more items.
    ///
    /// Replaces the existing-order items and guest fields with the
    /// order's data and clears the new-items cart: the session is now
    /// adding to an already-placed order.
    pub fn load_existing_order(&mut self, order: &TableOrder) {
        self.existing_order_items = order.items.clone();
        self.guest_count = Some(order.guest_count);
        self.guest_type = GuestType::find(&order.guest_type);
        self.cart.clear();
    }
}
