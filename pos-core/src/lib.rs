//! POS order core
//!
//! Client-side state of the point-of-sale flow:
//!
//! - **screen**: the screen state machine (`login` through `confirmation`)
//! - **session**: [`OrderSession`], the single authoritative holder of the
//!   cart, the loaded pre-existing order, guest info and navigation state
//! - **transfer**: the move / join / split table operations as pure
//!   computations over a table's order
//!
//! Nothing here persists or talks to the network; the gateway and the UI
//! are the collaborators on either side.

pub mod screen;
pub mod session;
pub mod transfer;

// Re-export public types
pub use screen::AppScreen;
pub use session::{OrderSession, OrderStateError};
pub use transfer::{
    JoinTablesAction, MoveTableAction, SplitSelection, SplitTableAction, TransferError,
    TransferOutcome,
};
