//! Inventory page
//!
//! Explicit-state variant of the MVVM layout used by the details forms:
//! - state.rs: `InventoryState` with pure update functions and the store seam
//! - controller.rs: handlers that issue requests and write the store
//! - view.rs: Leptos components (pure UI)

mod controller;
mod state;
mod view;

pub use controller::InventoryController;
pub use state::{create_state, FormSubmission, InventoryState, ProductForm, SalePlan, SellError, StateStore};
pub use view::InventoryPage;
