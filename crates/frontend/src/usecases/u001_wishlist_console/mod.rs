//! Wishlist console: manual create/retrieve/update/delete/search/clear of
//! wishlists and their items against the Wishlist REST service
//!
//! Layering, leaves first:
//! - form_state.rs: selected wishlist and item over a field store
//! - request.rs: request builder
//! - projector.rs: success/error projection onto state
//! - results.rs: search results table model
//! - controller.rs: one pipeline per operator action
//! - view_model.rs / view.rs: Leptos binding

pub mod controller;
pub mod form_state;
pub mod projector;
pub mod request;
pub mod results;
pub mod state;
mod view;
mod view_model;

pub use controller::{Action, ActionController};
pub use view::WishlistConsole;
pub use view_model::WishlistConsoleViewModel;
