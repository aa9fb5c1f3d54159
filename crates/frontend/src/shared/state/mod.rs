pub mod form_state_manager;

pub use form_state_manager::FieldStore;
