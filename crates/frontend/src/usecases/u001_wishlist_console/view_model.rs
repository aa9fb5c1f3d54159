use leptos::prelude::*;
use std::sync::Arc;

use super::controller::{Action, ActionController};
use super::results::ResultTable;
use super::state::{ConsoleState, StateStore};
use crate::shared::config::Config;
use crate::shared::http::GlooTransport;

impl StateStore for RwSignal<ConsoleState> {
    fn update_state(&self, f: impl FnOnce(&mut ConsoleState)) {
        self.update(f);
    }
}

/// ViewModel for the wishlist console page
///
/// `Send + Sync` so it can be captured by reactive closures and callbacks.
#[derive(Clone)]
pub struct WishlistConsoleViewModel {
    pub state: RwSignal<ConsoleState>,
    controller: Arc<ActionController<GlooTransport>>,
}

impl WishlistConsoleViewModel {
    pub fn new(config: &Config) -> Self {
        Self {
            state: RwSignal::new(ConsoleState::new()),
            controller: Arc::new(ActionController::new(GlooTransport::new(config.api.clone()))),
        }
    }

    /// Reactive getter for a form field
    pub fn field(&self, field_id: &'static str) -> impl Fn() -> String + 'static {
        let state = self.state;
        move || state.with(|s| s.form.get(field_id).to_string())
    }

    pub fn set_field(&self, field_id: &'static str, value: String) {
        self.state.update(|s| s.form.set(field_id, value));
    }

    pub fn status(&self) -> impl Fn() -> String + 'static {
        let state = self.state;
        move || state.with(|s| s.status.clone())
    }

    pub fn results(&self) -> Signal<ResultTable> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.results.clone()))
    }

    /// Run an action; remote ones complete in the background
    pub fn dispatch(&self, action: Action) {
        if action.is_local() {
            ActionController::<GlooTransport>::apply_local(action, &self.state);
            return;
        }
        let controller = self.controller.clone();
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            controller.dispatch(action, &state).await;
        });
    }
}
