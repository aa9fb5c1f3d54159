//! Action controllers: one pipeline per operator action
//!
//! clear status -> guard -> build request -> HTTP -> project.
//! Overlapping actions are not sequenced: whichever response lands last wins.

use super::form_state::EntityKind;
use super::projector;
use super::request::{build_request, health_request, Operation};
use super::state::StateStore;
use crate::shared::http::ApiTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Round trip to the service
    Remote(Operation, EntityKind),
    /// Local reset of one entity's fields, including its id
    ClearForm(EntityKind),
    /// Copy a search result row into the form
    SelectRow(usize),
    CheckHealth,
}

impl Action {
    pub const CREATE_WISHLIST: Action = Action::Remote(Operation::Create, EntityKind::Wishlist);
    pub const RETRIEVE_WISHLIST: Action = Action::Remote(Operation::Retrieve, EntityKind::Wishlist);
    pub const UPDATE_WISHLIST: Action = Action::Remote(Operation::Update, EntityKind::Wishlist);
    pub const DELETE_WISHLIST: Action = Action::Remote(Operation::Delete, EntityKind::Wishlist);
    pub const SEARCH_WISHLISTS: Action = Action::Remote(Operation::Search, EntityKind::Wishlist);
    pub const CLEAR_WISHLIST_CONTENTS: Action =
        Action::Remote(Operation::ClearContents, EntityKind::Wishlist);
    pub const CLEAR_WISHLIST_FORM: Action = Action::ClearForm(EntityKind::Wishlist);

    pub const CREATE_ITEM: Action = Action::Remote(Operation::Create, EntityKind::Item);
    pub const RETRIEVE_ITEM: Action = Action::Remote(Operation::Retrieve, EntityKind::Item);
    pub const UPDATE_ITEM: Action = Action::Remote(Operation::Update, EntityKind::Item);
    pub const DELETE_ITEM: Action = Action::Remote(Operation::Delete, EntityKind::Item);
    pub const SEARCH_ITEMS: Action = Action::Remote(Operation::Search, EntityKind::Item);
    pub const CLEAR_ITEM_FORM: Action = Action::ClearForm(EntityKind::Item);

    /// True if the action never touches the network
    pub fn is_local(&self) -> bool {
        matches!(self, Action::ClearForm(_) | Action::SelectRow(_))
    }
}

pub struct ActionController<T> {
    transport: T,
}

impl<T: ApiTransport> ActionController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn dispatch<S: StateStore>(&self, action: Action, store: &S) {
        match action {
            Action::Remote(operation, kind) => self.run_remote(operation, kind, store).await,
            Action::CheckHealth => {
                store.update_state(|state| state.clear_status());
                let outcome = self.transport.send(&health_request()).await;
                store.update_state(|state| projector::project_health(state, outcome));
            }
            local => Self::apply_local(local, store),
        }
    }

    /// Apply an action that never reaches the transport. Remote actions are ignored.
    pub fn apply_local<S: StateStore>(action: Action, store: &S) {
        match action {
            Action::ClearForm(kind) => store.update_state(|state| {
                state.clear_status();
                state.form.clear_selection(kind);
            }),
            Action::SelectRow(index) => store.update_state(|state| {
                state.clear_status();
                if !state.select_row(index) {
                    log::debug!("ignoring selection of missing row {}", index);
                }
            }),
            Action::Remote(..) | Action::CheckHealth => {
                log::warn!("{:?} is not a local action", action);
            }
        }
    }

    async fn run_remote<S: StateStore>(&self, operation: Operation, kind: EntityKind, store: &S) {
        let mut built = None;
        store.update_state(|state| {
            state.clear_status();
            built = Some(build_request(operation, kind, &state.form));
        });

        let request = match built {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                log::warn!("{:?} {} blocked: {}", operation, kind.label(), err);
                store.update_state(|state| state.set_status(err.to_string()));
                return;
            }
            None => return,
        };

        log::debug!("dispatching {}", request);
        let outcome = self.transport.send(&request).await;
        store.update_state(|state| projector::project(state, operation, kind, outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::{ApiError, ApiRequest, HttpMethod};
    use crate::usecases::u001_wishlist_console::form_state::field;
    use crate::usecases::u001_wishlist_console::projector::messages;
    use crate::usecases::u001_wishlist_console::state::ConsoleState;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Records every request and replays canned outcomes in order
    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<ApiRequest>>,
        replies: RefCell<VecDeque<Result<Option<Value>, ApiError>>>,
    }

    impl RecordingTransport {
        fn replying(replies: Vec<Result<Option<Value>, ApiError>>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                replies: RefCell::new(replies.into()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ApiTransport for RecordingTransport {
        async fn send(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError> {
            self.sent.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no reply queued".into())))
        }
    }

    fn store_with(values: &[(&'static str, &str)]) -> Rc<RefCell<ConsoleState>> {
        let mut state = ConsoleState::new();
        for (id, value) in values {
            state.form.set(*id, *value);
        }
        Rc::new(RefCell::new(state))
    }

    #[tokio::test]
    async fn test_search_wishlists_by_customer() {
        let controller = ActionController::new(RecordingTransport::replying(vec![Ok(Some(
            json!([{"id": 7, "name": "Birthday", "customer_id": 42}]),
        ))]));
        let store = store_with(&[(field::WISHLIST_NAME, ""), (field::CUSTOMER_ID, "42")]);

        controller.dispatch(Action::SEARCH_WISHLISTS, &store).await;

        let sent = controller.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].path, "/wishlists?customer_id=42");

        let state = store.borrow();
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results.rows[0].cells, vec!["7", "Birthday", "42"]);
        let form = state.form.read_wishlist();
        assert_eq!(form.id, "7");
        assert_eq!(form.name, "Birthday");
        assert_eq!(form.customer_id, Some(42));
        assert_eq!(state.status, messages::SUCCESS);
    }

    #[tokio::test]
    async fn test_create_item_without_name_sends_nothing() {
        let controller = ActionController::new(RecordingTransport::default());
        let store = store_with(&[
            (field::WISHLIST_ID, "5"),
            (field::PRODUCT_ID, "100"),
            (field::PRODUCT_NAME, ""),
        ]);

        controller.dispatch(Action::CREATE_ITEM, &store).await;
        controller.dispatch(Action::UPDATE_ITEM, &store).await;

        assert!(controller.transport.sent.borrow().is_empty());
        assert_eq!(store.borrow().status, messages::NAME_REQUIRED);
    }

    #[tokio::test]
    async fn test_delete_wishlist_clears_form() {
        let controller = ActionController::new(RecordingTransport::replying(vec![Ok(None)]));
        let store = store_with(&[
            (field::WISHLIST_ID, "3"),
            (field::WISHLIST_NAME, "Birthday"),
            (field::CUSTOMER_ID, "42"),
        ]);

        controller.dispatch(Action::DELETE_WISHLIST, &store).await;

        assert_eq!(controller.transport.sent.borrow()[0].path, "/wishlists/3");
        let state = store.borrow();
        assert!(state.form.is_cleared(EntityKind::Wishlist));
        assert_eq!(state.form.get(field::WISHLIST_ID), "");
        assert_eq!(state.status, messages::WISHLIST_DELETED);
    }

    #[tokio::test]
    async fn test_retrieve_item_not_found() {
        let controller = ActionController::new(RecordingTransport::replying(vec![Err(
            ApiError::from_error_body(404, r#"{"message":"not found"}"#),
        )]));
        let store = store_with(&[
            (field::WISHLIST_ID, "5"),
            (field::ITEM_ID, "9"),
            (field::PRODUCT_ID, "100"),
            (field::PRODUCT_NAME, "Lamp"),
        ]);

        controller.dispatch(Action::RETRIEVE_ITEM, &store).await;

        assert_eq!(
            controller.transport.sent.borrow()[0].path,
            "/wishlists/5/items/9"
        );
        let state = store.borrow();
        assert_eq!(state.status, "not found");
        assert!(state.form.is_cleared(EntityKind::Item));
    }

    #[tokio::test]
    async fn test_status_is_overwritten_not_appended() {
        let controller = ActionController::new(RecordingTransport::replying(vec![
            Ok(Some(json!({"id": 1, "name": "A", "customer_id": 2}))),
            Err(ApiError::from_error_body(400, r#"{"message":"bad"}"#)),
        ]));
        let store = store_with(&[(field::WISHLIST_NAME, "A"), (field::CUSTOMER_ID, "2")]);

        controller.dispatch(Action::CREATE_WISHLIST, &store).await;
        assert_eq!(store.borrow().status, messages::SUCCESS);

        controller.dispatch(Action::UPDATE_WISHLIST, &store).await;
        assert_eq!(store.borrow().status, "bad");
    }

    #[tokio::test]
    async fn test_clear_form_is_local() {
        let controller = ActionController::new(RecordingTransport::default());
        let store = store_with(&[
            (field::WISHLIST_ID, "5"),
            (field::ITEM_ID, "9"),
            (field::PRODUCT_NAME, "Lamp"),
        ]);
        store.borrow_mut().set_status("stale");

        controller.dispatch(Action::CLEAR_ITEM_FORM, &store).await;

        assert!(controller.transport.sent.borrow().is_empty());
        let state = store.borrow();
        assert_eq!(state.status, "");
        assert_eq!(state.form.get(field::ITEM_ID), "");
        assert_eq!(state.form.get(field::WISHLIST_ID), "5");
        assert!(state.form.is_cleared(EntityKind::Item));
    }

    #[tokio::test]
    async fn test_select_row_after_item_search() {
        let controller = ActionController::new(RecordingTransport::replying(vec![Ok(Some(
            json!([
                {"id": 1, "wishlist_id": 5, "product_id": 10, "product_name": "A", "product_price": 1.0},
                {"id": 2, "wishlist_id": 5, "product_id": 20, "product_name": "B", "product_price": 2.5}
            ]),
        ))]));
        let store = store_with(&[(field::WISHLIST_ID, "5")]);

        controller.dispatch(Action::SEARCH_ITEMS, &store).await;
        assert_eq!(store.borrow().form.get(field::ITEM_ID), "1");

        controller.dispatch(Action::SelectRow(1), &store).await;
        controller.dispatch(Action::SelectRow(7), &store).await;

        let state = store.borrow();
        assert_eq!(state.form.get(field::ITEM_ID), "2");
        assert_eq!(state.form.get(field::PRODUCT_NAME), "B");
        assert_eq!(state.form.get(field::PRODUCT_PRICE), "2.5");
        assert_eq!(controller.transport.sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_contents_failure_is_generic() {
        let controller = ActionController::new(RecordingTransport::replying(vec![Err(
            ApiError::from_error_body(404, r#"{"message":"Wishlist 3 not found"}"#),
        )]));
        let store = store_with(&[(field::WISHLIST_ID, "3"), (field::PRODUCT_NAME, "Lamp")]);

        controller.dispatch(Action::CLEAR_WISHLIST_CONTENTS, &store).await;

        let sent = controller.transport.sent.borrow();
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[0].path, "/wishlists/3/clear");
        let state = store.borrow();
        assert_eq!(state.status, messages::SERVER_ERROR);
        assert_eq!(state.form.get(field::PRODUCT_NAME), "Lamp");
    }

    #[tokio::test]
    async fn test_check_health() {
        let controller =
            ActionController::new(RecordingTransport::replying(vec![Ok(Some(json!({"status": "OK"})))]));
        let store = store_with(&[]);

        controller.dispatch(Action::CheckHealth, &store).await;

        assert_eq!(controller.transport.sent.borrow()[0].path, "/health");
        assert_eq!(store.borrow().status, messages::HEALTHY);
    }

    /// Captures the status visible to the operator while a request is in flight
    struct StatusWatchingTransport {
        store: Rc<RefCell<ConsoleState>>,
        in_flight: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ApiTransport for StatusWatchingTransport {
        async fn send(&self, _request: &ApiRequest) -> Result<Option<Value>, ApiError> {
            self.in_flight
                .borrow_mut()
                .push(self.store.borrow().status.clone());
            Err(ApiError::from_error_body(500, r#"{"message":"boom"}"#))
        }
    }

    #[tokio::test]
    async fn test_status_cleared_before_request_is_sent() {
        let store = store_with(&[(field::WISHLIST_ID, "3"), (field::ITEM_ID, "9")]);
        let controller = ActionController::new(StatusWatchingTransport {
            store: store.clone(),
            in_flight: RefCell::new(Vec::new()),
        });

        for action in [Action::RETRIEVE_WISHLIST, Action::DELETE_ITEM, Action::CheckHealth] {
            store.borrow_mut().set_status("stale");
            controller.dispatch(action, &store).await;
            assert_ne!(store.borrow().status, "stale");
        }

        assert_eq!(*controller.transport.in_flight.borrow(), vec!["", "", ""]);
    }

    #[test]
    fn test_local_actions() {
        assert!(Action::CLEAR_WISHLIST_FORM.is_local());
        assert!(Action::SelectRow(0).is_local());
        assert!(!Action::SEARCH_ITEMS.is_local());
        assert!(!Action::CheckHealth.is_local());
    }

    #[test]
    fn test_apply_local_ignores_remote_actions() {
        let store = store_with(&[(field::WISHLIST_ID, "3"), (field::WISHLIST_NAME, "Birthday")]);
        store.borrow_mut().set_status("kept");

        ActionController::<RecordingTransport>::apply_local(Action::DELETE_WISHLIST, &store);
        assert_eq!(store.borrow().status, "kept");
        assert_eq!(store.borrow().form.get(field::WISHLIST_ID), "3");

        ActionController::<RecordingTransport>::apply_local(Action::CLEAR_WISHLIST_FORM, &store);
        let state = store.borrow();
        assert_eq!(state.status, "");
        assert_eq!(state.form.get(field::WISHLIST_ID), "");
        assert_eq!(state.form.get(field::WISHLIST_NAME), "");
    }
}
