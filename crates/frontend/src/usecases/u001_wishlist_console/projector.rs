//! Response projector: success payloads and errors onto the console state
//!
//! Every outcome ends in exactly one overwrite of the status line.

use contracts::domain::a001_wishlist::Wishlist;
use contracts::domain::a002_wishlist_item::WishlistItem;
use contracts::system::health::HealthStatus;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::form_state::{Entity, EntityKind};
use super::request::Operation;
use super::results::ResultTable;
use super::state::ConsoleState;
use crate::shared::http::ApiError;

/// Fixed status messages
pub mod messages {
    pub const SUCCESS: &str = "Success";
    pub const NAME_REQUIRED: &str = "Name must be filled out";
    pub const WISHLIST_NOT_FOUND: &str = "Wishlist Not Found";
    pub const ITEM_NOT_FOUND: &str = "Wishlist item Not Found";
    pub const WISHLIST_DELETED: &str = "Wishlist has been Deleted!";
    pub const ITEM_DELETED: &str = "Wishlist item has been Deleted!";
    pub const WISHLIST_CLEARED: &str = "Wishlist has been cleared";
    pub const SERVER_ERROR: &str = "Server error!";
    pub const NETWORK_ERROR: &str = "Unable to reach the wishlist service";
    pub const HEALTHY: &str = "Service is healthy";
    pub const UNHEALTHY: &str = "Service is unhealthy";
}

/// Decoded success payload
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Entity(Entity),
    Results(ResultTable),
}

fn decode_value<T: DeserializeOwned>(value: Option<Value>) -> Result<T, ApiError> {
    let value = value.ok_or_else(|| ApiError::Decode("empty response body".to_string()))?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Turn a raw JSON body into the payload the operation expects
pub fn decode(
    operation: Operation,
    kind: EntityKind,
    value: Option<Value>,
) -> Result<Payload, ApiError> {
    match operation {
        Operation::Delete | Operation::ClearContents => Ok(Payload::Empty),
        Operation::Search => Ok(Payload::Results(match kind {
            EntityKind::Wishlist => ResultTable::render(decode_value::<Vec<Wishlist>>(value)?),
            EntityKind::Item => ResultTable::render(decode_value::<Vec<WishlistItem>>(value)?),
        })),
        Operation::Create | Operation::Retrieve | Operation::Update => {
            Ok(Payload::Entity(match kind {
                EntityKind::Wishlist => Entity::Wishlist(decode_value(value)?),
                EntityKind::Item => Entity::Item(decode_value(value)?),
            }))
        }
    }
}

/// Project the outcome of one HTTP call
pub fn project(
    state: &mut ConsoleState,
    operation: Operation,
    kind: EntityKind,
    outcome: Result<Option<Value>, ApiError>,
) {
    match outcome.and_then(|value| decode(operation, kind, value)) {
        Ok(payload) => project_success(state, operation, kind, payload),
        Err(err) => project_failure(state, operation, kind, &err),
    }
}

pub fn project_success(
    state: &mut ConsoleState,
    operation: Operation,
    kind: EntityKind,
    payload: Payload,
) {
    match (operation, payload) {
        (Operation::Delete, _) => {
            state.form.clear_selection(kind);
            state.set_status(match kind {
                EntityKind::Wishlist => messages::WISHLIST_DELETED,
                EntityKind::Item => messages::ITEM_DELETED,
            });
        }
        (Operation::ClearContents, _) => {
            state.form.clear(EntityKind::Item);
            state.set_status(messages::WISHLIST_CLEARED);
        }
        (_, Payload::Results(table)) => {
            if let Some(first) = table.first() {
                state.form.write(first);
            }
            log::debug!("search returned {} {} row(s)", table.len(), kind.label());
            state.results = table;
            state.set_status(messages::SUCCESS);
        }
        (_, Payload::Entity(entity)) => {
            state.form.write(&entity);
            state.set_status(messages::SUCCESS);
        }
        (_, Payload::Empty) => {
            state.set_status(messages::SUCCESS);
        }
    }
}

/// Status text for an error, preferring the service's own message
fn surfaced(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Network(_) => messages::NETWORK_ERROR.to_string(),
        _ => err.server_message().unwrap_or(fallback).to_string(),
    }
}

pub fn project_failure(
    state: &mut ConsoleState,
    operation: Operation,
    kind: EntityKind,
    err: &ApiError,
) {
    match err {
        ApiError::Decode(reason) => {
            log::error!("{:?} {}: undecodable response: {}", operation, kind.label(), reason)
        }
        _ => log::warn!("{:?} {} failed: {}", operation, kind.label(), err),
    }

    let status = match operation {
        Operation::Retrieve => {
            state.form.clear(kind);
            match (kind, err) {
                (_, ApiError::Network(_)) => messages::NETWORK_ERROR.to_string(),
                (EntityKind::Wishlist, _) => messages::WISHLIST_NOT_FOUND.to_string(),
                (EntityKind::Item, _) => surfaced(err, messages::ITEM_NOT_FOUND),
            }
        }
        Operation::Create | Operation::Update | Operation::Search => {
            surfaced(err, messages::SERVER_ERROR)
        }
        // The service message is deliberately not shown for these two.
        Operation::Delete | Operation::ClearContents => match err {
            ApiError::Network(_) => messages::NETWORK_ERROR.to_string(),
            _ => messages::SERVER_ERROR.to_string(),
        },
    };
    state.set_status(status);
}

/// Project the outcome of `GET /health`
pub fn project_health(state: &mut ConsoleState, outcome: Result<Option<Value>, ApiError>) {
    match outcome.and_then(decode_value::<HealthStatus>) {
        Ok(health) if health.is_ok() => state.set_status(messages::HEALTHY),
        Ok(health) => {
            log::warn!("health check reported status {:?}", health.status);
            state.set_status(messages::UNHEALTHY);
        }
        Err(err) => {
            log::warn!("health check failed: {}", err);
            state.set_status(surfaced(&err, messages::UNHEALTHY));
        }
    }
}
