//! Request builder: (operation, entity kind, form) -> (method, path, body)
//!
//! Paths are relative to the API root; the transport prefixes them.

use contracts::domain::a001_wishlist::{WishlistPayload, WishlistSearchQuery};
use contracts::domain::a002_wishlist_item::WishlistItemPayload;
use serde::Serialize;
use thiserror::Error;
use urlencoding::encode;

use super::form_state::{field, EntityKind, FormState, ItemForm};
use crate::shared::http::{ApiRequest, HttpMethod, RequestScope};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Retrieve,
    Update,
    Delete,
    ClearContents,
    Search,
}

/// Reasons a request is never dispatched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Name must be filled out")]
    ProductNameRequired,

    #[error("{operation:?} is not available for a {}", .kind.label())]
    Unsupported {
        operation: Operation,
        kind: EntityKind,
    },

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

fn json_body<T: Serialize>(payload: &T) -> Result<serde_json::Value, RequestError> {
    serde_json::to_value(payload).map_err(|e| RequestError::Encode(e.to_string()))
}

fn wishlist_path(wishlist_id: &str) -> String {
    format!("/wishlists/{}", encode(wishlist_id))
}

fn items_path(wishlist_id: &str) -> String {
    format!("{}/items", wishlist_path(wishlist_id))
}

fn item_path(item: &ItemForm) -> String {
    format!("{}/{}", items_path(&item.wishlist_id), encode(&item.id))
}

/// Build the `GET /wishlists` path, omitting blank filters
pub fn wishlist_search_path(name: &str, customer_id: &str) -> Result<String, RequestError> {
    let query = WishlistSearchQuery::from_form(name, customer_id);
    if query.is_empty() {
        return Ok("/wishlists".to_string());
    }
    let query_string =
        serde_qs::to_string(&query).map_err(|e| RequestError::Encode(e.to_string()))?;
    Ok(format!("/wishlists?{}", query_string))
}

fn item_payload(item: &ItemForm) -> Result<serde_json::Value, RequestError> {
    if item.product_name.is_empty() {
        return Err(RequestError::ProductNameRequired);
    }
    json_body(&WishlistItemPayload {
        product_id: item.product_id,
        product_name: item.product_name.clone(),
        product_price: item.product_price,
    })
}

/// Build the request for an operation from the current form
///
/// The only client-side check is the product name guard on item
/// create/update; everything else is left to the service.
pub fn build_request(
    operation: Operation,
    kind: EntityKind,
    form: &FormState,
) -> Result<ApiRequest, RequestError> {
    use EntityKind::*;
    use Operation::*;

    let request = match (operation, kind) {
        (Create, Wishlist) => {
            let w = form.read_wishlist();
            ApiRequest::new(HttpMethod::Post, "/wishlists").with_body(json_body(&WishlistPayload {
                name: w.name,
                customer_id: w.customer_id,
            })?)
        }
        (Create, Item) => {
            let item = form.read_item();
            let body = item_payload(&item)?;
            ApiRequest::new(HttpMethod::Post, items_path(&item.wishlist_id)).with_body(body)
        }
        (Retrieve, Wishlist) => {
            ApiRequest::new(HttpMethod::Get, wishlist_path(&form.read_wishlist().id))
        }
        (Retrieve, Item) => ApiRequest::new(HttpMethod::Get, item_path(&form.read_item())),
        (Update, Wishlist) => {
            let w = form.read_wishlist();
            ApiRequest::new(HttpMethod::Put, wishlist_path(&w.id)).with_body(json_body(
                &WishlistPayload {
                    name: w.name,
                    customer_id: w.customer_id,
                },
            )?)
        }
        (Update, Item) => {
            let item = form.read_item();
            let body = item_payload(&item)?;
            ApiRequest::new(HttpMethod::Put, item_path(&item)).with_body(body)
        }
        (Delete, Wishlist) => {
            ApiRequest::new(HttpMethod::Delete, wishlist_path(&form.read_wishlist().id))
        }
        (Delete, Item) => ApiRequest::new(HttpMethod::Delete, item_path(&form.read_item())),
        (ClearContents, Wishlist) => ApiRequest::new(
            HttpMethod::Put,
            format!("{}/clear", wishlist_path(&form.read_wishlist().id)),
        ),
        (ClearContents, Item) => {
            return Err(RequestError::Unsupported { operation, kind });
        }
        (Search, Wishlist) => ApiRequest::new(
            HttpMethod::Get,
            wishlist_search_path(form.get(field::WISHLIST_NAME), form.get(field::CUSTOMER_ID))?,
        ),
        (Search, Item) => {
            ApiRequest::new(HttpMethod::Get, items_path(form.get(field::WISHLIST_ID)))
        }
    };

    Ok(request)
}

/// `GET /health` on the service origin
pub fn health_request() -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, "/health").with_scope(RequestScope::Service)
}
