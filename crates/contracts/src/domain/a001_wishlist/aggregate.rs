use serde::{Deserialize, Serialize};

use crate::integer_id;

// ============================================================================
// ID Type
// ============================================================================

integer_id!(
    /// Server-assigned wishlist identifier
    WishlistId
);

// ============================================================================
// Entity
// ============================================================================

/// Wishlist as returned by create/retrieve/update/search
///
/// Every field is optional on the wire: the console projects only what the
/// service actually sent and leaves the rest of the form untouched. The
/// `items` array nested into wishlist responses (sometimes `null`) is not
/// modelled and is skipped like any other unknown key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wishlist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WishlistId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
}

// ============================================================================
// Request payloads
// ============================================================================

/// Body of `POST /wishlists` and `PUT /wishlists/{id}`
///
/// Unparsable `customer_id` is sent as `null` and left to the service to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistPayload {
    pub name: String,
    pub customer_id: Option<i64>,
}

/// Query string of `GET /wishlists`
///
/// Empty filters are skipped entirely, so no `key=` with a blank value is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WishlistSearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl WishlistSearchQuery {
    /// Build a query from raw form values, dropping blank ones
    pub fn from_form(name: &str, customer_id: &str) -> Self {
        fn non_empty(value: &str) -> Option<String> {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }

        Self {
            name: non_empty(name),
            customer_id: non_empty(customer_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.customer_id.is_none()
    }
}
