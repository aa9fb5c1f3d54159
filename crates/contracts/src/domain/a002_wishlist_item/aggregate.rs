use serde::{Deserialize, Serialize};

use crate::domain::a001_wishlist::WishlistId;
use crate::integer_id;

integer_id!(
    /// Server-assigned wishlist item identifier
    WishlistItemId
);

/// Wishlist item as returned by the items endpoints
///
/// `product_name` and `product_price` are absent from responses of older
/// service builds; they deserialize to `None` instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WishlistItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlist_id: Option<WishlistId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_price: Option<f64>,
}

/// Body of `POST /wishlists/{id}/items` and `PUT /wishlists/{id}/items/{item_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItemPayload {
    pub product_id: Option<i64>,
    pub product_name: String,
    pub product_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rich_item() {
        let json = r#"{"id":9,"wishlist_id":5,"product_id":100,"product_name":"Lamp","product_price":19.5}"#;
        let item: WishlistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, Some(WishlistItemId(9)));
        assert_eq!(item.wishlist_id, Some(WishlistId(5)));
        assert_eq!(item.product_price, Some(19.5));
    }

    #[test]
    fn test_deserialize_reduced_item() {
        let json = r#"{"id":9,"wishlist_id":5,"product_id":100}"#;
        let item: WishlistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.product_id, Some(100));
        assert!(item.product_name.is_none());
        assert!(item.product_price.is_none());
    }

    #[test]
    fn test_payload_shape() {
        let payload = WishlistItemPayload {
            product_id: Some(100),
            product_name: "Lamp".into(),
            product_price: Some(19.5),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"product_id": 100, "product_name": "Lamp", "product_price": 19.5})
        );
    }
}
