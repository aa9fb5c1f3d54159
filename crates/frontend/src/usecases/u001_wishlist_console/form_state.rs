//! Form state adapter: the selected wishlist and the selected item
//!
//! Both entities live in one [`FieldStore`] keyed by the ids of the visible
//! inputs. `wishlist_id` is shared: it is the selected wishlist's own id and
//! the parent of the selected item, so item operations always target the
//! wishlist currently on the form.

use contracts::domain::a001_wishlist::Wishlist;
use contracts::domain::a002_wishlist_item::WishlistItem;
use contracts::domain::common::AggregateId;

use crate::shared::state::FieldStore;

/// Ids of the visible form fields
pub mod field {
    pub const WISHLIST_ID: &str = "wishlist_id";
    pub const WISHLIST_NAME: &str = "wishlist_name";
    pub const CUSTOMER_ID: &str = "wishlist_customer_id";
    pub const ITEM_ID: &str = "wishlist_item_id";
    pub const PRODUCT_ID: &str = "wishlist_product_id";
    pub const PRODUCT_NAME: &str = "wishlist_product_name";
    pub const PRODUCT_PRICE: &str = "wishlist_product_price";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Wishlist,
    Item,
}

impl EntityKind {
    /// Fields reset by a plain clear; ids are never among them
    pub fn business_fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Wishlist => &[field::WISHLIST_NAME, field::CUSTOMER_ID],
            EntityKind::Item => &[field::PRODUCT_ID, field::PRODUCT_NAME, field::PRODUCT_PRICE],
        }
    }

    /// The entity's own id field
    pub fn id_field(self) -> &'static str {
        match self {
            EntityKind::Wishlist => field::WISHLIST_ID,
            EntityKind::Item => field::ITEM_ID,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Wishlist => "wishlist",
            EntityKind::Item => "wishlist item",
        }
    }
}

/// Either entity, as returned by the service
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Wishlist(Wishlist),
    Item(WishlistItem),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Wishlist(_) => EntityKind::Wishlist,
            Entity::Item(_) => EntityKind::Item,
        }
    }
}

/// Typed view of the wishlist fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WishlistForm {
    pub id: String,
    pub name: String,
    pub customer_id: Option<i64>,
}

/// Typed view of the item fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemForm {
    pub id: String,
    pub wishlist_id: String,
    pub product_id: Option<i64>,
    pub product_name: String,
    pub product_price: Option<f64>,
}

fn parse_integer(raw: &str) -> Option<i64> {
    i64::from_string(raw).ok()
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: FieldStore,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a field
    pub fn get(&self, field_id: &str) -> &str {
        self.fields.get(field_id)
    }

    /// Operator input
    pub fn set(&mut self, field_id: &'static str, value: impl Into<String>) {
        self.fields.set(field_id, value);
    }

    pub fn read_wishlist(&self) -> WishlistForm {
        WishlistForm {
            id: self.get(field::WISHLIST_ID).to_string(),
            name: self.get(field::WISHLIST_NAME).to_string(),
            customer_id: parse_integer(self.get(field::CUSTOMER_ID)),
        }
    }

    pub fn read_item(&self) -> ItemForm {
        ItemForm {
            id: self.get(field::ITEM_ID).to_string(),
            wishlist_id: self.get(field::WISHLIST_ID).to_string(),
            product_id: parse_integer(self.get(field::PRODUCT_ID)),
            product_name: self.get(field::PRODUCT_NAME).to_string(),
            product_price: parse_decimal(self.get(field::PRODUCT_PRICE)),
        }
    }

    /// Project an entity onto the form; absent fields keep their value
    pub fn write(&mut self, entity: &Entity) {
        match entity {
            Entity::Wishlist(wishlist) => self.write_wishlist(wishlist),
            Entity::Item(item) => self.write_item(item),
        }
    }

    pub fn write_wishlist(&mut self, wishlist: &Wishlist) {
        self.fields
            .set_opt(field::WISHLIST_ID, wishlist.id.map(|id| id.as_string()));
        self.fields
            .set_opt(field::WISHLIST_NAME, wishlist.name.clone());
        self.fields
            .set_opt(field::CUSTOMER_ID, wishlist.customer_id.map(|v| v.to_string()));
    }

    pub fn write_item(&mut self, item: &WishlistItem) {
        self.fields
            .set_opt(field::ITEM_ID, item.id.map(|id| id.as_string()));
        self.fields
            .set_opt(field::WISHLIST_ID, item.wishlist_id.map(|id| id.as_string()));
        self.fields
            .set_opt(field::PRODUCT_ID, item.product_id.map(|v| v.to_string()));
        self.fields
            .set_opt(field::PRODUCT_NAME, item.product_name.clone());
        self.fields
            .set_opt(field::PRODUCT_PRICE, item.product_price.map(|v| v.to_string()));
    }

    /// Reset business fields only
    pub fn clear(&mut self, kind: EntityKind) {
        self.fields.clear(kind.business_fields());
    }

    /// Reset business fields and the entity's own id
    pub fn clear_selection(&mut self, kind: EntityKind) {
        self.fields.clear(&[kind.id_field()]);
        self.clear(kind);
    }
}

#[cfg(test)]
impl FormState {
    /// True when every business field of `kind` is blank
    pub(crate) fn is_cleared(&self, kind: EntityKind) -> bool {
        kind.business_fields()
            .iter()
            .all(|id| self.fields.get(id).is_empty())
    }
}
