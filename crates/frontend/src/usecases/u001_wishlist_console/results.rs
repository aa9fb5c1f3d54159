//! Result list renderer: search results as a table model
//!
//! Rows are identified by position (`row_<index>`), not by entity id.

use contracts::domain::a001_wishlist::Wishlist;
use contracts::domain::a002_wishlist_item::WishlistItem;

use super::form_state::{Entity, EntityKind};

/// An entity that can be shown as a result row
pub trait TableEntity: Clone {
    const KIND: EntityKind;

    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    fn into_entity(self) -> Entity;
}

fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl TableEntity for Wishlist {
    const KIND: EntityKind = EntityKind::Wishlist;

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Customer ID"]
    }

    fn cells(&self) -> Vec<String> {
        vec![cell(&self.id), cell(&self.name), cell(&self.customer_id)]
    }

    fn into_entity(self) -> Entity {
        Entity::Wishlist(self)
    }
}

impl TableEntity for WishlistItem {
    const KIND: EntityKind = EntityKind::Item;

    fn headers() -> &'static [&'static str] {
        &["ID", "Wishlist ID", "Product ID", "Product Name", "Product Price"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            cell(&self.id),
            cell(&self.wishlist_id),
            cell(&self.product_id),
            cell(&self.product_name),
            cell(&self.product_price),
        ]
    }

    fn into_entity(self) -> Entity {
        Entity::Item(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub row_id: String,
    pub cells: Vec<String>,
    pub entity: Entity,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    pub kind: Option<EntityKind>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Render entities in input order
    pub fn render<T: TableEntity>(entities: Vec<T>) -> Self {
        let rows = entities
            .into_iter()
            .enumerate()
            .map(|(index, entity)| ResultRow {
                row_id: format!("row_{}", index),
                cells: entity.cells(),
                entity: entity.into_entity(),
            })
            .collect();

        Self {
            kind: Some(T::KIND),
            headers: T::headers().to_vec(),
            rows,
        }
    }

    /// The entity a search implicitly selects
    pub fn first(&self) -> Option<&Entity> {
        self.rows.first().map(|row| &row.entity)
    }

    pub fn row(&self, index: usize) -> Option<&ResultRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_wishlist::WishlistId;

    fn wishlist(id: i64, name: &str) -> Wishlist {
        Wishlist {
            id: Some(WishlistId(id)),
            name: Some(name.to_string()),
            customer_id: Some(42),
        }
    }

    #[test]
    fn test_render_wishlists_in_order() {
        let table = ResultTable::render(vec![
            wishlist(7, "Birthday"),
            wishlist(3, "Wedding"),
        ]);
        assert_eq!(table.kind, Some(EntityKind::Wishlist));
        assert_eq!(table.headers, vec!["ID", "Name", "Customer ID"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].row_id, "row_0");
        assert_eq!(table.rows[0].cells, vec!["7", "Birthday", "42"]);
        assert_eq!(table.rows[1].row_id, "row_1");
        assert_eq!(table.rows[1].cells[0], "3");
        assert_eq!(
            table.first(),
            Some(&Entity::Wishlist(wishlist(7, "Birthday")))
        );
    }

    #[test]
    fn test_render_empty() {
        let table = ResultTable::render(Vec::<WishlistItem>::new());
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), 5);
        assert!(table.first().is_none());
    }

    #[test]
    fn test_absent_item_fields_render_blank() {
        let table = ResultTable::render(vec![WishlistItem {
            wishlist_id: Some(WishlistId(5)),
            product_id: Some(100),
            ..Default::default()
        }]);
        assert_eq!(table.rows[0].cells, vec!["", "5", "100", "", ""]);
    }
}
