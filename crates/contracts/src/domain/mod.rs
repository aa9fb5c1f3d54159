pub mod a001_wishlist;
pub mod a002_wishlist_item;
pub mod common;
