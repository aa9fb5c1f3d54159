pub mod aggregate;

pub use aggregate::{Wishlist, WishlistId, WishlistPayload, WishlistSearchQuery};
