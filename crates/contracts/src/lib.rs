//! Wire contracts shared with the Wishlist REST service
//!
//! Every type here mirrors a JSON shape of the `/api` contract: entities as the
//! service returns them, payloads as the console sends them.

pub mod domain;
pub mod shared;
pub mod system;
