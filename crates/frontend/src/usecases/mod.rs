pub mod u001_wishlist_console;
