use crate::shared::config::Config;
use crate::usecases::u001_wishlist_console::WishlistConsole;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    view! {
        <WishlistConsole config=config />
    }
}
