use leptos::prelude::*;

use super::controller::Action;
use super::form_state::field;
use super::results::ResultTable;
use super::view_model::WishlistConsoleViewModel;
use crate::shared::config::Config;
use crate::shared::icons::icon;

fn text_field(
    vm: &WishlistConsoleViewModel,
    field_id: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = vm.field(field_id);
    let vm = vm.clone();
    view! {
        <div class="form-group">
            <label for=field_id>{label}</label>
            <input
                type="text"
                id=field_id
                prop:value=value
                on:input=move |ev| vm.set_field(field_id, event_target_value(&ev))
                placeholder=placeholder
            />
        </div>
    }
}

fn action_button(
    vm: &WishlistConsoleViewModel,
    element_id: &'static str,
    label: &'static str,
    icon_name: &'static str,
    class: &'static str,
    action: Action,
) -> impl IntoView {
    let vm = vm.clone();
    view! {
        <button id=element_id class=class on:click=move |_| vm.dispatch(action)>
            {icon(icon_name)}
            {label}
        </button>
    }
}

#[component]
fn ResultsTable(
    #[prop(into)] results: Signal<ResultTable>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div id="search_results" class="table">
            {move || {
                let table = results.get();
                if table.kind.is_none() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {table.headers.iter().map(|h| view! {
                                    <th class="table__header-cell">{*h}</th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {table.rows.into_iter().enumerate().map(|(index, row)| view! {
                                <tr
                                    id=row.row_id
                                    class="table__row"
                                    on:click=move |_| on_select.run(index)
                                >
                                    {row.cells.into_iter().map(|cell| view! {
                                        <td class="table__cell">{cell}</td>
                                    }).collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}

#[component]
pub fn WishlistConsole(config: Config) -> impl IntoView {
    let vm = WishlistConsoleViewModel::new(&config);

    let on_select = {
        let vm = vm.clone();
        Callback::new(move |index: usize| vm.dispatch(Action::SelectRow(index)))
    };

    view! {
        <div class="page wishlist-console">
            <div class="header">
                <div class="header__content">
                    {icon("heart")}
                    <h1 class="header__title">{"Wishlist Service"}</h1>
                </div>
                <div class="header__actions">
                    {action_button(&vm, "health-btn", "Check health", "activity", "button button--secondary", Action::CheckHealth)}
                </div>
            </div>

            <div id="flash_message" class="status-line">{vm.status()}</div>

            <div class="details-form">
                <h3>{"Wishlist"}</h3>
                {text_field(&vm, field::WISHLIST_ID, "Wishlist ID", "assigned by the service")}
                {text_field(&vm, field::WISHLIST_NAME, "Name", "")}
                {text_field(&vm, field::CUSTOMER_ID, "Customer ID", "")}
                <div class="details-actions">
                    {action_button(&vm, "create-btn", "Create", "plus", "button button--primary", Action::CREATE_WISHLIST)}
                    {action_button(&vm, "retrieve-btn", "Retrieve", "download", "button button--secondary", Action::RETRIEVE_WISHLIST)}
                    {action_button(&vm, "update-btn", "Update", "save", "button button--secondary", Action::UPDATE_WISHLIST)}
                    {action_button(&vm, "delete-btn", "Delete", "delete", "button button--danger", Action::DELETE_WISHLIST)}
                    {action_button(&vm, "search-btn", "Search", "search", "button button--secondary", Action::SEARCH_WISHLISTS)}
                    {action_button(&vm, "clear-wishlist-btn", "Empty wishlist", "empty", "button button--danger", Action::CLEAR_WISHLIST_CONTENTS)}
                    {action_button(&vm, "clear-btn", "Clear", "cancel", "button button--secondary", Action::CLEAR_WISHLIST_FORM)}
                </div>
            </div>

            <div class="details-form">
                <h3>{"Item"}</h3>
                {text_field(&vm, field::ITEM_ID, "Item ID", "assigned by the service")}
                {text_field(&vm, field::PRODUCT_ID, "Product ID", "")}
                {text_field(&vm, field::PRODUCT_NAME, "Product Name", "required")}
                {text_field(&vm, field::PRODUCT_PRICE, "Product Price", "0.00")}
                <div class="details-actions">
                    {action_button(&vm, "create-item-btn", "Create", "plus", "button button--primary", Action::CREATE_ITEM)}
                    {action_button(&vm, "retrieve-item-btn", "Retrieve", "download", "button button--secondary", Action::RETRIEVE_ITEM)}
                    {action_button(&vm, "update-item-btn", "Update", "save", "button button--secondary", Action::UPDATE_ITEM)}
                    {action_button(&vm, "delete-item-btn", "Delete", "delete", "button button--danger", Action::DELETE_ITEM)}
                    {action_button(&vm, "search-item-btn", "Search", "search", "button button--secondary", Action::SEARCH_ITEMS)}
                    {action_button(&vm, "clear-item-btn", "Clear", "cancel", "button button--secondary", Action::CLEAR_ITEM_FORM)}
                </div>
            </div>

            <ResultsTable results=vm.results() on_select=on_select />
        </div>
    }
}
