//! Add Button Component
//!
//! Floating action button that opens the add-card form.

use leptos::prelude::*;

use crate::store::{store_open_form, use_board_store};

#[component]
pub fn AddButton() -> impl IntoView {
    let store = use_board_store();

    view! {
        <button
            type="button"
            class="add-button"
            aria-labelledby="add-item-label"
            on:click=move |_| store_open_form(&store)
        >
            <span id="add-item-label" class="sr-only">"Add New Item"</span>
            <span class="add-button-icon">"+"</span>
        </button>
    }
}
