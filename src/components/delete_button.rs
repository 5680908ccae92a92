//! Delete Button Component
//!
//! Round × button in a card corner.

use leptos::prelude::*;

/// Delete button that stays disabled once a delete is under way
///
/// # Arguments
/// * `button_class` - CSS class for the button
/// * `disabled` - True while the owning card is already being removed
/// * `on_delete` - Callback to execute on click
#[component]
pub fn DeleteButton(
    #[prop(into)] button_class: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class
            aria-label="Delete card"
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "×"
        </button>
    }
}
