//! Tag Color Select Component

use leptos::prelude::*;

use crate::models::{TagColor, TAG_COLORS};

#[component]
pub fn TagColorSelect(
    #[prop(into)] current_color: Signal<TagColor>,
    on_change: impl Fn(TagColor) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="form-input"
            prop:value=move || current_color.get().value().to_string()
            on:change=move |ev| on_change(TagColor::from_value(&event_target_value(&ev)))
        >
            {TAG_COLORS.iter().map(|(color, label)| view! {
                <option value=color.value()>{*label}</option>
            }).collect_view()}
        </select>
    }
}
