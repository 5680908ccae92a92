//! Icon Selector Component
//!
//! Button rows for the card icon and title colour.

use leptos::prelude::*;

use crate::models::{CardIcon, TitleColor, CARD_ICONS, TITLE_COLORS};

#[component]
pub fn IconSelector(
    #[prop(into)] current_icon: Signal<CardIcon>,
    #[prop(into)] current_title_color: Signal<TitleColor>,
    on_icon: impl Fn(CardIcon) + Copy + 'static,
    on_title_color: impl Fn(TitleColor) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="icon-selector">
            {CARD_ICONS.iter().map(|(icon, label)| {
                let icon = *icon;
                let is_selected = move || current_icon.get() == icon;
                view! {
                    <button
                        type="button"
                        title=*label
                        class=move || if is_selected() { "icon-btn active" } else { "icon-btn" }
                        on:click=move |_| on_icon(icon)
                    >
                        {icon.glyph()}
                    </button>
                }
            }).collect_view()}
        </div>
        <div class="title-color-selector">
            {TITLE_COLORS.iter().map(|(color, label)| {
                let color = *color;
                let is_selected = move || current_title_color.get() == color;
                view! {
                    <button
                        type="button"
                        class=move || {
                            let state = if is_selected() { "active" } else { "" };
                            format!("color-btn {} {}", color.class(), state)
                        }
                        on:click=move |_| on_title_color(color)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
