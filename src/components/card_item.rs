//! Card Item Component
//!
//! A single draggable card with its delete affordance.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, Offset};

use crate::components::{CardFooter, DeleteButton};
use crate::context::use_app_context;
use crate::models::{Card, DeleteLatch};
use crate::object_url;
use crate::store::{store_remove_card, use_board_store};

#[component]
pub fn CardItem(card: Card) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();

    let id = card.id;
    let delay_ms = ctx.delete_delay_ms();
    let latch = RwSignal::new(DeleteLatch::default());
    let offset = RwSignal::new(Offset::default());
    let preview = StoredValue::new(card.download.as_ref().and_then(|d| d.preview.clone()));

    let on_mousedown = make_on_mousedown(ctx.dnd, id, offset, ctx.container);
    let is_dragging = move || ctx.dnd.dragging_id.get() == Some(id);
    let is_deleting = Signal::derive(move || latch.get().is_triggered());

    // Removal waits for the exit transition; later clicks are ignored
    let on_delete = Callback::new(move |_: ()| {
        if !latch.try_update(DeleteLatch::trigger).unwrap_or(false) {
            return;
        }
        log::debug!("[CARDS] deleting card {} in {}ms", id, delay_ms);
        let url = preview.get_value();
        Timeout::new(delay_ms, move || {
            if store_remove_card(&store, id) {
                if let Some(url) = url {
                    object_url::release(&url);
                }
            }
        })
        .forget();
    });

    let card_class = move || {
        let mut c = String::from("card");
        if is_dragging() { c.push_str(" dragging"); }
        if is_deleting.get() { c.push_str(" exiting"); }
        c
    };
    let card_style = move || {
        let o = offset.get();
        format!("transform: translate({}px, {}px);", o.x, o.y)
    };

    let title_class = format!("card-title {}", card.title_color.class());
    let icon = card.icon.glyph();
    let title = card.display_title().to_string();
    let description = card.display_description().to_string();

    view! {
        <div class=card_class style=card_style on:mousedown=on_mousedown>
            <DeleteButton button_class="card-delete-btn" disabled=is_deleting on_delete=on_delete />

            <div class="card-header">
                <span class="card-icon">{icon}</span>
                <h2 class=title_class>{title}</h2>
            </div>
            <hr class="card-divider" />

            <p class="card-description">{description}</p>

            <CardFooter card=card />
        </div>
    }
}
