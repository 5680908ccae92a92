//! Foreground Component
//!
//! The card container. Cards are rendered keyed by id and can be dragged
//! anywhere inside it.

use leptos::prelude::*;
use leptos_dragdrop::bind_global_mouseup;

use crate::components::CardItem;
use crate::context::use_app_context;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn Foreground() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();

    bind_global_mouseup(ctx.dnd, |card_id, rest| {
        log::debug!("[DND] card {} released at ({:.0}, {:.0})", card_id, rest.x, rest.y);
    });

    let cards = move || store.collection().read().to_vec();

    view! {
        <div class="foreground" node_ref=ctx.container>
            <For
                each=cards
                key=|card| card.id
                children=move |card| view! { <CardItem card=card /> }
            />
        </div>
    }
}
