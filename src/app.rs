//! Card Board App
//!
//! Root component: nav bar, hero background, card foreground, add button,
//! and the add-card form when open.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddButton, AddCardForm, Background, Foreground, NavBar};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::store::{BoardState, BoardStateStoreFields};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // State
    let store = Store::new(BoardState::new(&config));
    log::info!(
        "[APP] starting with {} cards",
        store.collection().read_untracked().len()
    );

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(config));

    let form_open = move || *store.form_open().read();

    view! {
        <div class="app-layout">
            <NavBar />
            <Background />
            <Foreground />
            <AddButton />
            <Show when=form_open>
                <AddCardForm />
            </Show>
        </div>
    }
}
