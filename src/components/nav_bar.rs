//! Navigation Bar Component
//!
//! Fixed top bar with the app mark, a live card count, and a dump of the
//! most recent log lines.

use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields};

fn log_dump(lines: &[String]) -> String {
    if lines.is_empty() {
        "No log lines yet".to_string()
    } else {
        lines.join("\n")
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_board_store();
    let card_count = move || {
        let collection = store.collection().read();
        if collection.is_empty() {
            "No cards".to_string()
        } else if collection.len() == 1 {
            "1 card".to_string()
        } else {
            format!("{} cards", collection.len())
        }
    };

    // Snapshot taken on open; reopen to refresh
    let (log_open, set_log_open) = signal(false);
    let log_lines = RwSignal::new(Vec::<String>::new());
    let toggle_log = move |_| {
        if !log_open.get_untracked() {
            log_lines.set(rolling_logger::recent_lines());
        }
        set_log_open.update(|open| *open = !*open);
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <span class="nav-logo" aria-hidden="true">"▦"</span>
                <span class="nav-title">"Card Board"</span>
            </div>
            <div class="nav-actions">
                <span class="nav-count">{card_count}</span>
                <button
                    type="button"
                    class="nav-log-btn"
                    aria-expanded=move || log_open.get().to_string()
                    on:click=toggle_log
                >
                    "Log"
                </button>
            </div>
            <Show when=move || log_open.get()>
                <pre class="nav-log">{move || log_lines.with(|lines| log_dump(lines))}</pre>
            </Show>
        </nav>
    }
}
