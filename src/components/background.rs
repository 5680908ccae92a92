//! Background Component
//!
//! Hero panel behind the cards.

use leptos::prelude::*;

#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div class="background">
            <div class="background-hero">
                <h1 class="hero-title">"Hello, World!"</h1>
            </div>
        </div>
    }
}
