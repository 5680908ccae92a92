//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::config::BoardConfig;
use crate::form::FormLimits;
use crate::models::CardId;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<BoardConfig>,
    /// Drag state shared by every card
    pub dnd: DndSignals<CardId>,
    /// Card container; dragging is constrained to it
    pub container: NodeRef<Div>,
}

impl AppContext {
    pub fn new(config: BoardConfig) -> Self {
        let dnd = create_dnd_signals(config.drag_options());
        Self {
            config: StoredValue::new(config),
            dnd,
            container: NodeRef::new(),
        }
    }

    pub fn delete_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.cards.delete_delay_ms)
    }

    pub fn form_limits(&self) -> FormLimits {
        self.config.with_value(BoardConfig::form_limits)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
