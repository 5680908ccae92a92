//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use ulid::Ulid;

use crate::clock;
use crate::config::BoardConfig;
use crate::models::{sample_cards, Card, CardId, NewCard};

/// Ordered card sequence with ids assigned on append
#[derive(Clone, Debug, Default)]
pub struct CardCollection {
    cards: Vec<Card>,
    last_id: Option<Ulid>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the end and return the new card's id
    pub fn append(&mut self, card: NewCard) -> CardId {
        self.append_at(card, clock::now_millis(), random_bits())
    }

    fn append_at(&mut self, card: NewCard, millis: u64, random: u128) -> CardId {
        let id = self.next_id(millis, random);
        self.cards.push(Card::from_new(id, card));
        id
    }

    /// Ids strictly increase, even within the same millisecond or if the clock steps back
    fn next_id(&mut self, millis: u64, random: u128) -> CardId {
        let candidate = Ulid::from_parts(millis, random);
        let id = match self.last_id {
            Some(last) if candidate <= last => last.increment().unwrap_or(candidate),
            _ => candidate,
        };
        self.last_id = Some(id);
        CardId(id)
    }

    /// Remove the card with `id`; returns false if it was not present
    pub fn remove(&mut self, id: CardId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        self.cards.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn random_bits() -> u128 {
    let mut buf = [0u8; 16];
    if let Err(e) = getrandom::getrandom(&mut buf) {
        // Monotonic increment in next_id still keeps ids unique
        log::warn!("[CARDS] no randomness available for ids: {}", e);
    }
    u128::from_le_bytes(buf)
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Cards in display order
    pub collection: CardCollection,
    /// Whether the add-card form is shown
    pub form_open: bool,
}

impl BoardState {
    pub fn new(config: &BoardConfig) -> Self {
        let mut collection = CardCollection::new();
        if config.cards.seed_sample_cards {
            for card in sample_cards() {
                collection.append(card);
            }
        }
        Self {
            collection,
            form_open: false,
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a card to the store
pub fn store_append_card(store: &BoardStore, card: NewCard) -> CardId {
    let id = store.collection().write().append(card);
    log::info!("[CARDS] added card {}", id);
    id
}

/// Remove a card from the store by ID
pub fn store_remove_card(store: &BoardStore, id: CardId) -> bool {
    let removed = store.collection().write().remove(id);
    if removed {
        log::info!("[CARDS] removed card {}", id);
    } else {
        log::debug!("[CARDS] card {} already gone", id);
    }
    removed
}

pub fn store_open_form(store: &BoardStore) {
    *store.form_open().write() = true;
}

pub fn store_close_form(store: &BoardStore) {
    *store.form_open().write() = false;
}
