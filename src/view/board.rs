//! Board snapshot handed to the render layer.

use serde::{Deserialize, Serialize};

use super::card::CardView;
use crate::cards::CardKey;
use crate::core::SessionToken;
use crate::game::{GameController, Intent};

/// Everything needed to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Game these cards belong to.
    pub session: SessionToken,

    /// Cards in table order.
    pub cards: Vec<CardView>,

    /// Completed turns.
    pub turns: u32,

    /// Input lock.
    pub locked: bool,

    /// Image shown on every face-down card.
    pub card_back: String,

    /// Pairs found so far.
    pub matched_pairs: usize,

    /// Pairs in the deck; the game is won when `matched_pairs` reaches it.
    pub total_pairs: usize,
}

impl BoardView {
    /// Derive the board from the controller's current state.
    #[must_use]
    pub fn capture(game: &GameController) -> Self {
        let locked = game.is_locked();
        let cards = game
            .deck()
            .iter()
            .map(|card| CardView::new(card.clone(), game.is_flipped(card.key), locked))
            .collect();

        Self {
            session: game.session(),
            cards,
            turns: game.turns(),
            locked,
            card_back: game.config().card_back.clone(),
            matched_pairs: game.deck().matched_pairs(),
            total_pairs: game.deck().total_pairs(),
        }
    }

    /// View of one card.
    #[must_use]
    pub fn card(&self, key: CardKey) -> Option<&CardView> {
        self.cards.iter().find(|view| view.key() == key)
    }

    /// Click a card by key. Unknown keys produce nothing.
    #[must_use]
    pub fn click(&self, key: CardKey) -> Option<Intent> {
        self.card(key).and_then(CardView::click)
    }

    /// Cards currently face up.
    pub fn face_up(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter(|view| view.flipped)
    }
}
