//! Card presentation: what one card looks like and what a click means.
//!
//! A `CardView` has no state of its own. It is rebuilt from the controller
//! after every change and only answers two questions: which face is up,
//! and does a click turn into an intent.

use serde::{Deserialize, Serialize};

use crate::cards::{CardKey, DeckCard};
use crate::game::Intent;

/// The face a card currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Front,
    Back,
}

/// One card as the render layer should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub card: DeckCard,

    /// Front face up: the card is picked or matched.
    pub flipped: bool,

    /// Clicks are swallowed while a resolution is pending.
    pub disabled: bool,
}

impl CardView {
    /// Describe a card given its externally derived flags.
    #[must_use]
    pub fn new(card: DeckCard, flipped: bool, disabled: bool) -> Self {
        Self {
            card,
            flipped,
            disabled,
        }
    }

    /// Key of the underlying card.
    #[must_use]
    pub fn key(&self) -> CardKey {
        self.card.key
    }

    /// Which face is up.
    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.flipped {
            CardFace::Front
        } else {
            CardFace::Back
        }
    }

    /// Image to draw, given the shared card-back image.
    #[must_use]
    pub fn image<'a>(&'a self, card_back: &'a str) -> &'a str {
        match self.face() {
            CardFace::Front => &self.card.image,
            CardFace::Back => card_back,
        }
    }

    /// Translate a click into an intent.
    ///
    /// Only the back face is clickable, and only while enabled.
    #[must_use]
    pub fn click(&self) -> Option<Intent> {
        (self.face() == CardFace::Back && !self.disabled).then(|| Intent::Select(self.card.key))
    }
}
