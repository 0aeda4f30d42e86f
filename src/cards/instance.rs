//! Deck cards - runtime card state.
//!
//! `DeckCard` is one face-down card on the table. It carries the image it
//! inherited from its template, whether its pair has been found, and a
//! `CardKey` that identifies this particular instance.
//!
//! Keys are used for identity only. Pairing always compares images.

use serde::{Deserialize, Serialize};

use super::template::CardTemplate;

/// Unique identity of one dealt card.
///
/// Keys are handed out by a controller-wide allocator and never reused,
/// so a key from a discarded deck cannot name a card in the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardKey(pub u64);

impl CardKey {
    /// Create a card key.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card instance in the current deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckCard {
    /// Identity of this instance.
    pub key: CardKey,

    /// Front image, inherited from the template.
    pub image: String,

    /// Set once the pair is found. Never cleared.
    pub matched: bool,
}

impl DeckCard {
    /// Create an unmatched card from a template.
    #[must_use]
    pub fn from_template(key: CardKey, template: &CardTemplate) -> Self {
        Self {
            key,
            image: template.image.clone(),
            matched: false,
        }
    }

    /// Do two cards show the same artwork?
    #[must_use]
    pub fn pairs_with(&self, other: &DeckCard) -> bool {
        self.image == other.image
    }
}
