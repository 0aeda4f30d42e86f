//! The deck: every card on the table for one game.
//!
//! A deck is dealt from a [`Catalog`] by taking each template twice,
//! giving every card a fresh [`CardKey`] and shuffling the result. Cards
//! are held in a persistent `im::Vector` so board snapshots are O(1) to
//! clone, with an `FxHashMap` index for key lookups.

use im::Vector;
use rustc_hash::FxHashMap;

use super::instance::{CardKey, DeckCard};
use super::template::Catalog;
use crate::core::GameRng;

/// Hands out card keys that are unique for the lifetime of a controller.
#[derive(Clone, Debug, Default)]
pub struct KeyAllocator {
    next: u64,
}

impl KeyAllocator {
    /// Create an allocator starting at key 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new key.
    pub fn alloc(&mut self) -> CardKey {
        let key = CardKey(self.next);
        self.next += 1;
        key
    }
}

/// Ordered set of dealt cards.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vector<DeckCard>,
    index: FxHashMap<CardKey, usize>,
}

impl Deck {
    /// Deal a fresh deck: two unmatched cards per template, shuffled.
    pub fn deal(catalog: &Catalog, rng: &mut GameRng, keys: &mut KeyAllocator) -> Self {
        let mut cards: Vec<DeckCard> = catalog
            .iter()
            .flat_map(|template| [template, template])
            .map(|template| DeckCard::from_template(keys.alloc(), template))
            .collect();

        rng.shuffle(&mut cards);

        Self::from_cards(cards)
    }

    /// Build a deck from cards in table order.
    ///
    /// Keys must be distinct; a repeated key shadows the earlier card in
    /// lookups.
    #[must_use]
    pub fn from_cards(cards: Vec<DeckCard>) -> Self {
        let index = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.key, pos))
            .collect();

        Self {
            cards: cards.into_iter().collect(),
            index,
        }
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True before the first deal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in table order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckCard> {
        self.cards.iter()
    }

    /// Look up a card by key.
    #[must_use]
    pub fn get(&self, key: CardKey) -> Option<&DeckCard> {
        self.index.get(&key).and_then(|&pos| self.cards.get(pos))
    }

    /// Does this deck hold a card with the given key?
    #[must_use]
    pub fn contains(&self, key: CardKey) -> bool {
        self.index.contains_key(&key)
    }

    /// Position of a card in table order.
    #[must_use]
    pub fn position(&self, key: CardKey) -> Option<usize> {
        self.index.get(&key).copied()
    }

    /// Mark the cards with the given keys as matched.
    ///
    /// Returns how many cards changed from unmatched to matched. Keys not
    /// in this deck are skipped, and matched cards stay matched.
    pub fn mark_matched(&mut self, keys: &[CardKey]) -> usize {
        let mut changed = 0;
        for key in keys {
            let Some(&pos) = self.index.get(key) else {
                continue;
            };
            if let Some(card) = self.cards.get_mut(pos) {
                if !card.matched {
                    card.matched = true;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Number of cards showing the given image.
    #[must_use]
    pub fn count_of(&self, image: &str) -> usize {
        self.cards.iter().filter(|card| card.image == image).count()
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / 2
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Has every pair been found?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|card| card.matched)
    }
}
