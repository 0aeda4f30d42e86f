//! Per-turn state machine and the values that flow in and out of it.
//!
//! ```text
//! Idle --pick--> OneSelected --pick--> Resolving --delay--> Idle (turns + 1)
//!   ^                                                         |
//!   +------------------ new game (turns = 0) -----------------+
//! ```
//!
//! A new game forces `Idle` from any phase.

use serde::{Deserialize, Serialize};

use crate::cards::CardKey;
use crate::core::TaskId;

/// Where the current turn stands.
///
/// The two selection slots and the input lock are all derived from this
/// enum, so they cannot disagree with each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// No card picked.
    #[default]
    Idle,

    /// One card picked, waiting for the second.
    OneSelected { first: CardKey },

    /// Both cards picked and compared. Input is locked until `task` fires.
    Resolving {
        first: CardKey,
        second: CardKey,
        matched: bool,
        task: TaskId,
    },
}

impl TurnPhase {
    /// The first selection slot.
    #[must_use]
    pub fn choice1(&self) -> Option<CardKey> {
        match *self {
            TurnPhase::Idle => None,
            TurnPhase::OneSelected { first } | TurnPhase::Resolving { first, .. } => Some(first),
        }
    }

    /// The second selection slot.
    #[must_use]
    pub fn choice2(&self) -> Option<CardKey> {
        match *self {
            TurnPhase::Resolving { second, .. } => Some(second),
            _ => None,
        }
    }

    /// Is input locked? True exactly while a resolution is pending.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, TurnPhase::Resolving { .. })
    }

    /// Does either slot hold this card?
    #[must_use]
    pub fn is_selected(&self, key: CardKey) -> bool {
        self.choice1() == Some(key) || self.choice2() == Some(key)
    }
}

/// Something the player asked for through the render layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// A face-down card was clicked.
    Select(CardKey),
    /// The "New Game" button was pressed.
    NewGame,
}

/// Why a pick had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredChoice {
    /// A resolution is pending.
    Locked,
    /// The key does not belong to the current deck.
    UnknownCard,
    /// The card already sits in the first slot.
    AlreadySelected,
    /// The card's pair was found earlier.
    AlreadyMatched,
}

/// Result of handling a pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The card filled the first slot.
    First,
    /// The card filled the second slot and the pair was compared.
    Second { matched: bool },
    /// Nothing changed.
    Ignored(IgnoredChoice),
}

/// One completed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: u32,
    pub first: CardKey,
    pub second: CardKey,
    pub matched: bool,
}
