//! # magic-match
//!
//! Turn and match state machine for a memory-matching card game.
//!
//! Twelve cards lie face down: two of each of six templates. A player
//! turns over two cards per turn. A matching pair stays face up; a
//! mismatch flips back after a short delay. A turn counter tracks progress.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `GameController` owns every piece of mutable state
//!    and changes it only through explicit transition methods.
//!
//! 2. **Derived Presentation**: Card views are recomputed from controller
//!    state and hold nothing of their own.
//!
//! 3. **Session-Guarded Delays**: Turn ends are scheduled tasks stamped
//!    with the game's session token, so starting a new game can never be
//!    corrupted by the previous game's pending resolution.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, virtual-clock scheduler
//! - `cards`: Templates, dealt cards, the deck
//! - `game`: Turn phases, intents, the controller
//! - `view`: Card and board snapshots for the render layer
//! - `runtime`: tokio event loop with real resolution delays
//! - `error`: Error type

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod runtime;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, MatchConfig, Scheduler, SessionToken, TaskId, TaskKind,
    DEFAULT_RESOLUTION_DELAY, MAX_RESOLUTION_DELAY,
};

pub use crate::cards::{CardKey, CardTemplate, Catalog, Deck, DeckCard, CARD_BACK};

pub use crate::game::{ChoiceOutcome, GameController, IgnoredChoice, Intent, TurnPhase, TurnRecord};

pub use crate::view::{BoardView, CardFace, CardView};

pub use crate::runtime::{DriverHandle, GameDriver};

pub use crate::error::{MatchError, Result};
