//! The match state machine.
//!
//! `GameController` is the only owner of mutable game state. The render
//! layer reads [`BoardView`](crate::view::BoardView) snapshots from it and
//! sends back [`Intent`]s.

pub mod controller;
pub mod phase;

pub use controller::GameController;
pub use phase::{ChoiceOutcome, IgnoredChoice, Intent, TurnPhase, TurnRecord};
