//! Error types for magic-match.
//!
//! Game-play inputs never fail: ignored clicks are reported through
//! [`ChoiceOutcome`](crate::game::ChoiceOutcome). Errors only come from
//! configuration and from talking to a driver that has shut down.

use std::time::Duration;

use thiserror::Error;

/// Result type alias using MatchError.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur while configuring or driving a match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("card catalog has no templates")]
    EmptyCatalog,

    #[error("card catalog lists {image} more than once")]
    DuplicateTemplate { image: String },

    #[error("card back {image:?} is empty or reused as a card front")]
    InvalidCardBack { image: String },

    #[error("resolution delay {delay:?} exceeds the {max:?} limit")]
    DelayTooLong { delay: Duration, max: Duration },

    #[error("game driver has stopped")]
    DriverStopped,
}
