//! Core building blocks: RNG, configuration, deferred tasks.
//!
//! Nothing here knows about turns or picks. The game controller combines
//! these pieces into the match state machine.

pub mod config;
pub mod rng;
pub mod schedule;

pub use config::{MatchConfig, DEFAULT_RESOLUTION_DELAY, MAX_RESOLUTION_DELAY};
pub use rng::{GameRng, GameRngState};
pub use schedule::{ScheduledTask, Scheduler, SessionToken, TaskId, TaskKind};
