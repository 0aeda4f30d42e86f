//! Render boundary.
//!
//! The controller is drawn through [`BoardView`] snapshots made of
//! [`CardView`]s. Each card is a pure function of its card data and two
//! flags:
//!
//! - `flipped`: the card is either pick, or already matched
//! - `disabled`: a resolution is pending
//!
//! A click on a face-down, enabled card becomes
//! [`Intent::Select`](crate::game::Intent::Select). Everything else is
//! dropped without an error.

pub mod board;
pub mod card;

pub use board::BoardView;
pub use card::{CardFace, CardView};
