//! Card system: templates, dealt instances, and the deck.
//!
//! ## Key Types
//!
//! - `CardTemplate`: One piece of front artwork
//! - `Catalog`: Validated set of templates (six in the standard game)
//! - `CardKey`: Identity of one dealt card
//! - `DeckCard`: Runtime card state (image, matched flag)
//! - `Deck`: Every card on the table, in order
//!
//! Pair membership is decided by image. Keys only tell instances apart.

pub mod deck;
pub mod instance;
pub mod template;

pub use deck::{Deck, KeyAllocator};
pub use instance::{CardKey, DeckCard};
pub use template::{CardTemplate, Catalog, CARD_BACK, STANDARD_IMAGES};
