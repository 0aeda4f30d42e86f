//! Match configuration.
//!
//! Hosts configure a match at startup by providing a `MatchConfig`:
//! - the card catalog and the shared card-back image
//! - how long a completed pair stays face up before the turn resets
//! - an optional RNG seed for reproducible deals
//!
//! `MatchConfig::default()` is the reference game: six templates, a
//! one-second resolution delay and an entropy seed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{Catalog, CARD_BACK};
use crate::error::{MatchError, Result};

/// Delay between the second pick and the end of the turn.
pub const DEFAULT_RESOLUTION_DELAY: Duration = Duration::from_millis(1000);

/// Longest resolution delay a configuration may ask for.
pub const MAX_RESOLUTION_DELAY: Duration = Duration::from_secs(3600);

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Card templates; each is dealt twice.
    pub catalog: Catalog,

    /// Image shown on every face-down card.
    pub card_back: String,

    /// How long both picks stay visible before the turn resets.
    pub resolution_delay: Duration,

    /// RNG seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::standard(),
            card_back: CARD_BACK.to_string(),
            resolution_delay: DEFAULT_RESOLUTION_DELAY,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create the reference configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Replace the card catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the card-back image.
    #[must_use]
    pub fn with_card_back(mut self, image: impl Into<String>) -> Self {
        self.card_back = image.into();
        self
    }

    /// Check the configuration before a controller is built from it.
    ///
    /// The card back must be a real image and must not double as a front,
    /// and the resolution delay may not exceed [`MAX_RESOLUTION_DELAY`].
    pub fn validate(&self) -> Result<()> {
        if self.resolution_delay > MAX_RESOLUTION_DELAY {
            return Err(MatchError::DelayTooLong {
                delay: self.resolution_delay,
                max: MAX_RESOLUTION_DELAY,
            });
        }

        let back = self.card_back.trim();
        if back.is_empty() || self.catalog.iter().any(|t| t.image == back) {
            return Err(MatchError::InvalidCardBack {
                image: self.card_back.clone(),
            });
        }
        Ok(())
    }
}
