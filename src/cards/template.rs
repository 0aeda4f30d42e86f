//! Card templates - the static artwork catalog.
//!
//! A `CardTemplate` names one piece of card-front artwork. Every deal
//! places two instances of each template on the table; pairing is decided
//! by the template's image alone.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Image shown on the back of every card.
pub const CARD_BACK: &str = "/img/cover.png";

/// Artwork used by [`Catalog::standard`].
pub const STANDARD_IMAGES: [&str; 6] = [
    "/img/helmet-1.png",
    "/img/potion-1.png",
    "/img/shield-1.png",
    "/img/scroll-1.png",
    "/img/sword-1.png",
    "/img/ring-1.png",
];

/// Immutable catalog entry for one card front.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Image source. Two cards form a pair iff their images are equal.
    pub image: String,
}

impl CardTemplate {
    /// Create a template for the given image.
    #[must_use]
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into() }
    }
}

/// Ordered, validated set of card templates.
///
/// A catalog is never empty and never lists the same image twice, so a
/// dealt deck always holds exactly two cards per image.
///
/// ```
/// use magic_match::cards::Catalog;
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.len(), 6);
/// assert_eq!(catalog.deck_size(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardTemplate>", into = "Vec<CardTemplate>")]
pub struct Catalog {
    templates: Vec<CardTemplate>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicated artwork.
    pub fn new(templates: Vec<CardTemplate>) -> Result<Self> {
        if templates.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }

        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.image == template.image) {
                return Err(MatchError::DuplicateTemplate {
                    image: template.image.clone(),
                });
            }
        }

        Ok(Self { templates })
    }

    /// The six-template catalog the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            templates: STANDARD_IMAGES.iter().map(|&image| CardTemplate::new(image)).collect(),
        }
    }

    /// Number of distinct templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True only for a catalog with no templates, which `new` and
    /// deserialization reject, so a built catalog never reports empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Number of cards in a deck dealt from this catalog.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.templates.len() * 2
    }

    /// Iterate over templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.templates.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<CardTemplate>> for Catalog {
    type Error = MatchError;

    fn try_from(templates: Vec<CardTemplate>) -> Result<Self> {
        Self::new(templates)
    }
}

impl From<Catalog> for Vec<CardTemplate> {
    fn from(catalog: Catalog) -> Self {
        catalog.templates
    }
}
