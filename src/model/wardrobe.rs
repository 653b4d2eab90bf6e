//! Items and outfits.

use serde::{Deserialize, Serialize};

use super::{ItemId, OutfitId};

/// Wardrobe item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Top,
    Bottom,
    /// Dress or jumpsuit; functionally covers both the top and bottom role.
    Onepiece,
    Outerwear,
    Footwear,
    Accessory,
    Underlayer,
}

impl Category {
    /// Stable snake_case label, matching the serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Onepiece => "onepiece",
            Self::Outerwear => "outerwear",
            Self::Footwear => "footwear",
            Self::Accessory => "accessory",
            Self::Underlayer => "underlayer",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four categories a functional wardrobe needs covered.
///
/// Completeness and balance scoring work on these; `Onepiece` items count
/// toward both `Top` and `Bottom` in every effective-count computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreCategory {
    Top,
    Bottom,
    Footwear,
    Outerwear,
}

impl CoreCategory {
    /// All core categories, in scoring order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Footwear, Self::Outerwear];

    /// Stable snake_case label.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Footwear => "footwear",
            Self::Outerwear => "outerwear",
        }
    }
}

impl std::fmt::Display for CoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single wardrobe item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category: Category,
    /// Dominant color, when tagged.
    pub base_color: Option<String>,
    /// Pattern (solid, stripe, ...), when tagged.
    pub pattern: Option<String>,
    pub style_tags: Vec<String>,
    pub event_tags: Vec<String>,
    pub season_tags: Vec<String>,
    /// Relative warmth of the garment.
    pub warmth: i32,
    /// Formality from casual (0.0) to formal (1.0).
    pub formality: f32,
    /// Inactive items (archived, donated) are excluded from scoring.
    pub active: bool,
}

impl Item {
    /// Create an active item with a fresh id and no tags.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            id: ItemId::new(),
            category,
            base_color: None,
            pattern: None,
            style_tags: Vec::new(),
            event_tags: Vec::new(),
            season_tags: Vec::new(),
            warmth: 0,
            formality: 0.0,
            active: true,
        }
    }

    /// Set the base color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = Some(color.into());
        self
    }

    /// Set the pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the style tags.
    #[must_use]
    pub fn with_style_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the event tags.
    #[must_use]
    pub fn with_event_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the season tags.
    #[must_use]
    pub fn with_season_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.season_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// One item's placement inside an outfit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitItem {
    pub item_id: ItemId,
    /// Slot the item fills in the outfit (top, bottom, shoes, ...).
    pub slot: String,
}

/// A composed outfit: an ordered list of item placements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub id: OutfitId,
    pub items: Vec<OutfitItem>,
}

impl Outfit {
    /// Create an outfit with a fresh id from `(item, slot)` pairs.
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, S)>,
        S: Into<String>,
    {
        Self {
            id: OutfitId::new(),
            items: items
                .into_iter()
                .map(|(item_id, slot)| OutfitItem {
                    item_id,
                    slot: slot.into(),
                })
                .collect(),
        }
    }
}
