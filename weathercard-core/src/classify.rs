//! Maps a free-text weather description onto the card's display categories.
//!
//! The upstream APIs return descriptions as prose ("light rain", "broken
//! clouds") with no guaranteed vocabulary, so categorization is keyword
//! based and falls back to a defined default for anything unrecognized.
//! Icon and effect are classified independently: the icon always resolves
//! to a glyph, while the ambient effect may be absent entirely.

/// Icon shown at the center of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Clear,
    Rain,
    Snow,
    Cloud,
}

impl IconCategory {
    /// Glyph rendered for this category.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            IconCategory::Clear => "☀️",
            IconCategory::Rain => "🌧️",
            IconCategory::Snow => "❄️",
            IconCategory::Cloud => "☁️",
        }
    }
}

/// Ambient particle animation behind the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectCategory {
    None,
    Rain,
    Snow,
    Cloud,
}

impl EffectCategory {
    /// Number of particle descriptors this effect spawns.
    #[must_use]
    pub const fn particle_count(self) -> usize {
        match self {
            EffectCategory::None => 0,
            EffectCategory::Rain => 50,
            EffectCategory::Snow => 30,
            EffectCategory::Cloud => 20,
        }
    }
}

/// Both category decisions for one description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub icon: IconCategory,
    pub effect: EffectCategory,
}

impl Classification {
    #[must_use]
    pub fn of(description: &str) -> Self {
        Self {
            icon: classify_icon(description),
            effect: classify_effect(description),
        }
    }
}

impl Default for Classification {
    /// The pair a renderer uses when no description is available at all.
    fn default() -> Self {
        Self { icon: IconCategory::Clear, effect: EffectCategory::None }
    }
}

/// Pick the icon for a description.
///
/// First match wins, so a description carrying several keywords resolves to
/// the earliest one checked. "clear"/"sunny" are checked before the
/// precipitation keywords, and unrecognized text falls back to `Clear`.
#[must_use]
pub fn classify_icon(description: &str) -> IconCategory {
    let desc = description.to_lowercase();

    if desc.contains("sunny") || desc.contains("clear") {
        IconCategory::Clear
    } else if desc.contains("rain") {
        IconCategory::Rain
    } else if desc.contains("snow") {
        IconCategory::Snow
    } else if desc.contains("cloud") {
        IconCategory::Cloud
    } else {
        IconCategory::Clear
    }
}

/// Pick the ambient effect for a description.
///
/// Same first-match-wins evaluation as [`classify_icon`], but with its own
/// predicate order: there is no clear-sky effect, so rain is checked first
/// and anything without a recognized keyword spawns nothing.
#[must_use]
pub fn classify_effect(description: &str) -> EffectCategory {
    let desc = description.to_lowercase();

    if desc.contains("rain") {
        EffectCategory::Rain
    } else if desc.contains("snow") {
        EffectCategory::Snow
    } else if desc.contains("cloud") {
        EffectCategory::Cloud
    } else {
        EffectCategory::None
    }
}
