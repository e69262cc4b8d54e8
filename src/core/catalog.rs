//! The catalog of known language/color pairs.
//!
//! Every round draws its selection from a `Catalog`. The default catalog is
//! the fixed set of ten pairs the game ships with; custom catalogs can be
//! built for variants and tests, as long as names are unique.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// One language and the color the player must associate with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageColorPair {
    /// Language name, matched case-sensitively.
    pub name: String,
    /// Named color, matched case-insensitively.
    pub color: String,
}

impl LanguageColorPair {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Case-insensitive color comparison.
    #[must_use]
    pub fn color_matches(&self, guess: &str) -> bool {
        self.color.to_lowercase() == guess.to_lowercase()
    }
}

const DEFAULT_PAIRS: [(&str, &str); 10] = [
    ("JavaScript", "yellow"),
    ("Python", "blue"),
    ("Java", "orange"),
    ("C++", "navy"),
    ("Ruby", "red"),
    ("Go", "cyan"),
    ("Rust", "black"),
    ("Swift", "coral"),
    ("Kotlin", "purple"),
    ("TypeScript", "dodgerblue"),
];

/// Fixed universe of pairs a selection is drawn from.
///
/// ## Example
///
/// ```
/// use color_recall::core::Catalog;
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.len(), 10);
/// assert_eq!(catalog.get("Go").unwrap().color, "cyan");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<LanguageColorPair>,
}

impl Catalog {
    /// The ten pairs the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: DEFAULT_PAIRS
                .iter()
                .map(|&(name, color)| LanguageColorPair::new(name, color))
                .collect(),
        }
    }

    /// Build a catalog from arbitrary pairs.
    ///
    /// Rejects empty or duplicate names. Order is preserved.
    pub fn new(entries: Vec<LanguageColorPair>) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();
        for entry in &entries {
            if entry.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Check the catalog can supply a round of `selection_size` entries.
    pub fn ensure_supports(&self, selection_size: usize) -> Result<(), CatalogError> {
        if self.entries.len() < selection_size {
            return Err(CatalogError::TooSmall {
                available: self.entries.len(),
                required: selection_size,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LanguageColorPair> {
        self.entries.iter().find(|e| e.name == name)
    }

    #[must_use]
    pub fn entries(&self) -> &[LanguageColorPair] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            entries: Vec<LanguageColorPair>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Catalog::new(raw.entries).map_err(serde::de::Error::custom)
    }
}
