//! Round selection: the pairs shown to the player for one session.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, LanguageColorPair};
use super::rng::RandomSource;

/// Ordered, immutable set of distinct pairs drawn for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LanguageColorPair>", into = "Vec<LanguageColorPair>")]
pub struct RoundSelection {
    entries: Vec<LanguageColorPair>,
    index: FxHashMap<String, usize>,
}

impl From<Vec<LanguageColorPair>> for RoundSelection {
    fn from(entries: Vec<LanguageColorPair>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<RoundSelection> for Vec<LanguageColorPair> {
    fn from(selection: RoundSelection) -> Self {
        selection.entries
    }
}

impl RoundSelection {
    /// Draw `size` distinct entries from the catalog without replacement.
    ///
    /// Runs a partial Fisher-Yates shuffle over the catalog, so when
    /// `size == catalog.len()` the result is a full uniform shuffle.
    /// `size` is clamped to the catalog length; callers validate it up
    /// front with `Catalog::ensure_supports`.
    pub fn draw(catalog: &Catalog, size: usize, rng: &mut dyn RandomSource) -> Self {
        let mut pool: Vec<LanguageColorPair> = catalog.entries().to_vec();
        let size = size.min(pool.len());

        for i in 0..size {
            let j = i + rng.next_index(pool.len() - i);
            pool.swap(i, j);
        }
        pool.truncate(size);

        Self::from_entries(pool)
    }

    /// Build a selection in a fixed order.
    ///
    /// Later duplicates of a name are dropped so the selection stays distinct.
    #[must_use]
    pub fn from_entries(entries: Vec<LanguageColorPair>) -> Self {
        let mut index = FxHashMap::default();
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if index.contains_key(&entry.name) {
                continue;
            }
            index.insert(entry.name.clone(), kept.len());
            kept.push(entry);
        }
        Self { entries: kept, index }
    }

    /// Case-sensitive lookup by language name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&LanguageColorPair> {
        self.index.get(name).map(|&i| &self.entries[i])
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

    /// Language names in selection order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedRandom};

    #[test]
    fn test_full_draw_is_permutation() {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(42);
        let selection = RoundSelection::draw(&catalog, 10, &mut rng);

        assert_eq!(selection.len(), 10);
        let mut names: Vec<_> = selection.names().collect();
        names.sort_unstable();
        let mut expected: Vec<_> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_all_zero_script_keeps_catalog_order() {
        let catalog = Catalog::standard();
        let mut rng = ScriptedRandom::new(Vec::new());
        let selection = RoundSelection::draw(&catalog, 10, &mut rng);

        assert_eq!(selection.entries(), catalog.entries());
    }

    #[test]
    fn test_scripted_draw_exact_order() {
        let catalog = Catalog::standard();
        // Step 0 swaps JavaScript with Go (index 5); step 1 swaps Python with Rust (1 + 5).
        let mut rng = ScriptedRandom::new(vec![5, 5]);
        let selection = RoundSelection::draw(&catalog, 10, &mut rng);

        let names: Vec<_> = selection.names().collect();
        assert_eq!(
            names,
            vec!["Go", "Rust", "Java", "C++", "Ruby", "JavaScript", "Python", "Swift", "Kotlin", "TypeScript"]
        );
    }

    #[test]
    fn test_subset_draw_from_larger_catalog() {
        let mut entries = Catalog::standard().entries().to_vec();
        entries.push(LanguageColorPair::new("Haskell", "violet"));
        entries.push(LanguageColorPair::new("Zig", "gold"));
        let catalog = Catalog::new(entries).unwrap();

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let selection = RoundSelection::draw(&catalog, 10, &mut rng);
            assert_eq!(selection.len(), 10);
            for entry in selection.entries() {
                assert_eq!(catalog.get(&entry.name), Some(entry));
            }
        }
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let selection = RoundSelection::from_entries(vec![LanguageColorPair::new("Go", "cyan")]);

        assert_eq!(selection.find("Go").map(|e| e.color.as_str()), Some("cyan"));
        assert!(selection.find("go").is_none());
        assert!(selection.find("").is_none());
    }

    #[test]
    fn test_from_entries_drops_duplicates() {
        let selection = RoundSelection::from_entries(vec![
            LanguageColorPair::new("Go", "cyan"),
            LanguageColorPair::new("Go", "red"),
        ]);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.find("Go").unwrap().color, "cyan");
    }

    #[test]
    fn test_serde_rebuilds_index() {
        let catalog = Catalog::standard();
        let selection = RoundSelection::draw(&catalog, 10, &mut GameRng::new(3));

        let json = serde_json::to_string(&selection).unwrap();
        let back: RoundSelection = serde_json::from_str(&json).unwrap();

        assert_eq!(back, selection);
        assert_eq!(back.find("Rust").unwrap().color, "black");
    }
}
