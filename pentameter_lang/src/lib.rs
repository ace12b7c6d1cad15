// Pronunciation data crate for iambic scansion.
//
// Provides the stress vocabulary and the word → pronunciation store that the
// scansion engine (`pentameter_scan`) reads. No dependency on the engine.
//
// Architecture:
// - `types.rs`: `Stress`, `Pronunciation`
// - `store.rs`: `PronunciationStore`, key canonicalization, fallback sets
// - `error.rs`: `LexiconError`
// - `lib.rs` (this file): JSON lexicon loading
//
// A lexicon is JSON of the form
//
//   {"words": [{"word": "compare", "patterns": ["01"]}, ...]}
//
// where each pattern is a string of CMU stress digits (`0` unstressed, `1`/`2`
// stressed). Entries go through `PronunciationStore::add_observed`, so a
// one-syllable pattern becomes the stressed/unstressed pair. Loading is best
// effort: an entry with no usable pattern is skipped with a warning and the
// rest of the file still loads.
//
// `default_store()` embeds `data/lexicon.json` at compile time, so the
// binary needs no data files at runtime.

pub mod error;
pub mod store;
pub mod types;

use std::path::Path;

use tracing::{info, warn};

pub use error::{LexiconError, Result};
pub use store::{PronunciationStore, ambiguous_single, canonicalize, silent_set};
pub use types::{Pronunciation, Stress, StressVec};

/// The top-level JSON structure for a lexicon file.
#[derive(Debug, serde::Deserialize)]
struct LexiconFile {
    words: Vec<LexiconEntry>,
}

/// One word with every observed stress pattern.
#[derive(Debug, serde::Deserialize)]
struct LexiconEntry {
    word: String,
    #[serde(default)]
    patterns: Vec<String>,
}

/// Parse a lexicon from a JSON string into a new store.
pub fn store_from_json(json: &str) -> Result<PronunciationStore> {
    let mut store = PronunciationStore::new();
    extend_from_json(&mut store, json)?;
    Ok(store)
}

/// Parse a lexicon and add its entries to an existing store. Returns the
/// number of entries that contributed at least one pronunciation.
pub fn extend_from_json(store: &mut PronunciationStore, json: &str) -> Result<usize> {
    let file: LexiconFile = serde_json::from_str(json)?;
    let mut loaded = 0;
    let mut skipped = 0;

    for entry in &file.words {
        let mut accepted = false;
        for pattern in &entry.patterns {
            match Pronunciation::from_digits(pattern.trim()) {
                Some(p) => {
                    store.add_observed(&entry.word, p);
                    accepted = true;
                }
                None => warn!(
                    word = %entry.word,
                    pattern = %pattern,
                    "skipping malformed stress pattern"
                ),
            }
        }
        if accepted && !canonicalize(&entry.word).is_empty() {
            loaded += 1;
        } else {
            warn!(word = %entry.word, "skipping lexicon entry with no usable pronunciation");
            skipped += 1;
        }
    }

    info!(loaded, skipped, total_words = store.len(), "lexicon loaded");
    Ok(loaded)
}

/// Read a lexicon file from disk.
pub fn load_store(path: &Path) -> Result<PronunciationStore> {
    let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.display().to_string(),
        source,
    })?;
    store_from_json(&json)
}

/// Load the default lexicon embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_store() -> PronunciationStore {
    let json = include_str!("../../data/lexicon.json");
    store_from_json(json).expect("embedded lexicon.json is malformed")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_store_from_json() {
        let json = r#"{"words": [
            {"word": "compare", "patterns": ["01"]},
            {"word": "the", "patterns": ["0"]}
        ]}"#;

        let store = store_from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("compare").unwrap().len(), 1);
        // Monosyllables are always ambiguous.
        assert_eq!(store.lookup("the").unwrap().len(), 2);
    }

    #[test]
    fn test_multiple_patterns_per_word() {
        let json = r#"{"words": [
            {"word": "every", "patterns": ["100", "10"]}
        ]}"#;

        let store = store_from_json(json).unwrap();
        let set = store.lookup("every").unwrap();
        assert!(set.contains(&Pronunciation::from_digits("100").unwrap()));
        assert!(set.contains(&Pronunciation::from_digits("10").unwrap()));
    }

    #[test]
    fn test_secondary_stress_collapses() {
        let json = r#"{"words": [{"word": "aardvark", "patterns": ["12"]}]}"#;
        let store = store_from_json(json).unwrap();
        assert!(
            store
                .lookup("aardvark")
                .unwrap()
                .contains(&Pronunciation::from_digits("11").unwrap())
        );
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let json = r#"{"words": [
            {"word": "good", "patterns": ["1"]},
            {"word": "bad", "patterns": ["AH0"]},
            {"word": "empty", "patterns": [""]},
            {"word": "none"},
            {"word": "???", "patterns": ["1"]},
            {"word": "partial", "patterns": ["x", "10"]}
        ]}"#;

        let mut store = PronunciationStore::new();
        let loaded = extend_from_json(&mut store, json).unwrap();
        assert_eq!(
            loaded, 2,
            "only 'good' and 'partial' carry usable patterns"
        );
        assert!(store.contains("good"));
        assert!(store.contains("partial"));
        assert!(!store.contains("bad"));
        assert!(!store.contains("empty"));
        assert!(!store.contains("none"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = store_from_json("{ not json").unwrap_err();
        assert!(matches!(err, LexiconError::Json(_)));
    }

    #[test]
    fn test_load_store_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"words": [{{"word": "creeper", "patterns": ["10"]}}]}}"#
        )
        .unwrap();

        let store = load_store(file.path()).unwrap();
        assert!(store.contains("Creeper"));
    }

    #[test]
    fn test_load_store_missing_file() {
        let err = load_store(Path::new("/nonexistent/lexicon.json")).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn test_default_store_loads() {
        let store = default_store();
        assert!(
            store.len() >= 200,
            "Expected >= 200 words, got {}",
            store.len()
        );
        for word in [
            "shall", "i", "compare", "thee", "to", "a", "summer's", "day",
        ] {
            assert!(
                store.contains(word),
                "default lexicon should contain {word}"
            );
        }
    }

    #[test]
    fn test_default_store_has_ambiguous_stress_words() {
        let store = default_store();
        assert_eq!(store.lookup("present").unwrap().len(), 2);
        assert_eq!(store.lookup("every").unwrap().len(), 2);
    }
}
