// Pronunciation store: word → set of candidate pronunciations.
//
// Keys are canonicalized (uppercased, every non-ASCII-letter removed) on both
// insert and lookup, so "Summer's", "summers" and "SUMMERS" share one entry.
// Each entry is a `BTreeSet`, which deduplicates structurally equal
// pronunciations and fixes the iteration order of candidates.
//
// The store is built once, sequentially, and then shared read-only by every
// analysis (see `pentameter_scan::analyze_batch`). It holds no interior
// mutability, so `&PronunciationStore` is `Sync` and lookups need no locks.
//
// Two fallback sets live here as well because the store is the authority on
// what a missing entry means:
// - `ambiguous_single()`: an unknown word is one syllable, stressed or not.
// - `silent_set()`: the only candidate of a joiner.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::types::{Pronunciation, Stress};

static AMBIGUOUS_SINGLE: LazyLock<BTreeSet<Pronunciation>> = LazyLock::new(|| {
    BTreeSet::from([
        Pronunciation::single(Stress::Stressed),
        Pronunciation::single(Stress::Unstressed),
    ])
});

static SILENT: LazyLock<BTreeSet<Pronunciation>> =
    LazyLock::new(|| BTreeSet::from([Pronunciation::silent()]));

/// A one-syllable word may be either stressed or unstressed.
pub fn ambiguous_single() -> &'static BTreeSet<Pronunciation> {
    &AMBIGUOUS_SINGLE
}

/// The candidate set of a joiner.
pub fn silent_set() -> &'static BTreeSet<Pronunciation> {
    &SILENT
}

/// Canonical lookup key for a word: uppercase, ASCII letters only.
///
/// May return an empty string (e.g. for `"--"` or `"42"`); nothing is ever
/// stored under the empty key.
pub fn canonicalize(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect()
}

/// Dictionary of word pronunciations.
#[derive(Debug, Clone, Default)]
pub struct PronunciationStore {
    entries: FxHashMap<String, BTreeSet<Pronunciation>>,
}

impl PronunciationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one pronunciation for a word, creating the entry on first use.
    ///
    /// Returns `true` if the pronunciation was new for that word. Words whose
    /// canonical key is empty are ignored and return `false`.
    pub fn add(&mut self, word: &str, pronunciation: Pronunciation) -> bool {
        let key = canonicalize(word);
        if key.is_empty() {
            return false;
        }
        self.entries.entry(key).or_default().insert(pronunciation)
    }

    /// Insert a one-syllable pronunciation.
    pub fn add_stress(&mut self, word: &str, stress: Stress) -> bool {
        self.add(word, Pronunciation::single(stress))
    }

    /// Insert a pronunciation given as a stress list. An empty list is
    /// rejected (returns `false`) since entries never hold empty patterns.
    pub fn add_stresses(&mut self, word: &str, stresses: &[Stress]) -> bool {
        match Pronunciation::new(stresses) {
            Some(p) => self.add(word, p),
            None => false,
        }
    }

    /// Insert a pronunciation as observed in a source word list.
    ///
    /// A single observed syllable is stored as both stressed and unstressed:
    /// lexical stress on a monosyllable says nothing about its stress in a
    /// line of verse. Longer patterns are stored exactly.
    pub fn add_observed(&mut self, word: &str, pronunciation: Pronunciation) -> bool {
        if pronunciation.syllable_count() == 1 {
            let a = self.add_stress(word, Stress::Stressed);
            let b = self.add_stress(word, Stress::Unstressed);
            a || b
        } else {
            self.add(word, pronunciation)
        }
    }

    /// Look a word up by its surface text (canonicalized here).
    pub fn lookup(&self, word: &str) -> Option<&BTreeSet<Pronunciation>> {
        self.get(&canonicalize(word))
    }

    /// Look a word up by an already-canonical key.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<Pronunciation>> {
        self.entries.get(key)
    }

    /// Candidate pronunciations for a word: its entry, or the ambiguous
    /// single-syllable default when the word is unknown. Never empty.
    pub fn candidates(&self, word: &str) -> &BTreeSet<Pronunciation> {
        self.lookup(word).unwrap_or_else(|| ambiguous_single())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy every entry of `other` into this store. Pronunciations are
    /// unioned, so an overlay lexicon can add readings but never remove them.
    pub fn merge(&mut self, other: &PronunciationStore) {
        for (key, set) in &other.entries {
            self.entries
                .entry(key.clone())
                .or_default()
                .extend(set.iter().cloned());
        }
    }

    /// All canonical keys, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
