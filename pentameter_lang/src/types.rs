// Core stress types: the three-valued stress domain and word pronunciations.
//
// These types are shared by the scansion engine (`pentameter_scan`) and the
// lexicon loader in this crate. The hierarchy is small:
// - `Stress`: prosodic weight of one syllable slot (stressed, unstressed,
//   silent)
// - `Pronunciation`: an ordered, non-empty run of `Stress` values, one per
//   syllable of a word. Joiners (spaces, dashes) carry the single-element
//   silent pronunciation.
//
// Pronunciations are written in the CMU stress digit convention when stored
// as text: `0` is unstressed, `1` and `2` (primary and secondary stress) both
// collapse to stressed. Silent slots print as `_` and never appear in lexicon
// data.
//
// Ordering matters: `Stress` derives `Ord` with `Stressed < Unstressed <
// Silent`, and candidate sets are `BTreeSet<Pronunciation>`, so every
// iteration over candidates is deterministic.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Stress on a single syllable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stress {
    /// Voiced with emphasis.
    Stressed,
    /// Voiced without emphasis.
    Unstressed,
    /// Not voiced at all, like the space between two words.
    Silent,
}

impl Stress {
    /// Parse a CMU stress digit. Secondary stress counts as stressed.
    pub fn from_digit(c: char) -> Option<Stress> {
        match c {
            '0' => Some(Stress::Unstressed),
            '1' | '2' => Some(Stress::Stressed),
            _ => None,
        }
    }

    /// The digit this stress is written as.
    pub fn digit(self) -> char {
        match self {
            Stress::Stressed => '1',
            Stress::Unstressed => '0',
            Stress::Silent => '_',
        }
    }

    /// Whether this slot is a real syllable (anything but `Silent`).
    pub fn is_voiced(self) -> bool {
        self != Stress::Silent
    }
}

/// Inline storage for a word's stresses. Almost every English word has four
/// syllables or fewer, so the common case never allocates.
pub type StressVec = SmallVec<[Stress; 4]>;

/// A single way to pronounce a word: one `Stress` per syllable slot.
///
/// Never empty. Construct through `new`, `single`, `silent`, or
/// `from_digits`, all of which uphold that.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "StressVec", into = "StressVec")]
pub struct Pronunciation(StressVec);

impl Pronunciation {
    /// Build a pronunciation from a stress sequence. Returns `None` for an
    /// empty sequence.
    pub fn new(stresses: &[Stress]) -> Option<Self> {
        if stresses.is_empty() {
            None
        } else {
            Some(Pronunciation(StressVec::from_slice(stresses)))
        }
    }

    /// A one-syllable pronunciation.
    pub fn single(stress: Stress) -> Self {
        let mut v = StressVec::new();
        v.push(stress);
        Pronunciation(v)
    }

    /// The pronunciation of a joiner.
    pub fn silent() -> Self {
        Self::single(Stress::Silent)
    }

    /// Parse a digit string such as `"010"`. Returns `None` if the string is
    /// empty or contains anything other than `0`, `1`, `2`.
    pub fn from_digits(digits: &str) -> Option<Self> {
        let stresses: Option<StressVec> = digits.chars().map(Stress::from_digit).collect();
        stresses.filter(|s| !s.is_empty()).map(Pronunciation)
    }

    /// Every slot, silent ones included.
    pub fn stresses(&self) -> &[Stress] {
        &self.0
    }

    /// Number of slots. A joiner has one (silent) slot.
    pub fn syllable_count(&self) -> usize {
        self.0.len()
    }

    /// Voiced slots only, in order.
    pub fn voiced(&self) -> impl Iterator<Item = Stress> + '_ {
        self.0.iter().copied().filter(|s| s.is_voiced())
    }

    /// True if no slot is voiced.
    pub fn is_silent(&self) -> bool {
        self.0.iter().all(|s| !s.is_voiced())
    }
}

impl TryFrom<StressVec> for Pronunciation {
    type Error = &'static str;

    fn try_from(v: StressVec) -> Result<Self, Self::Error> {
        if v.is_empty() {
            Err("pronunciation must have at least one syllable")
        } else {
            Ok(Pronunciation(v))
        }
    }
}

impl From<Pronunciation> for StressVec {
    fn from(p: Pronunciation) -> Self {
        p.0
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.0 {
            write!(f, "{}", s.digit())?;
        }
        Ok(())
    }
}
