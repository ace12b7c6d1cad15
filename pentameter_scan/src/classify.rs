// Meter classifier: iambic / iambic-pentameter status of one realization.
//
// The walk expects alternating stress starting from unstressed. A syllable
// that matches the expectation is a hit; one that does not adds a mismatch.
// Either way the expectation flips, so the walk never aborts and every
// realization gets a mismatch count. That count is what lets the selector
// rank realizations that are not iambic at all.
//
// Only voiced syllables take part. Silent slots (joiners) are skipped before
// the walk, so they never shift the alternation or count as syllables.

use pentameter_lang::Stress;
use serde::Serialize;

use crate::enumerate::RealizedPhrase;

/// Syllables in a line of iambic pentameter: five unstressed/stressed feet.
pub const PENTAMETER_SYLLABLES: usize = 10;

/// The stress expected at a zero-based syllable position.
pub fn expected_stress(position: usize) -> Stress {
    if position % 2 == 0 {
        Stress::Unstressed
    } else {
        Stress::Stressed
    }
}

/// Meter verdict for one realization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    pub is_iambic: bool,
    pub is_iambic_pentameter: bool,
    /// Syllables that broke the alternation.
    pub mismatch_count: usize,
    /// Voiced syllables in the stream.
    pub syllable_count: usize,
}

/// Priority tier used by the selector. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    IambicPentameter,
    Iambic,
    Other,
}

impl Classification {
    /// Build a verdict from the two counts of a finished walk.
    pub fn from_counts(syllable_count: usize, mismatch_count: usize) -> Self {
        let is_iambic = mismatch_count == 0;
        Classification {
            is_iambic,
            is_iambic_pentameter: is_iambic && syllable_count == PENTAMETER_SYLLABLES,
            mismatch_count,
            syllable_count,
        }
    }

    pub fn tier(&self) -> Tier {
        if self.is_iambic_pentameter {
            Tier::IambicPentameter
        } else if self.is_iambic {
            Tier::Iambic
        } else {
            Tier::Other
        }
    }

    /// Total selection order: tier first, then fewest mismatches.
    pub fn rank(&self) -> (Tier, usize) {
        (self.tier(), self.mismatch_count)
    }
}

/// Classify a raw stress stream. Silent entries are ignored.
pub fn classify_stream<I: IntoIterator<Item = Stress>>(stream: I) -> Classification {
    let mut syllables = 0;
    let mut mismatches = 0;
    for stress in stream.into_iter().filter(|s| s.is_voiced()) {
        if stress != expected_stress(syllables) {
            mismatches += 1;
        }
        syllables += 1;
    }
    Classification::from_counts(syllables, mismatches)
}

/// Classify one realized phrase.
pub fn classify(phrase: &RealizedPhrase<'_>) -> Classification {
    classify_stream(phrase.stress_stream())
}
