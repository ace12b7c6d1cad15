// Candidate enumerator: the full cartesian product of token readings.
//
// Given every token's candidate set, produce one `RealizedPhrase` per
// combination. Realizations come out in lexicographic order of candidate
// choice, with the first token most significant, so the first realization
// takes every token's first candidate. Because each candidate set is itself a
// set, no two combinations are equal and the output has no duplicates.
//
// The output size is the product of all candidate-set sizes: a phrase of N
// ambiguous monosyllables has 2^N realizations. `realization_count` computes
// that product without enumerating, and `enumerate_bounded` refuses to start
// when it exceeds a limit. `search.rs` finds the same best realization without
// materializing the product at all.

use pentameter_lang::{Pronunciation, Stress};

use crate::error::ScanError;
use crate::expand::TokenCandidates;
use crate::tokenize::Token;

/// One token with one chosen pronunciation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Realized<'a> {
    pub token: &'a Token,
    pub pronunciation: &'a Pronunciation,
}

/// A fully disambiguated phrase: exactly one pronunciation per token, in
/// token order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RealizedPhrase<'a> {
    pub parts: Vec<Realized<'a>>,
}

impl<'a> RealizedPhrase<'a> {
    pub fn new(parts: Vec<Realized<'a>>) -> Self {
        RealizedPhrase { parts }
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The voiced syllable stream: every token's stresses in order, with
    /// silent slots dropped.
    pub fn stress_stream(&self) -> impl Iterator<Item = Stress> + '_ {
        self.parts.iter().flat_map(|r| r.pronunciation.voiced())
    }
}

/// Number of realizations the product would contain, or `None` on overflow.
/// An empty phrase has exactly one (empty) realization.
pub fn realization_count(expanded: &[TokenCandidates<'_>]) -> Option<usize> {
    expanded
        .iter()
        .try_fold(1usize, |acc, tc| acc.checked_mul(tc.len()))
}

/// Enumerate every realization of a phrase.
pub fn enumerate<'a>(expanded: &'a [TokenCandidates<'a>]) -> Vec<RealizedPhrase<'a>> {
    let mut partials: Vec<Vec<Realized<'a>>> = vec![Vec::with_capacity(expanded.len())];

    for tc in expanded {
        let mut next = Vec::with_capacity(partials.len() * tc.len());
        for partial in &partials {
            for pronunciation in tc.candidates {
                let mut extended = partial.clone();
                extended.push(Realized {
                    token: &tc.token,
                    pronunciation,
                });
                next.push(extended);
            }
        }
        partials = next;
    }

    partials.into_iter().map(RealizedPhrase::new).collect()
}

/// Enumerate, but only if the product stays within `limit`.
pub fn enumerate_bounded<'a>(
    expanded: &'a [TokenCandidates<'a>],
    limit: usize,
) -> Result<Vec<RealizedPhrase<'a>>, ScanError> {
    match realization_count(expanded) {
        Some(count) if count <= limit => Ok(enumerate(expanded)),
        count => Err(ScanError::TooManyRealizations { count, limit }),
    }
}
