// Pronunciation expander: attaches a candidate set to every token.
//
// Word tokens get their store entry, or the ambiguous single-syllable default
// when the word is unknown (this includes words with no letters at all, such
// as "42" or "!!"). Joiners always get the one-member silent set. Candidate
// sets are borrowed from the store or from its static fallbacks, so expansion
// never copies pronunciation data.

use std::collections::BTreeSet;

use pentameter_lang::{Pronunciation, PronunciationStore, silent_set};

use crate::tokenize::{Token, TokenKind};

/// A token together with every pronunciation it could realize. The set is
/// never empty.
#[derive(Debug, Clone)]
pub struct TokenCandidates<'a> {
    pub token: Token,
    pub candidates: &'a BTreeSet<Pronunciation>,
}

impl TokenCandidates<'_> {
    /// Number of candidate pronunciations.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Never true for a set built by `expand`.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether this token has more than one reading.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}

/// Candidate set for a single token.
pub fn candidates_for<'a>(
    token: &Token,
    store: &'a PronunciationStore,
) -> &'a BTreeSet<Pronunciation> {
    match token.kind {
        TokenKind::Word => store.candidates(&token.text),
        TokenKind::Joiner => silent_set(),
    }
}

/// Expand every token of a phrase.
pub fn expand(tokens: Vec<Token>, store: &PronunciationStore) -> Vec<TokenCandidates<'_>> {
    tokens
        .into_iter()
        .map(|token| {
            let candidates = candidates_for(&token, store);
            TokenCandidates { token, candidates }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;
    use pentameter_lang::{Stress, ambiguous_single};

    fn store() -> PronunciationStore {
        let mut store = PronunciationStore::new();
        store.add_stress("the", Stress::Unstressed);
        store.add_stresses("compare", &[Stress::Unstressed, Stress::Stressed]);
        store.add_stresses("present", &[Stress::Stressed, Stress::Unstressed]);
        store.add_stresses("present", &[Stress::Unstressed, Stress::Stressed]);
        store
    }

    #[test]
    fn test_known_word_uses_store_entry() {
        let store = store();
        let expanded = expand(tokenize("compare"), &store);
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].len(), 1);
        assert!(
            expanded[0]
                .candidates
                .contains(&Pronunciation::from_digits("01").unwrap())
        );
    }

    #[test]
    fn test_lookup_is_canonicalized() {
        let store = store();
        let expanded = expand(tokenize("The"), &store);
        assert_eq!(expanded[0].len(), 1);
    }

    #[test]
    fn test_unknown_word_defaults_to_ambiguous_single() {
        let store = store();
        let expanded = expand(tokenize("xyzzy"), &store);
        assert_eq!(expanded[0].candidates, ambiguous_single());
        assert!(expanded[0].is_ambiguous());
    }

    #[test]
    fn test_letterless_word_is_unknown() {
        let store = store();
        let expanded = expand(tokenize("42"), &store);
        assert_eq!(expanded[0].candidates, ambiguous_single());
    }

    #[test]
    fn test_joiners_are_silent() {
        let store = store();
        let expanded = expand(tokenize("the present-day"), &store);
        assert_eq!(expanded.len(), 5);
        for tc in expanded.iter().filter(|tc| tc.token.is_joiner()) {
            assert_eq!(tc.candidates, silent_set());
        }
        assert_eq!(expanded[2].len(), 2, "present has two readings");
    }

    #[test]
    fn test_no_candidate_set_is_empty() {
        let store = store();
        for phrase in ["", " ", "the cat", "a - b", "!! ??", "compare-present"] {
            for tc in expand(tokenize(phrase), &store) {
                assert!(!tc.is_empty(), "empty candidates for {:?}", tc.token);
            }
        }
    }
}
