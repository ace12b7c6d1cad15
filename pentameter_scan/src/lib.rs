// Iambic scansion engine.
//
// Decides whether a phrase can be read as iambic (strictly alternating
// unstressed/stressed syllables, starting unstressed) and whether it is
// iambic pentameter (iambic with exactly ten syllables), then annotates every
// syllable of the chosen reading. Pronunciations come from a
// `pentameter_lang::PronunciationStore`.
//
// Pipeline, one module per stage:
// - `tokenize.rs`: phrase text -> word and joiner tokens
// - `expand.rs`: token -> candidate pronunciation set
// - `enumerate.rs`: every combination of candidates (exhaustive strategy)
// - `classify.rs`: one realization -> iambic / pentameter / mismatch count
// - `select.rs`: best realization out of an enumerated set
// - `search.rs`: best realization without enumerating (default strategy)
// - `annotate.rs`: chosen realization -> tagged text fragments
// - `render.rs`: fragments -> plain, bracketed, or ANSI-colored text
// - `config.rs`, `error.rs`: `ScanConfig`, `ScanError`
//
// `build_store()` assembles the store a scan runs against: the embedded
// lexicon (optional) with any number of lexicon files merged over it.
//
// `analyze()` is the infallible entry point: it always uses the search and
// works on phrases of any length. `Scanner` adds the configured limits and
// the choice of strategy; both strategies reach the same verdict. Batch
// variants fan phrases out over rayon's thread pool, sharing the store
// read-only, and return results in input order.
//
// Analysis is pure: the same phrase and store always give the same result.

pub mod annotate;
pub mod classify;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod expand;
pub mod render;
pub mod search;
pub mod select;
pub mod tokenize;

use std::path::Path;

use pentameter_lang::PronunciationStore;
use rayon::prelude::*;
use tracing::{debug, info};

pub use annotate::{AnnotatedResult, Annotation, Fragment, annotate};
pub use classify::{Classification, Tier};
pub use config::{ScanConfig, Strategy};
pub use error::{Result, ScanError};
pub use render::{AnsiRenderer, BracketRenderer, PlainRenderer, Render};

/// Build a store from the embedded lexicon (when `with_default` is set) and
/// each lexicon file in order. Later files add readings to earlier words.
pub fn build_store<P: AsRef<Path>>(
    lexicons: &[P],
    with_default: bool,
) -> Result<PronunciationStore> {
    let mut store = if with_default {
        pentameter_lang::default_store()
    } else {
        PronunciationStore::new()
    };
    for path in lexicons {
        let overlay = pentameter_lang::load_store(path.as_ref())?;
        store.merge(&overlay);
    }
    info!(
        lexicons = lexicons.len(),
        words = store.len(),
        "pronunciation store built"
    );
    Ok(store)
}

/// Analyze one phrase with the search strategy and no limits.
pub fn analyze(phrase: &str, store: &PronunciationStore) -> AnnotatedResult {
    let expanded = expand::expand(tokenize::tokenize(phrase), store);
    let (realized, classification) = search::search(&expanded);
    debug!(
        tokens = expanded.len(),
        tier = ?classification.tier(),
        mismatches = classification.mismatch_count,
        "phrase analyzed"
    );
    annotate(&realized, classification)
}

/// Analyze many phrases in parallel. Output order matches input order.
pub fn analyze_batch<S>(phrases: &[S], store: &PronunciationStore) -> Vec<AnnotatedResult>
where
    S: AsRef<str> + Sync,
{
    phrases
        .par_iter()
        .map(|phrase| analyze(phrase.as_ref(), store))
        .collect()
}

/// A store plus the limits and strategy to analyze with.
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    store: &'s PronunciationStore,
    config: ScanConfig,
}

impl<'s> Scanner<'s> {
    pub fn new(store: &'s PronunciationStore, config: ScanConfig) -> Self {
        Scanner { store, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn scan(&self, phrase: &str) -> Result<AnnotatedResult> {
        let tokens = tokenize::tokenize(phrase);
        if let Some(limit) = self.config.max_tokens.filter(|&limit| tokens.len() > limit) {
            return Err(ScanError::TooManyTokens {
                count: tokens.len(),
                limit,
            });
        }

        let expanded = expand::expand(tokens, self.store);
        let result = match self.config.strategy {
            Strategy::Search => {
                let (realized, classification) = search::search(&expanded);
                annotate(&realized, classification)
            }
            Strategy::Exhaustive => {
                let all = enumerate::enumerate_bounded(&expanded, self.config.max_realizations)?;
                debug!(realizations = all.len(), "enumerated");
                match select::select(&all) {
                    Some((realized, classification)) => annotate(realized, classification),
                    // Unreachable: an enumeration holds at least the empty
                    // realization.
                    None => {
                        let empty = enumerate::RealizedPhrase::default();
                        annotate(&empty, classify::classify(&empty))
                    }
                }
            }
        };

        debug!(
            tokens = expanded.len(),
            strategy = ?self.config.strategy,
            tier = ?result.classification.tier(),
            mismatches = result.mismatch_count(),
            "phrase scanned"
        );
        Ok(result)
    }

    /// Scan many phrases in parallel. Each phrase fails or succeeds on its
    /// own; output order matches input order.
    pub fn scan_batch<S>(&self, phrases: &[S]) -> Vec<Result<AnnotatedResult>>
    where
        S: AsRef<str> + Sync,
    {
        phrases
            .par_iter()
            .map(|phrase| self.scan(phrase.as_ref()))
            .collect()
    }
}
