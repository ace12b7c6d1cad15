// Errors raised by the scansion pipeline.
//
// The default analysis path (`analyze`) cannot fail: every token has a
// non-empty candidate set and the search is linear. Errors only come from
// the configurable `Scanner`, which enforces input limits, and from loading
// its configuration or lexicon.

use pentameter_lang::LexiconError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The phrase tokenized to more tokens than the configured limit.
    #[error("phrase has {count} tokens, limit is {limit}")]
    TooManyTokens { count: usize, limit: usize },

    /// Exhaustive enumeration would exceed the configured limit. `count` is
    /// `None` when the product overflows `usize`.
    #[error("phrase has {} realizations, limit is {limit}", display_count(.count))]
    TooManyRealizations { count: Option<usize>, limit: usize },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

fn display_count(count: &Option<usize>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "more than usize::MAX".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
