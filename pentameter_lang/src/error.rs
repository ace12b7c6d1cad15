// Errors raised while loading a lexicon.
//
// Individual bad entries are not errors (they are skipped and logged by the
// loader); only an unreadable file or malformed JSON aborts a load.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The lexicon text is not valid lexicon JSON.
    #[error("malformed lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
