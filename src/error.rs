//! Crate-wide error type.
//!
//! Every failure the recognizer can surface to a caller is one of these
//! variants. A miswired scan configuration that breaks the descriptor length
//! invariant is not represented here; it panics inside the extractor.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The query or reference image cannot be used (empty, truncated, undecodable).
    #[error("invalid input image: {0}")]
    InvalidInput(String),

    /// The template library could not produce a descriptor for `character`.
    #[error("cannot build template for {character:?}: {reason}")]
    Construction { character: char, reason: String },

    /// A tool configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
