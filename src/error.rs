// ⚠️ Error types for the story pipeline
// Entity operations are total and never fail; everything here comes from
// reading annotations, parsing labels, or writing exports.

use std::path::PathBuf;

/// Errors raised while turning annotated stories into entity exports.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The annotation label does not name a known entity kind.
    #[error("Unknown entity label: {0}")]
    UnknownEntityLabel(String),

    /// The annotation label does not name a known relation type.
    #[error("Unknown relation label: {0}")]
    UnknownRelationLabel(String),

    /// A span points outside the story text (character offsets).
    #[error("Span {start}..{end} is out of bounds for text of {len} characters")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    /// A JSONL line could not be decoded into a story record.
    #[error("Malformed JSONL at line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
