//! Error type for the fallible edges of the lexer
//!
//!     Lexing itself never fails: unrecognised input turns into error tokens and an
//!     unterminated construct is visible as a deeper final stack. What can fail is the
//!     plumbing around it: restoring a stack checkpoint, reading configuration, naming a
//!     lexicon category, serialising output.

use crate::ly::grammar::ContextId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    /// The bottom frame of a stack must never be unwound by the lexer.
    #[error("context {0:?} cannot be the bottom of a context stack")]
    InvalidRoot(ContextId),

    #[error("a context stack needs at least one frame")]
    EmptyStack,

    #[error("unknown lexicon category `{0}`")]
    UnknownCategory(String),

    #[error("markup command `{command}` declares {arity} arguments, at most 4 are supported")]
    InvalidArity { command: String, arity: u8 },

    /// A recognizer failed to compile, usually a vocabulary too large for the regex engine.
    #[error("failed to compile recognizer for {kind}: {source}")]
    Pattern {
        kind: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("line {index} is out of range for a document of {lines} line(s)")]
    LineOutOfRange { index: usize, lines: usize },

    #[error("replacement text for line {index} spans more than one line")]
    MultilineReplacement { index: usize },

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LexError {
    fn from(err: serde_json::Error) -> Self {
        LexError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for LexError {
    fn from(err: serde_yaml::Error) -> Self {
        LexError::Serialization(err.to_string())
    }
}
