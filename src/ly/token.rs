//! Token types produced by the LilyPond lexer
//!
//!     A [`Token`] is an immutable record of one match: its [`TokenKind`], the exact text
//!     it covers and the byte offset where that text starts. Everything else a consumer may
//!     want to know is derived from the kind: capabilities, match tag, numeric value.
//!
//! Taxonomy
//!
//!     The kinds form a closed, flat enumeration. Instead of a class hierarchy, shared
//!     traits of kinds are expressed as [`Capabilities`] flags: a block comment end is at
//!     once a comment, a dedent and a leaver. Consumers such as indentation or highlighting
//!     read the flags and never need the concrete kind.
//!
//!     Delimiters that come in pairs carry a [`MatchTag`]. The lexer only tags them
//!     consistently, pairing them into ranges is up to the consumer.
//!
//!     See [kind](kind) for the full list and [patterns](patterns) for how kinds are
//!     recognised.

pub mod capabilities;
pub mod kind;
pub mod numeric;
pub mod patterns;

pub use capabilities::{Capabilities, MatchTag};
pub use kind::TokenKind;
pub use numeric::NumericValue;
pub use patterns::{Guard, Pattern, PatternTable, Recognizer};

use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` in the lexed input.
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, position: usize) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    pub fn match_tag(&self) -> Option<MatchTag> {
        self.kind.match_tag()
    }

    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }

    pub fn span(&self) -> Range<usize> {
        self.position..self.end()
    }

    /// Parsed value of a numeric token.
    pub fn numeric(&self) -> Option<NumericValue> {
        self.kind
            .is_numeric()
            .then(|| NumericValue::parse(self.text))
    }

    /// +1 for tokens opening an indented block, -1 for tokens closing one.
    pub fn indent_delta(&self) -> i32 {
        let caps = self.capabilities();
        match (
            caps.contains(Capabilities::INDENT),
            caps.contains(Capabilities::DEDENT),
        ) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        }
    }

    pub fn is_match_start(&self) -> bool {
        self.capabilities().contains(Capabilities::MATCH_START)
    }

    pub fn is_match_end(&self) -> bool {
        self.capabilities().contains(Capabilities::MATCH_END)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.text, self.position)
    }
}
