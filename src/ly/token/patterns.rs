//! Recognizers and the compiled pattern table
//!
//!     Every recognisable token kind describes its pattern as a [`Recognizer`]: either a
//!     fixed regular expression or an alternation built from lexicon categories. The
//!     [`PatternTable`] compiles all of them once, when a lexer is constructed, and the
//!     engine only ever reads it afterwards.
//!
//! Anchoring
//!
//!     Patterns are compiled as `^(?:...)` and run against the input from the cursor on,
//!     so a match always starts exactly at the cursor. The `regex` crate has no look-around,
//!     which shapes two details:
//!
//!     - A leading word boundary cannot be seen from a slice starting at the cursor. It is
//!       expressed as `word_start`: the character before the cursor must not be a word
//!       character.
//!     - "Not followed by a letter" and "not followed by a digit" are expressed as a
//!       [`Guard`] checked after the match. The guard sees the leftmost-first match only,
//!       which is why vocabulary alternations are sorted longest-first.
//!
//!     Trailing `\b` assertions need no help, the text after the cursor is all there.

use crate::ly::error::LexError;
use crate::ly::lexicon::{Category, Lexicon};
use crate::ly::token::TokenKind;
use regex::Regex;

/// Check applied to the character right after a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    None,
    NotLetter,
    NotDigit,
}

impl Guard {
    fn allows(self, next: Option<char>) -> bool {
        match (self, next) {
            (Guard::None, _) | (_, None) => true,
            (Guard::NotLetter, Some(c)) => !c.is_ascii_alphabetic(),
            (Guard::NotDigit, Some(c)) => !c.is_ascii_digit(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    Regex {
        source: &'static str,
        word_start: bool,
        guard: Guard,
    },
    /// Alternation over the words of one or more lexicon categories, wrapped as
    /// `prefix(?:w1|w2|...)suffix`.
    Words {
        categories: &'static [Category],
        prefix: &'static str,
        suffix: &'static str,
        word_start: bool,
        guard: Guard,
    },
}

impl Recognizer {
    pub const fn regex(source: &'static str) -> Recognizer {
        Recognizer::Regex {
            source,
            word_start: false,
            guard: Guard::None,
        }
    }

    pub const fn guarded(source: &'static str, guard: Guard) -> Recognizer {
        Recognizer::Regex {
            source,
            word_start: false,
            guard,
        }
    }

    /// `\word` commands from the given categories, not followed by a letter.
    pub const fn commands(categories: &'static [Category]) -> Recognizer {
        Recognizer::Words {
            categories,
            prefix: r"\\",
            suffix: "",
            word_start: false,
            guard: Guard::NotLetter,
        }
    }

    /// Bare words from the given categories, delimited by word boundaries.
    pub const fn bare_words(categories: &'static [Category]) -> Recognizer {
        Recognizer::Words {
            categories,
            prefix: "",
            suffix: r"\b",
            word_start: true,
            guard: Guard::None,
        }
    }

    /// The regular expression source this recognizer compiles to.
    pub fn source(&self, lexicon: &dyn Lexicon) -> String {
        match *self {
            Recognizer::Regex { source, .. } => source.to_string(),
            Recognizer::Words {
                categories,
                prefix,
                suffix,
                ..
            } => {
                let alternation = alternation(categories, lexicon);
                if alternation.is_empty() {
                    NEVER.to_string()
                } else {
                    format!("{prefix}(?:{alternation}){suffix}")
                }
            }
        }
    }

    fn word_start(&self) -> bool {
        match *self {
            Recognizer::Regex { word_start, .. } | Recognizer::Words { word_start, .. } => {
                word_start
            }
        }
    }

    fn guard(&self) -> Guard {
        match *self {
            Recognizer::Regex { guard, .. } | Recognizer::Words { guard, .. } => guard,
        }
    }
}

/// Matches nothing, used for empty vocabularies.
const NEVER: &str = r"[^\s\S]";

fn alternation(categories: &[Category], lexicon: &dyn Lexicon) -> String {
    let mut words: Vec<String> = categories
        .iter()
        .flat_map(|category| lexicon.lookup(*category))
        .filter(|word| !word.is_empty())
        .collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.dedup();
    words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

/// A compiled, cursor-anchored recognizer.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    word_start: bool,
    guard: Guard,
}

impl Pattern {
    pub fn compile(recognizer: &Recognizer, lexicon: &dyn Lexicon) -> Result<Pattern, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", recognizer.source(lexicon)))?;
        Ok(Pattern {
            regex,
            word_start: recognizer.word_start(),
            guard: recognizer.guard(),
        })
    }

    /// Length of the match starting exactly at `pos`, if any. Empty matches never count.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        let rest = text.get(pos..)?;
        if self.word_start && text[..pos].chars().next_back().is_some_and(is_word_char) {
            return None;
        }
        let found = self.regex.find(rest)?;
        let len = found.end();
        if len == 0 || !self.guard.allows(rest[len..].chars().next()) {
            return None;
        }
        Some(len)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Compiled patterns for every recognisable token kind.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<Option<Pattern>>,
}

impl PatternTable {
    pub fn new(lexicon: &dyn Lexicon) -> Result<PatternTable, LexError> {
        let mut patterns = vec![None; TokenKind::ALL.len()];
        for kind in TokenKind::ALL {
            if let Some(recognizer) = kind.recognizer() {
                let pattern = Pattern::compile(&recognizer, lexicon).map_err(|source| {
                    LexError::Pattern {
                        kind: kind.name(),
                        source,
                    }
                })?;
                patterns[kind.index()] = Some(pattern);
            }
        }
        Ok(PatternTable { patterns })
    }

    pub fn get(&self, kind: TokenKind) -> Option<&Pattern> {
        self.patterns.get(kind.index()).and_then(Option::as_ref)
    }

    /// Length of the match of `kind` at `pos`. Kinds without a recognizer never match.
    pub fn match_at(&self, kind: TokenKind, text: &str, pos: usize) -> Option<usize> {
        self.get(kind)?.match_at(text, pos)
    }
}
