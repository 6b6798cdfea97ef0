//! Lexer
//!
//! This module holds the context engine: a push-down automaton whose stack frames are
//! grammar contexts from the [catalogue](crate::ly::grammar).
//!
//! Structure:
//!     - [stack]: the context stack and its structural operations (enter, leave, replace,
//!       end of argument).
//!     - [transitions]: the steps each token kind runs after it is emitted.
//!     - [engine]: the tokenizer loop, exposed as the [`Tokens`] iterator.
//!     - [scheme]: entry point of the Scheme sub-lexer.
//!
//! Construction
//!
//!     A [`Lexer`] compiles every recognizer once, from the lexicon it is given, and is
//!     read-only afterwards. It can be shared across threads; each `tokenize` call owns its
//!     own stack. [`Lexer::shared`] is a process-wide lexer over the built-in vocabulary,
//!     built on first use.
//!
//! Lexing is restartable: the same input and the same starting stack always yield the
//! same tokens and the same final stack, so a stack saved after one line is all that is
//! needed to continue lexing the next.

pub mod engine;
pub mod scheme;
pub mod stack;
pub mod transitions;

pub use engine::Tokens;
pub use stack::{Context, ContextStack};
pub use transitions::Step;

use crate::ly::error::LexError;
use crate::ly::lexicon::{Lexicon, LilyPondLexicon};
use crate::ly::token::{PatternTable, Token};
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

static SHARED: Lazy<Lexer> =
    Lazy::new(|| Lexer::new(LilyPondLexicon).expect("built-in vocabulary compiles"));

pub struct Lexer {
    patterns: PatternTable,
    lexicon: Box<dyn Lexicon>,
}

/// The tokens of one input unit and the stack lexing ended with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub stack: ContextStack,
}

impl Lexed<'_> {
    /// Whether lexing ended inside a construct the starting stack was not in.
    pub fn is_unterminated(&self, start: &ContextStack) -> bool {
        self.stack.depth() > start.depth()
    }
}

impl Lexer {
    pub fn new(lexicon: impl Lexicon + 'static) -> Result<Self, LexError> {
        let patterns = PatternTable::new(&lexicon)?;
        debug!("compiled lexer patterns");
        Ok(Self {
            patterns,
            lexicon: Box::new(lexicon),
        })
    }

    /// Lexer over the built-in LilyPond vocabulary.
    pub fn shared() -> &'static Lexer {
        &SHARED
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    /// Lazily tokenize `input`, starting from `stack`.
    pub fn tokenize<'l, 'a>(&'l self, input: &'a str, stack: ContextStack) -> Tokens<'l, 'a> {
        Tokens::new(self, input, stack)
    }

    /// Tokenize `input` completely.
    pub fn lex<'a>(&self, input: &'a str, stack: ContextStack) -> Lexed<'a> {
        let mut stream = self.tokenize(input, stack);
        let tokens = stream.by_ref().collect();
        Lexed {
            tokens,
            stack: stream.into_stack(),
        }
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ly::lexicon::{Category, ConfiguredLexicon};
    use crate::ly::token::TokenKind;

    #[test]
    fn test_lexer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Lexer>();
    }

    #[test]
    fn test_lex_is_deterministic() {
        let input = r#"\score { \new Staff { c4 d \markup \bold "x" } }"#;
        let first = Lexer::shared().lex(input, ContextStack::new());
        let second = Lexer::shared().lex(input, ContextStack::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_unterminated_string() {
        let start = ContextStack::new();
        let lexed = Lexer::shared().lex("\"abc", start.clone());
        let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::StringQuotedStart, TokenKind::String]);
        assert!(lexed.is_unterminated(&start));
        assert_eq!(lexed.stack.depth(), start.depth() + 1);
    }

    #[test]
    fn test_configured_lexicon_changes_recognition() {
        let lexicon = ConfiguredLexicon::new(LilyPondLexicon)
            .with_words(Category::MusicCommands, ["myTweak"]);
        let lexer = Lexer::new(lexicon).unwrap();
        let lexed = lexer.lex(r"{ \myTweak }", ContextStack::new());
        assert!(lexed
            .tokens
            .iter()
            .any(|t| t.kind == TokenKind::Command && t.text == r"\myTweak"));

        let plain = Lexer::shared().lex(r"{ \myTweak }", ContextStack::new());
        assert!(plain
            .tokens
            .iter()
            .any(|t| t.kind == TokenKind::UserCommand && t.text == r"\myTweak"));
    }

    #[test]
    fn test_continue_from_checkpoint() {
        let first = Lexer::shared().lex("%{ open\n", ContextStack::new());
        assert_eq!(first.stack.top().id, crate::ly::grammar::ContextId::BlockComment);
        let second = Lexer::shared().lex("still %} c", first.stack);
        let kinds: Vec<_> = second.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Comment,
                TokenKind::BlockCommentSpace,
                TokenKind::BlockCommentEnd,
                TokenKind::Space,
                TokenKind::Name,
            ]
        );
        assert_eq!(second.stack.depth(), 1);
    }
}
