//! Testing utilities for token stream assertions
//!
//! Lexer tests should read as a description of the stream they expect, not as index
//! juggling over a `Vec`. This module provides two tools for that:
//!
//! 1. **[assert_tokens](fn@assert_tokens)**: lexes an input and returns a fluent
//!    assertion builder over the resulting tokens and final stack.
//! 2. **[mk_tokens](fn@mk_tokens)**: builds an expected token sequence from
//!    `(kind, text)` pairs, computing positions the way the lexer does.
//!
//! ```rust-example
//! use lylex::ly::testing::assert_tokens;
//! use lylex::TokenKind;
//!
//! assert_tokens(r"\repeat volta 2 { c4 }")
//!     .skipping_space()
//!     .kinds(&[
//!         TokenKind::Repeat,
//!         TokenKind::RepeatSpecifier,
//!         TokenKind::RepeatCount,
//!         TokenKind::SequentialStart,
//!         TokenKind::Note,
//!         TokenKind::Duration,
//!         TokenKind::SequentialEnd,
//!     ])
//!     .returns_to_start();
//! ```
//!
//! The assertions panic with a summary of the actual stream, so a failing test shows
//! what the lexer produced.

mod testing_assertions;
mod testing_factories;

pub use testing_assertions::{assert_tokens, assert_tokens_from, TokenAssertion, TokensAssertion};
pub use testing_factories::{mk_token, mk_tokens, summarize};
