//! # lylex
//!
//! A context-sensitive lexer for LilyPond source text.
//!
//! File Layout
//!
//! Everything lives under the [`ly`] module, split the way the lexer is built up:
//! src/ly
//!   ├── token        Token kinds, capabilities, recognizers
//!   ├── lexicon      Word lists the dynamic recognizers are built from
//!   ├── grammar      The closed table of lexing contexts
//!   ├── lexing       The push-down engine driving it all
//!   └── document     Line based lexing with stack checkpoints
//!
//! The lexer never fails on input. What it cannot recognise becomes an error or unparsed
//! token, and an unterminated construct shows up as a final stack deeper than the one the
//! lexer started with.
//!
//! For testing helpers, see the [testing module](ly::testing).

pub mod ly;

pub use ly::lexing::{Lexed, Lexer, Tokens};
pub use ly::token::{Token, TokenKind};
