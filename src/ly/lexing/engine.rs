//! The push-down tokenizer loop
//!
//! [`Tokens`] walks the input once, one token per `next` call. At every step the top
//! context decides: its candidates are tried in order and the first match wins. With no
//! match, a fallthrough context gives way to the one below it without consuming input,
//! and any other context turns the unrecognised run into a token of its default kind.
//! Every emitted token then runs its kind's transition steps against the stack.

use super::stack::{Context, ContextStack};
use super::transitions;
use super::Lexer;
use crate::ly::grammar::{ContextDef, Fallthrough};
use crate::ly::token::{Token, TokenKind};
use log::trace;
use std::iter::FusedIterator;

/// Lazy token stream over one input unit.
///
/// The stream owns its stack. Once it is exhausted, [`Tokens::into_stack`] is the
/// checkpoint to continue lexing the next unit from.
#[derive(Debug, Clone)]
pub struct Tokens<'l, 'a> {
    lexer: &'l Lexer,
    input: &'a str,
    pos: usize,
    stack: ContextStack,
}

impl<'l, 'a> Tokens<'l, 'a> {
    pub(super) fn new(lexer: &'l Lexer, input: &'a str, stack: ContextStack) -> Self {
        Self {
            lexer,
            input,
            pos: 0,
            stack,
        }
    }

    /// The live stack.
    pub fn stack(&self) -> &ContextStack {
        &self.stack
    }

    pub fn into_stack(self) -> ContextStack {
        self.stack
    }

    /// The context on top of the live stack.
    pub fn current_context(&self) -> &Context {
        self.stack.top()
    }

    /// Byte offset of the next token.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn first_match(&self, def: &ContextDef, pos: usize) -> Option<(TokenKind, usize)> {
        let patterns = self.lexer.patterns();
        def.candidates.iter().find_map(|kind| {
            patterns
                .match_at(*kind, self.input, pos)
                .map(|len| (*kind, len))
        })
    }

    /// End of a default token starting at the cursor: the first later char boundary where
    /// some candidate matches, or the end of input.
    fn default_end(&self, def: &ContextDef) -> usize {
        let rest = &self.input[self.pos..];
        rest.char_indices()
            .skip(1)
            .map(|(offset, _)| self.pos + offset)
            .find(|at| self.first_match(def, *at).is_some())
            .unwrap_or(self.input.len())
    }

    fn emit(&mut self, kind: TokenKind, end: usize) -> Token<'a> {
        debug_assert!(end > self.pos, "{} would be empty at {}", kind, self.pos);
        let token = Token::new(kind, &self.input[self.pos..end], self.pos);
        self.pos = end;
        transitions::run(kind, token.text, &mut self.stack, self.lexer.lexicon());
        token
    }
}

impl<'l, 'a> Iterator for Tokens<'l, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let def = self.stack.top().def();

            if let Some((kind, len)) = self.first_match(def, self.pos) {
                return Some(self.emit(kind, self.pos + len));
            }

            // The bottom frame is never a fallthrough context.
            if let (Some(fallthrough), false) = (def.fallthrough, self.stack.is_at_root()) {
                trace!("fallthrough from {} at {}", def.id, self.pos);
                match fallthrough {
                    Fallthrough::Leave => {
                        self.stack.leave();
                    }
                    Fallthrough::Replace(next) => self.stack.replace(Context::new(next)),
                }
                continue;
            }

            if self.pos >= self.input.len() {
                return None;
            }

            let end = self.default_end(def);
            return Some(self.emit(def.default, end));
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
