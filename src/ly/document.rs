//! Line based document lexing
//!
//!     Editors lex LilyPond one line at a time. Several recognizers stop at the end of a
//!     line (line comments, for one), and a line is the natural unit to redo after an
//!     edit. [`LexedDocument`] keeps, for every line, the stack lexing started from and the
//!     stack it ended with.
//!
//! Incremental re-lexing
//!
//!     After a line changes, lexing restarts from that line's saved start stack. Each
//!     following line only needs lexing again while the stack at its start differs from
//!     before: as soon as a re-lexed line ends on the same stack it ended on previously,
//!     everything below is known to be unchanged and the pass stops.

use crate::ly::error::LexError;
use crate::ly::indentation;
use crate::ly::lexing::{ContextStack, Lexer};
use crate::ly::token::{Token, TokenKind};
use log::debug;
use serde::Serialize;
use std::ops::Range;

/// One line of a document, its newline included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexedLine {
    text: String,
    tokens: Vec<(TokenKind, Range<usize>)>,
    start: ContextStack,
    end: ContextStack,
}

impl LexedLine {
    fn lex(lexer: &Lexer, text: String, start: ContextStack) -> Self {
        let (tokens, end) = {
            let lexed = lexer.lex(&text, start.clone());
            let tokens = lexed
                .tokens
                .iter()
                .map(|token| (token.kind, token.span()))
                .collect();
            (tokens, lexed.stack)
        };
        Self {
            text,
            tokens,
            start,
            end,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokens of this line, positions relative to the line start.
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        self.tokens
            .iter()
            .map(|(kind, span)| Token::new(*kind, &self.text[span.clone()], span.start))
    }

    /// Stack checkpoint lexing of this line started from.
    pub fn start_stack(&self) -> &ContextStack {
        &self.start
    }

    /// Stack checkpoint lexing of this line ended with.
    pub fn end_stack(&self) -> &ContextStack {
        &self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexedDocument {
    lines: Vec<LexedLine>,
    initial: ContextStack,
}

impl LexedDocument {
    /// Lex a whole text from the toplevel context.
    pub fn lex(lexer: &Lexer, text: &str) -> Self {
        Self::lex_from(lexer, text, ContextStack::new())
    }

    pub fn lex_from(lexer: &Lexer, text: &str, initial: ContextStack) -> Self {
        let mut stack = initial.clone();
        let mut lines = Vec::new();
        for line in text.split_inclusive('\n') {
            let lexed = LexedLine::lex(lexer, line.to_string(), stack);
            stack = lexed.end.clone();
            lines.push(lexed);
        }
        debug!("lexed document of {} line(s)", lines.len());
        Self { lines, initial }
    }

    pub fn lines(&self) -> &[LexedLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&LexedLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The stack after the last line: deeper than the initial one when a construct was
    /// left open.
    pub fn final_stack(&self) -> &ContextStack {
        self.lines.last().map_or(&self.initial, |line| &line.end)
    }

    pub fn is_unterminated(&self) -> bool {
        self.final_stack().depth() > self.initial.depth()
    }

    pub fn text(&self) -> String {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    /// Tokens of all lines, positions relative to the start of the document.
    pub fn tokens(&self) -> Vec<Token<'_>> {
        let mut offset = 0;
        let mut tokens = Vec::new();
        for line in &self.lines {
            tokens.extend(line.tokens().map(|token| Token {
                position: token.position + offset,
                ..token
            }));
            offset += line.text.len();
        }
        tokens
    }

    /// Structural indent level of each line.
    pub fn indents(&self) -> Vec<usize> {
        let lines: Vec<Vec<Token<'_>>> = self
            .lines
            .iter()
            .map(|line| line.tokens().collect())
            .collect();
        indentation::line_indents(lines.iter())
    }

    /// Replace the text of one line and re-lex as far as the change reaches.
    ///
    /// A missing trailing newline is added to every line but the last. Text with a newline
    /// anywhere else is rejected. Returns the number of lines lexed again.
    pub fn replace_line(
        &mut self,
        lexer: &Lexer,
        index: usize,
        text: &str,
    ) -> Result<usize, LexError> {
        let count = self.lines.len();
        if index >= count {
            return Err(LexError::LineOutOfRange {
                index,
                lines: count,
            });
        }

        if text
            .strip_suffix('\n')
            .unwrap_or(text)
            .contains('\n')
        {
            return Err(LexError::MultilineReplacement { index });
        }

        let mut text = text.to_string();
        if index + 1 < count && !text.ends_with('\n') {
            text.push('\n');
        }

        let mut stack = self.lines[index].start.clone();
        let mut relexed = 0;
        for (offset, line) in self.lines[index..].iter_mut().enumerate() {
            let line_text = if offset == 0 {
                std::mem::take(&mut text)
            } else {
                std::mem::take(&mut line.text)
            };
            let previous_end = line.end.clone();
            *line = LexedLine::lex(lexer, line_text, stack);
            relexed += 1;
            if line.end == previous_end {
                break;
            }
            stack = line.end.clone();
        }
        debug!("re-lexed {relexed} line(s) from line {index}");
        Ok(relexed)
    }
}
