//! Fluent assertion API for token streams

use super::testing_factories::summarize;
use crate::ly::grammar::ContextId;
use crate::ly::lexing::{ContextStack, Lexed, Lexer};
use crate::ly::token::{Capabilities, MatchTag, Token, TokenKind};

// ============================================================================
// Entry Point
// ============================================================================

/// Lex `input` from a fresh toplevel stack and start asserting on the result.
pub fn assert_tokens(input: &str) -> TokensAssertion<'_> {
    assert_tokens_from(input, ContextStack::new())
}

/// Lex `input` from the given stack and start asserting on the result.
pub fn assert_tokens_from(input: &str, start: ContextStack) -> TokensAssertion<'_> {
    let lexed = Lexer::shared().lex(input, start.clone());
    TokensAssertion {
        input,
        lexed,
        start,
        skip_space: false,
    }
}

// ============================================================================
// Stream Assertions
// ============================================================================

pub struct TokensAssertion<'a> {
    input: &'a str,
    lexed: Lexed<'a>,
    start: ContextStack,
    skip_space: bool,
}

impl<'a> TokensAssertion<'a> {
    /// Ignore whitespace tokens in the assertions that follow.
    pub fn skipping_space(mut self) -> Self {
        self.skip_space = true;
        self
    }

    fn visible(&self) -> Vec<Token<'a>> {
        self.lexed
            .tokens
            .iter()
            .filter(|token| !(self.skip_space && token.kind == TokenKind::Space))
            .copied()
            .collect()
    }

    /// Assert the number of tokens
    pub fn count(self, expected: usize) -> Self {
        let tokens = self.visible();
        assert_eq!(
            tokens.len(),
            expected,
            "Expected {} tokens, found {}: [{}]",
            expected,
            tokens.len(),
            summarize(&tokens)
        );
        self
    }

    /// Assert the exact sequence of kinds
    pub fn kinds(self, expected: &[TokenKind]) -> Self {
        let tokens = self.visible();
        let actual: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
        assert_eq!(
            actual,
            expected,
            "Token kinds differ for {:?}: [{}]",
            self.input,
            summarize(&tokens)
        );
        self
    }

    /// Assert the exact sequence of `(kind, text)` pairs
    pub fn texts(self, expected: &[(TokenKind, &str)]) -> Self {
        let tokens = self.visible();
        let actual: Vec<(TokenKind, &str)> =
            tokens.iter().map(|token| (token.kind, token.text)).collect();
        assert_eq!(actual, expected, "Tokens differ for {:?}", self.input);
        self
    }

    /// Assert on a specific token by index
    pub fn token<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TokenAssertion<'a>),
    {
        let tokens = self.visible();
        assert!(
            index < tokens.len(),
            "Token index {} out of bounds (stream has {} tokens: [{}])",
            index,
            tokens.len(),
            summarize(&tokens)
        );
        assertion(TokenAssertion {
            token: tokens[index],
            context: format!("tokens[{}]", index),
        });
        self
    }

    /// Assert that no token is an error marker
    pub fn no_errors(self) -> Self {
        let errors: Vec<Token<'a>> = self
            .lexed
            .tokens
            .iter()
            .filter(|token| token.capabilities().contains(Capabilities::ERROR))
            .copied()
            .collect();
        assert!(
            errors.is_empty(),
            "Unexpected error tokens in {:?}: [{}]",
            self.input,
            summarize(&errors)
        );
        self
    }

    /// Assert that the token spans cover the whole input without gaps or overlaps
    pub fn covers_input(self) -> Self {
        let mut expected = 0;
        for token in &self.lexed.tokens {
            assert_eq!(
                token.position, expected,
                "Gap or overlap before {} in {:?}",
                token, self.input
            );
            assert!(!token.text.is_empty(), "Empty token {}", token);
            expected = token.end();
        }
        assert_eq!(expected, self.input.len(), "Input not fully covered");
        self
    }

    /// Assert that every match end closes an open match start of the same tag
    pub fn balanced_match_tags(self) -> Self {
        let mut open: Vec<MatchTag> = Vec::new();
        for token in &self.lexed.tokens {
            let Some(tag) = token.match_tag() else {
                continue;
            };
            if token.is_match_start() {
                open.push(tag);
            } else if token.is_match_end() {
                let last = open.pop();
                assert_eq!(
                    last,
                    Some(tag),
                    "{} does not close the innermost open tag in {:?}",
                    token,
                    self.input
                );
            }
        }
        assert!(open.is_empty(), "Unclosed match tags {:?}", open);
        self
    }

    /// Assert the depth of the final stack
    pub fn final_depth(self, expected: usize) -> Self {
        assert_eq!(
            self.lexed.stack.depth(),
            expected,
            "Final stack is {}",
            self.lexed.stack
        );
        self
    }

    /// Assert the context on top of the final stack
    pub fn final_top(self, expected: ContextId) -> Self {
        assert_eq!(
            self.lexed.stack.top().id,
            expected,
            "Final stack is {}",
            self.lexed.stack
        );
        self
    }

    /// Assert that lexing ended on the stack it started from
    pub fn returns_to_start(self) -> Self {
        assert_eq!(
            self.lexed.stack, self.start,
            "Final stack {} differs from start {}",
            self.lexed.stack, self.start
        );
        self
    }

    /// Hand out the lexing result for assertions not covered here.
    pub fn into_lexed(self) -> Lexed<'a> {
        self.lexed
    }
}

// ============================================================================
// Token Assertions
// ============================================================================

pub struct TokenAssertion<'a> {
    token: Token<'a>,
    context: String,
}

impl<'a> TokenAssertion<'a> {
    pub fn kind(self, expected: TokenKind) -> Self {
        assert_eq!(
            self.token.kind, expected,
            "{}: expected kind {}, found {}",
            self.context, expected, self.token
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.token.text, expected,
            "{}: expected text {:?}, found {}",
            self.context, expected, self.token
        );
        self
    }

    pub fn position(self, expected: usize) -> Self {
        assert_eq!(
            self.token.position, expected,
            "{}: expected position {}, found {}",
            self.context, expected, self.token
        );
        self
    }

    pub fn match_tag(self, expected: Option<MatchTag>) -> Self {
        assert_eq!(
            self.token.match_tag(),
            expected,
            "{}: unexpected match tag on {}",
            self.context,
            self.token
        );
        self
    }

    pub fn has(self, capabilities: Capabilities) -> Self {
        assert!(
            self.token.capabilities().contains(capabilities),
            "{}: {} lacks capabilities {}",
            self.context,
            self.token,
            capabilities
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_chain() {
        assert_tokens("{ c4 }")
            .covers_input()
            .balanced_match_tags()
            .skipping_space()
            .kinds(&[
                TokenKind::SequentialStart,
                TokenKind::Note,
                TokenKind::Duration,
                TokenKind::SequentialEnd,
            ])
            .token(0, |t| {
                t.text("{")
                    .position(0)
                    .match_tag(Some(MatchTag::Bracket))
                    .has(Capabilities::INDENT);
            })
            .returns_to_start();
    }

    #[test]
    #[should_panic(expected = "Token kinds differ")]
    fn test_kinds_mismatch_panics() {
        assert_tokens("c").kinds(&[TokenKind::Note]);
    }
}
