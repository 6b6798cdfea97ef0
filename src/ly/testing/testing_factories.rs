//! Factories for expected token sequences

use crate::ly::token::{Token, TokenKind};

/// A single token at an explicit position.
pub fn mk_token(kind: TokenKind, text: &str, position: usize) -> Token<'_> {
    Token::new(kind, text, position)
}

/// Consecutive tokens starting at offset zero.
pub fn mk_tokens<'a>(specs: &[(TokenKind, &'a str)]) -> Vec<Token<'a>> {
    let mut position = 0;
    specs
        .iter()
        .map(|(kind, text)| {
            let token = Token::new(*kind, *text, position);
            position += text.len();
            token
        })
        .collect()
}

/// One-line rendering of a stream, used in assertion messages.
pub fn summarize(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}({:?})", token.kind, token.text))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mk_tokens_positions_are_consecutive() {
        let tokens = mk_tokens(&[
            (TokenKind::Note, "cis"),
            (TokenKind::Duration, "16"),
            (TokenKind::Space, " "),
        ]);
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 3, 5]);
    }

    #[test]
    fn test_summarize() {
        let tokens = mk_tokens(&[(TokenKind::Note, "c"), (TokenKind::Duration, "4")]);
        assert_eq!(summarize(&tokens), r#"Note("c") Duration("4")"#);
    }
}
