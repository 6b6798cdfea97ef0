//! Scheme sub-lexer entry
//!
//! `#` and `$` hand control to a small Scheme grammar. The frame pushed here counts one
//! expression: an atom, a string or a parenthesised list ends it through
//! [`Step::EndArgument`](super::transitions::Step::EndArgument), which pops the frame
//! and hands the completed expression on as an argument of whatever encloses it.
//! `#{ ... #}` switches back to LilyPond music until the closing `#}`.
//!
//! Scheme is not evaluated, and within a list the grammar only separates atoms, strings,
//! comments and nested lists.

use super::stack::Context;
use crate::ly::grammar::ContextId;

/// The frame to push for a Scheme expression expected to deliver `argcount` expressions.
pub fn enter_subexpression(argcount: u32) -> Context {
    Context::with_arguments(ContextId::Scheme, argcount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ly::lexing::Lexer;
    use crate::ly::lexing::stack::ContextStack;
    use crate::ly::token::TokenKind;

    fn kinds(input: &str) -> (Vec<TokenKind>, usize) {
        let lexed = Lexer::shared().lex(input, ContextStack::new());
        (
            lexed.tokens.iter().map(|token| token.kind).collect(),
            lexed.stack.depth(),
        )
    }

    #[test]
    fn test_subexpression_frame() {
        let frame = enter_subexpression(1);
        assert_eq!(frame.id, ContextId::Scheme);
        assert_eq!(frame.argcount, 1);
    }

    #[test]
    fn test_atom_returns_control() {
        let (kinds, depth) = kinds("#red");
        assert_eq!(kinds, vec![TokenKind::SchemeStart, TokenKind::SchemeWord]);
        assert_eq!(depth, 1);
    }

    #[test]
    fn test_nested_list_returns_control_after_last_paren() {
        let (kinds, depth) = kinds("#(a (b 1))");
        assert_eq!(
            kinds,
            vec![
                TokenKind::SchemeStart,
                TokenKind::SchemeOpenParen,
                TokenKind::SchemeWord,
                TokenKind::Space,
                TokenKind::SchemeOpenParen,
                TokenKind::SchemeWord,
                TokenKind::Space,
                TokenKind::SchemeNumber,
                TokenKind::SchemeCloseParen,
                TokenKind::SchemeCloseParen,
            ]
        );
        assert_eq!(depth, 1);
    }

    #[test]
    fn test_quoted_list_and_bool() {
        let (kinds, depth) = kinds("#'(#t)");
        assert_eq!(
            kinds,
            vec![
                TokenKind::SchemeStart,
                TokenKind::SchemeQuote,
                TokenKind::SchemeOpenParen,
                TokenKind::SchemeBool,
                TokenKind::SchemeCloseParen,
            ]
        );
        assert_eq!(depth, 1);
    }

    #[test]
    fn test_string_expression() {
        let (kinds, depth) = kinds(r#"#"x""#);
        assert_eq!(
            kinds,
            vec![
                TokenKind::SchemeStart,
                TokenKind::StringQuotedStart,
                TokenKind::String,
                TokenKind::StringQuotedEnd,
            ]
        );
        assert_eq!(depth, 1);
    }

    #[test]
    fn test_embedded_lilypond() {
        let (kinds, depth) = kinds("#{ c4 #}");
        assert_eq!(
            kinds,
            vec![
                TokenKind::SchemeStart,
                TokenKind::SchemeLilyPondStart,
                TokenKind::Space,
                TokenKind::Note,
                TokenKind::Duration,
                TokenKind::Space,
                TokenKind::SchemeLilyPondEnd,
            ]
        );
        assert_eq!(depth, 1);
    }
}
