//! Structural indentation
//!
//! Indentation is derived from capabilities only: tokens that open a block (`{`, `<<`,
//! `%{`, `(` in Scheme) count +1, the matching closers count -1. A line is indented by
//! the depth in effect at its start, minus the closers it begins with, so a line starting
//! with `}` lines up with the line that opened the block.

use crate::ly::token::Token;

/// Indent level of every line, given the tokens of each line in order.
pub fn line_indents<'t, 'a: 't, L>(lines: impl IntoIterator<Item = L>) -> Vec<usize>
where
    L: IntoIterator<Item = &'t Token<'a>>,
{
    let mut depth: i64 = 0;
    let mut indents = Vec::new();
    for line in lines {
        let start = depth;
        let mut leading_dedents: i64 = 0;
        let mut leading = true;
        for token in line {
            if token.kind.is_space() {
                continue;
            }
            let delta = i64::from(token.indent_delta());
            if leading && delta < 0 {
                leading_dedents += 1;
            } else {
                leading = false;
            }
            depth = (depth + delta).max(0);
        }
        indents.push((start - leading_dedents).max(0) as usize);
    }
    indents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ly::document::LexedDocument;
    use crate::ly::lexing::Lexer;

    fn indents(text: &str) -> Vec<usize> {
        LexedDocument::lex(Lexer::shared(), text).indents()
    }

    #[test]
    fn test_nested_blocks() {
        let text = "\\score {\n  \\new Staff {\n    c4\n  }\n}\n";
        assert_eq!(indents(text), vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_closer_after_content_does_not_dedent_line() {
        let text = "{ c4 }\nd\n";
        assert_eq!(indents(text), vec![0, 0]);
    }

    #[test]
    fn test_block_comment_indents() {
        let text = "%{\ncomment\n%}\nx\n";
        assert_eq!(indents(text), vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_stray_closer_never_goes_negative() {
        let text = "}\n}\nx\n";
        assert_eq!(indents(text), vec![0, 0, 0]);
    }
}
