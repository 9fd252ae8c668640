//! Implementation of the Lean subset lexer
//!
//! Runs the logos lexer over the full source in a single linear pass and
//! converts byte spans into 1-based line/column positions. Lexing errors are
//! folded into `Misc` tokens so that the stream is total.

use crate::lean::lexer::tokens::{Token, TokenKind};
use logos::Logos;

/// Tokenize the whole source, attaching text and line/column to every token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let index = LineIndex::new(source);
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // Anything logos cannot match is still passed through, never dropped
        let kind = result.unwrap_or(TokenKind::Misc);
        let span = lexer.span();
        let (line, column) = index.position(source, span.start);
        tokens.push(Token {
            kind,
            text: source[span].to_string(),
            line,
            column,
        });
    }

    tokens
}

/// Byte offsets of line starts, for span-to-position conversion.
struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based line and column (in characters) of a byte offset.
    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = source[line_start..offset].chars().count() + 1;
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(tokenize("  \t \n\n  "), vec![]);
    }

    #[test]
    fn test_positions_single_line() {
        let tokens = tokenize("def square");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
    }

    #[test]
    fn test_positions_across_lines() {
        let tokens = tokenize("namespace Foo\nend Foo");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 11));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 1));
        assert_eq!((tokens[3].line, tokens[3].column), (2, 5));
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        // The multi-byte symbol occupies one column
        let tokens = tokenize("∀ x");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
    }

    #[test]
    fn test_total_coverage_of_sample() {
        // Concatenated token texts reproduce the source minus whitespace
        let source = "def square (n : Nat) : Nat := n * n";
        let rebuilt: String = tokenize(source).into_iter().map(|t| t.text).collect();
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rebuilt, stripped);
    }

    #[test]
    fn test_token_texts_match_source_slices() {
        use crate::lean::testing::texts_of;
        assert_eq!(
            texts_of("variable (x : Real)"),
            vec!["variable", "(", "x", ":", "Real", ")"]
        );
    }
}
