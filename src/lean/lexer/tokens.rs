//! Token definitions for the Lean surface subset
//!
//! This module defines all the tokens the lexer can produce. The token rules
//! are defined with the logos derive macro. Keyword recognition relies on
//! longest-match: an identifier that merely contains a reserved word (such as
//! `ending` or `end'`) is longer than the keyword token and therefore lexes
//! as [`TokenKind::Identifier`], while an exact keyword spelling always lexes
//! as [`TokenKind::Keyword`].

use logos::Logos;
use std::fmt;

/// The fixed reserved-word set of the surface subset.
///
/// This is a compile-time constant of the lexer, not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Namespace,
    Section,
    End,
    Structure,
    Def,
    Lemma,
    Theorem,
    Class,
    Variable,
    Where,
    Extends,
    Instance,
    Noncomputable,
}

impl Keyword {
    /// Every reserved word, in declaration order.
    pub const ALL: [Keyword; 13] = [
        Keyword::Namespace,
        Keyword::Section,
        Keyword::End,
        Keyword::Structure,
        Keyword::Def,
        Keyword::Lemma,
        Keyword::Theorem,
        Keyword::Class,
        Keyword::Variable,
        Keyword::Where,
        Keyword::Extends,
        Keyword::Instance,
        Keyword::Noncomputable,
    ];

    /// The surface spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Namespace => "namespace",
            Keyword::Section => "section",
            Keyword::End => "end",
            Keyword::Structure => "structure",
            Keyword::Def => "def",
            Keyword::Lemma => "lemma",
            Keyword::Theorem => "theorem",
            Keyword::Class => "class",
            Keyword::Variable => "variable",
            Keyword::Where => "where",
            Keyword::Extends => "extends",
            Keyword::Instance => "instance",
            Keyword::Noncomputable => "noncomputable",
        }
    }

}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All possible token kinds in the Lean surface subset.
///
/// Whitespace and `--` line comments are skipped during lexing and never
/// produce a token. Everything else is classified; any leftover single
/// character becomes [`TokenKind::Misc`], so lexing is total.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"--[^\n]*")]
pub enum TokenKind {
    #[token("namespace", |_| Keyword::Namespace)]
    #[token("section", |_| Keyword::Section)]
    #[token("end", |_| Keyword::End)]
    #[token("structure", |_| Keyword::Structure)]
    #[token("def", |_| Keyword::Def)]
    #[token("lemma", |_| Keyword::Lemma)]
    #[token("theorem", |_| Keyword::Theorem)]
    #[token("class", |_| Keyword::Class)]
    #[token("variable", |_| Keyword::Variable)]
    #[token("where", |_| Keyword::Where)]
    #[token("extends", |_| Keyword::Extends)]
    #[token("instance", |_| Keyword::Instance)]
    #[token("noncomputable", |_| Keyword::Noncomputable)]
    Keyword(Keyword),

    // Primes are legal in Lean identifiers (h', x'')
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_']*")]
    Identifier,

    // Integer or decimal literal with a single optional point
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    // Double-quoted string with backslash escapes
    #[regex(r#""(\\.|[^"\\])*""#)]
    String,

    #[token("->")]
    Arrow,

    #[token(">=")]
    Ge,

    #[token("<=")]
    Le,

    #[token("!=")]
    Ne,

    #[token(":=")]
    Assign,

    #[token(":")]
    Colon,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("|")]
    Pipe,

    // Catch-all for any other single character (operators, math symbols).
    // The lexer never rejects input.
    #[regex(r".", priority = 0)]
    Misc,
}

impl TokenKind {
    /// Check if this token is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    /// Check if this token opens a bracketed group.
    pub fn opens_group(&self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace
        )
    }

    /// Check if this token closes a bracketed group.
    pub fn closes_group(&self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }
}

/// A single lexical unit: kind, source text, and 1-based source position.
///
/// The stream produced by the lexer is a total, gap-free ordering of all
/// non-whitespace, non-comment units in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` at {}:{}", self.text, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lean::lexer::tokenize;
    use crate::lean::testing::kinds_of as kinds;

    #[test]
    fn test_keywords_lex_as_keywords() {
        for keyword in Keyword::ALL {
            let tokens = tokenize(keyword.as_str());
            assert_eq!(tokens.len(), 1, "{keyword} should be one token");
            assert_eq!(tokens[0].kind, TokenKind::Keyword(keyword));
            assert_eq!(tokens[0].text, keyword.as_str());
        }
    }

    #[test]
    fn test_keyword_containing_identifiers_are_identifiers() {
        // Longer identifiers win over embedded reserved words
        for source in ["ending", "end'", "deft", "sections", "variable_x"] {
            assert_eq!(kinds(source), vec![TokenKind::Identifier], "{source}");
        }
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("-> >= <= != := :"),
            vec![
                TokenKind::Arrow,
                TokenKind::Ge,
                TokenKind::Le,
                TokenKind::Ne,
                TokenKind::Assign,
                TokenKind::Colon,
            ]
        );
    }

    #[test]
    fn test_brackets_and_pipe() {
        assert_eq!(
            kinds("( ) [ ] { } |"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Pipe,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("42"), vec![TokenKind::Number]);
        assert_eq!(kinds("3.14"), vec![TokenKind::Number]);
        // A trailing point is not part of the literal
        assert_eq!(kinds("3."), vec![TokenKind::Number, TokenKind::Misc]);
    }

    #[test]
    fn test_string_literal_with_escape() {
        let tokens = tokenize(r#""hello \"world\"""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, r#""hello \"world\"""#);
    }

    #[test]
    fn test_math_symbols_become_misc() {
        assert_eq!(kinds("∀"), vec![TokenKind::Misc]);
        assert_eq!(
            kinds("x + y"),
            vec![TokenKind::Identifier, TokenKind::Misc, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_line_comments_are_skipped() {
        assert_eq!(
            kinds("x -- the rest vanishes := ("),
            vec![TokenKind::Identifier]
        );
        assert_eq!(
            kinds("a -- comment\nb"),
            vec![TokenKind::Identifier, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_lone_dash_is_misc() {
        assert_eq!(kinds("-"), vec![TokenKind::Misc]);
    }

    #[test]
    fn test_group_predicates() {
        assert!(TokenKind::LParen.opens_group());
        assert!(TokenKind::LBrace.opens_group());
        assert!(TokenKind::RBracket.closes_group());
        assert!(!TokenKind::Pipe.opens_group());
        assert!(!TokenKind::Identifier.closes_group());
    }
}
