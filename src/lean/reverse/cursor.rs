//! Token cursor
//!
//! A single monotonically advancing position into a token stream, with the
//! peek/check/consume primitives the construct recognizers are built from.
//! No recognizer needs more than one token of lookahead.

use crate::lean::lexer::{Keyword, Token, TokenKind};

/// A forward-only cursor over a borrowed token slice.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The current token, without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// True when every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// True when the current token has exactly this kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// True when the current token is this reserved word.
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// True when the current token's source text is exactly `text`.
    pub fn check_text(&self, text: &str) -> bool {
        self.peek().is_some_and(|t| t.text == text)
    }

    /// Consume the current token if it has this kind.
    pub fn consume(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume the current token if it is this reserved word.
    pub fn consume_keyword(&mut self, keyword: Keyword) -> Option<&'a Token> {
        self.consume(TokenKind::Keyword(keyword))
    }
}
