//! Lexer for the Lean surface subset
//!
//! Tokenization is handled entirely by logos: the token rules live on the
//! [`TokenKind`](tokens::TokenKind) enum, and [`tokenize`](lexer_impl::tokenize)
//! materializes the whole stream, attaching each token's source text and its
//! line/column position.
//!
//! The lexer never rejects input. Whitespace and `--` line comments are
//! skipped; any character that matches no other rule becomes a single
//! `Misc` token, because definition bodies and statements can contain
//! arbitrary mathematical symbols.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize;
pub use tokens::{Keyword, Token, TokenKind};
