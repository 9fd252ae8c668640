//! Test helpers shared by unit and integration tests
//!
//! Converter assertions go through [`actions_of`], which also insists the
//! input converted cleanly; tests that care about diagnostics call
//! [`convert`](crate::lean::reverse::convert) directly.

use crate::lean::actions::Action;
use crate::lean::lexer::{tokenize, TokenKind};
use crate::lean::reverse::convert;

/// Convert `source` and return its actions, asserting no diagnostics.
pub fn actions_of(source: &str) -> Vec<Action> {
    let conversion = convert(source);
    assert!(
        conversion.diagnostics.is_empty(),
        "expected clean conversion of {source:?}, got {:?}",
        conversion.diagnostics
    );
    conversion.actions
}

/// The token kinds of `source`, for compact lexer assertions.
pub fn kinds_of(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

/// The token texts of `source`.
pub fn texts_of(source: &str) -> Vec<String> {
    tokenize(source).into_iter().map(|t| t.text).collect()
}
