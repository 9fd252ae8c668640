//! Reverse direction: surface text back to actions
//!
//! The converter is a single forward pass over the token stream with
//! one-token lookahead and no backtracking. On each top-level position it
//! dispatches by keyword to one construct recognizer; tokens outside any
//! recognized construct are skipped and reported as diagnostics. Every
//! outer-loop iteration consumes at least one token, so conversion
//! terminates on any finite input, and no recognizer ever raises an error:
//! malformed constructs yield partial records and diagnostics instead.
//!
//! Scope nesting is tracked with an explicit stack of open frames. A
//! mismatched or unmatched `end` produces a diagnostic but still closes,
//! preserving the never-fails policy while keeping the bookkeeping
//! observable.

pub mod converter;
pub mod cursor;

pub use converter::{convert, Conversion, Diagnostic};
pub use cursor::TokenCursor;
