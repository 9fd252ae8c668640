//! # lean-bridge
//!
//! A bidirectional bridge between declaration actions and Lean 4 surface syntax.
//!
//! The crate works on a deliberately restricted structural subset of Lean:
//! scope open/close (`namespace`/`section` ... `end`), structure declarations,
//! function and value definitions, claims (lemma/theorem headers) with an
//! attached solving tactic, and variable declarations.
//!
//! The reverse direction (surface text to actions) is the interesting part: a
//! lexer plus a heuristic recursive-descent converter that never fails and
//! always terminates, reporting anything it had to skip as diagnostics. The
//! forward direction renders an action sequence back to canonical text.
//!
//! ## Testing
//!
//! Converter tests assert on the emitted action sequence and the diagnostics
//! list, never on internal converter state. Shared helpers live in the
//! [testing module](lean::testing).

pub mod lean;
