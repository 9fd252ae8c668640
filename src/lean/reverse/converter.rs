//! Structural converter
//!
//! Reconstructs an ordered action sequence from a token stream. This is a
//! heuristic recursive-descent pass over a restricted structural subset, not
//! a grammar: each recognizer consumes from its opening keyword through the
//! end of its construct using only local lookahead, and free-form expression
//! text (definition bodies, claim statements) is delimited by scanning for
//! the next reserved word at bracket depth zero. A reserved word inside
//! balanced parentheses, brackets, or braces does not terminate capture; a
//! bare one does, which is the documented limitation of this subset.
//!
//! Nothing here fails. Malformed constructs produce partial records or
//! diagnostics, unrecognized top-level tokens are skipped and reported as
//! coalesced skipped spans, and the converter always returns whatever it
//! accumulated.

use crate::lean::actions::{Action, ScopeKind};
use crate::lean::lexer::{tokenize, Keyword, Token, TokenKind};
use crate::lean::reverse::cursor::TokenCursor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal observation recorded during conversion: a skipped span, a
/// mismatched scope close, an unsupported tactic script. Diagnostics are the
/// converter's only reporting channel; it never returns an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// The converter's complete output: the ordered action sequence plus every
/// diagnostic collected along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversion {
    pub actions: Vec<Action>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert surface text into an ordered action sequence.
///
/// Never fails and always terminates: every iteration of the top-level loop
/// consumes at least one token.
pub fn convert(source: &str) -> Conversion {
    let tokens = tokenize(source);
    Converter::new(&tokens).run()
}

/// An open scope awaiting its `end`.
struct ScopeFrame {
    kind: ScopeKind,
    name: Option<String>,
    line: usize,
    column: usize,
}

/// A run of consecutive top-level tokens outside any recognized construct,
/// coalesced into a single diagnostic when flushed.
struct SkippedSpan {
    line: usize,
    column: usize,
    count: usize,
    preview: Vec<String>,
}

const SKIP_PREVIEW_LIMIT: usize = 5;

/// A recognized top-level construct, one variant per recognizer.
#[derive(Debug, Clone, Copy)]
enum Construct {
    Scope(ScopeKind),
    ScopeEnd,
    Structure,
    Definition,
    NoncomputableDefinition,
    Claim,
    Variable,
}

impl Construct {
    /// The construct this reserved word starts at top level. Total over the
    /// keyword set: `where`, `extends`, `class`, and `instance` only ever
    /// appear inside other constructs and map to `None`, which sends them
    /// down the same skip path as any other unrecognized token.
    fn starting(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Namespace => Some(Construct::Scope(ScopeKind::Namespace)),
            Keyword::Section => Some(Construct::Scope(ScopeKind::Section)),
            Keyword::End => Some(Construct::ScopeEnd),
            Keyword::Structure => Some(Construct::Structure),
            Keyword::Def => Some(Construct::Definition),
            Keyword::Noncomputable => Some(Construct::NoncomputableDefinition),
            Keyword::Lemma | Keyword::Theorem => Some(Construct::Claim),
            Keyword::Variable => Some(Construct::Variable),
            Keyword::Where | Keyword::Extends | Keyword::Class | Keyword::Instance => None,
        }
    }
}

struct Converter<'a> {
    cursor: TokenCursor<'a>,
    scopes: Vec<ScopeFrame>,
    actions: Vec<Action>,
    diagnostics: Vec<Diagnostic>,
    pending_skip: Option<SkippedSpan>,
}

impl<'a> Converter<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            scopes: Vec::new(),
            actions: Vec::new(),
            diagnostics: Vec::new(),
            pending_skip: None,
        }
    }

    fn run(mut self) -> Conversion {
        while let Some(token) = self.cursor.peek() {
            match token.kind {
                TokenKind::Keyword(keyword) => match Construct::starting(keyword) {
                    Some(construct) => {
                        self.flush_skipped();
                        self.dispatch(construct);
                    }
                    None => self.skip_current(),
                },
                _ => self.skip_current(),
            }
        }
        self.flush_skipped();

        for frame in self.scopes.drain(..) {
            let described = match &frame.name {
                Some(name) => format!("{} `{}`", frame.kind, name),
                None => frame.kind.to_string(),
            };
            self.diagnostics.push(Diagnostic {
                message: format!("{described} is never closed"),
                line: frame.line,
                column: frame.column,
            });
        }

        Conversion {
            actions: self.actions,
            diagnostics: self.diagnostics,
        }
    }

    /// Pure construct-to-recognizer dispatch. The construct set is closed,
    /// so this is an exhaustive match rather than open-ended virtual
    /// dispatch.
    fn dispatch(&mut self, construct: Construct) {
        match construct {
            Construct::Scope(kind) => self.scope_open(kind),
            Construct::ScopeEnd => self.scope_close(),
            Construct::Structure => self.structure_decl(),
            Construct::Definition => self.definition(true),
            Construct::NoncomputableDefinition => self.noncomputable_def(),
            Construct::Claim => self.claim(),
            Construct::Variable => self.variable_decl(),
        }
    }

    // --- scope recognizers ---------------------------------------------

    fn scope_open(&mut self, kind: ScopeKind) {
        let (line, column) = self.location();
        self.cursor.advance(); // `namespace` or `section`
        let name = self
            .cursor
            .consume(TokenKind::Identifier)
            .map(|t| t.text.clone());

        self.scopes.push(ScopeFrame {
            kind,
            name: name.clone(),
            line,
            column,
        });
        self.actions.push(Action::ScopeOpen { kind, name });
    }

    fn scope_close(&mut self) {
        let (line, column) = self.location();
        self.cursor.advance(); // `end`
        let written = self
            .cursor
            .consume(TokenKind::Identifier)
            .map(|t| t.text.clone());

        match self.scopes.pop() {
            Some(frame) => {
                if written.is_some() && written != frame.name {
                    let open_name = frame.name.as_deref().unwrap_or("<anonymous>");
                    self.diag(
                        line,
                        column,
                        format!(
                            "`end {}` does not match the open {} `{}`",
                            written.as_deref().unwrap_or(""),
                            frame.kind,
                            open_name
                        ),
                    );
                }
                self.actions.push(Action::ScopeClose {
                    kind: frame.kind,
                    name: written,
                });
            }
            None => {
                self.diag(line, column, "`end` without an open namespace or section");
                // Close it anyway; a section is the weakest assumption.
                self.actions.push(Action::ScopeClose {
                    kind: ScopeKind::Section,
                    name: written,
                });
            }
        }
    }

    // --- declaration recognizers ---------------------------------------

    fn structure_decl(&mut self) {
        let (line, column) = self.location();
        self.cursor.advance(); // `structure`
        let name = match self.cursor.consume(TokenKind::Identifier) {
            Some(t) => t.text.clone(),
            None => {
                self.diag(line, column, "structure without a name");
                return;
            }
        };

        let mut extends = Vec::new();
        if self.cursor.consume_keyword(Keyword::Extends).is_some() {
            while let Some(parent) = self.cursor.consume(TokenKind::Identifier) {
                extends.push(parent.text.clone());
                // Parent list is comma-separated; the comma lexes as Misc
                if !self.cursor.check_text(",") {
                    break;
                }
                self.cursor.advance();
            }
        }

        self.cursor.consume_keyword(Keyword::Where);

        // Fields are `identifier : identifier` pairs read until the next
        // reserved word signals a new top-level construct. Anything else in
        // here is skipped token by token, best effort.
        let mut fields = Vec::new();
        while let Some(token) = self.cursor.peek() {
            if token.kind.is_keyword() {
                break;
            }
            let Some(field) = self.cursor.consume(TokenKind::Identifier) else {
                self.cursor.advance();
                continue;
            };
            if self.cursor.consume(TokenKind::Colon).is_some() {
                if let Some(ty) = self.cursor.consume(TokenKind::Identifier) {
                    fields.push((field.text.clone(), ty.text.clone()));
                }
            }
        }

        self.actions.push(Action::StructureDecl {
            name,
            extends,
            fields,
        });
    }

    fn variable_decl(&mut self) {
        let (line, column) = self.location();
        self.cursor.advance(); // `variable`

        if self.cursor.consume(TokenKind::LParen).is_none() {
            self.diag(
                line,
                column,
                "variable declaration without a parenthesized binder",
            );
            return;
        }
        let name = self.cursor.consume(TokenKind::Identifier);
        self.cursor.consume(TokenKind::Colon);
        let ty = self.cursor.consume(TokenKind::Identifier);
        self.cursor.consume(TokenKind::RParen);

        match (name, ty) {
            (Some(name), Some(ty)) => self.actions.push(Action::VariableDecl {
                name: name.text.clone(),
                ty: ty.text.clone(),
            }),
            _ => self.diag(line, column, "malformed variable binder"),
        }
    }

    fn noncomputable_def(&mut self) {
        let (line, column) = self.location();
        self.cursor.advance(); // `noncomputable`
        if self.cursor.check_keyword(Keyword::Def) {
            self.definition(false);
        } else {
            self.diag(line, column, "`noncomputable` without a following `def`");
        }
    }

    fn definition(&mut self, computable: bool) {
        let (line, column) = self.location();
        self.cursor.advance(); // `def`
        let name = match self.cursor.consume(TokenKind::Identifier) {
            Some(t) => t.text.clone(),
            None => {
                self.diag(line, column, "definition without a name");
                return;
            }
        };

        let mut args = Vec::new();
        while self.cursor.check(TokenKind::LParen) {
            args.push(self.balanced_group());
        }

        let mut return_type = None;
        if self.cursor.consume(TokenKind::Colon).is_some() {
            let ty = self.capture_raw(true);
            if !ty.is_empty() {
                return_type = Some(ty);
            }
        }

        // A definition without `:=` keeps the placeholder body
        let mut body = String::from("sorry");
        if self.cursor.consume(TokenKind::Assign).is_some() {
            let text = self.capture_raw(false);
            if !text.is_empty() {
                body = text;
            }
        }

        self.actions.push(Action::Definition {
            name,
            args,
            return_type,
            body,
            computable,
        });
    }

    fn claim(&mut self) {
        let (line, column) = self.location();
        self.cursor.advance(); // `lemma` or `theorem`
        let name = match self.cursor.consume(TokenKind::Identifier) {
            Some(t) => t.text.clone(),
            None => {
                self.diag(line, column, "claim without a name");
                return;
            }
        };
        if self.cursor.consume(TokenKind::Colon).is_none() {
            self.diag(line, column, format!("claim `{name}` without a statement"));
            return;
        }

        let statement = self.capture_raw(true);
        self.actions.push(Action::Claim { name, statement });

        if self.cursor.consume(TokenKind::Assign).is_none() {
            return;
        }
        // Tactic mode is introduced by the identifier `by`; it is not a
        // reserved word, so it is matched by text. A term-mode proof after
        // `:=` is left for the outer loop, which reports it as skipped.
        if self.cursor.check(TokenKind::Identifier) && self.cursor.check_text("by") {
            let (by_line, by_column) = self.location();
            self.cursor.advance();
            match self.cursor.consume(TokenKind::Identifier) {
                Some(method) => self.actions.push(Action::ProofStep {
                    method: method.text.clone(),
                }),
                None => self.diag(
                    by_line,
                    by_column,
                    "tactic script is not a single identifier; left unparsed",
                ),
            }
        }
    }

    // --- capture helpers -----------------------------------------------

    /// Captures one parenthesized group verbatim, tracking delimiter depth
    /// so that nested brackets stay inside the group. The caller guarantees
    /// the cursor is on the opening paren. An unterminated group captures to
    /// the end of the stream.
    fn balanced_group(&mut self) -> String {
        self.cursor.advance(); // opening paren
        let mut depth = 1usize;
        let mut inner: Vec<&str> = Vec::new();
        while let Some(token) = self.cursor.advance() {
            if token.kind.opens_group() {
                depth += 1;
            } else if token.kind.closes_group() {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            inner.push(&token.text);
        }
        format!("({})", inner.join(" "))
    }

    /// Reads tokens verbatim until the first reserved word at delimiter
    /// depth zero, and optionally until a depth-zero `:=`. Reserved words
    /// inside balanced brackets never terminate the capture.
    fn capture_raw(&mut self, stop_at_assign: bool) -> String {
        let mut depth = 0usize;
        let mut parts: Vec<&str> = Vec::new();
        while let Some(token) = self.cursor.peek() {
            if depth == 0 {
                match token.kind {
                    TokenKind::Keyword(_) => break,
                    TokenKind::Assign if stop_at_assign => break,
                    _ => {}
                }
            }
            if token.kind.opens_group() {
                depth += 1;
            } else if token.kind.closes_group() {
                depth = depth.saturating_sub(1);
            }
            parts.push(&token.text);
            self.cursor.advance();
        }
        parts.join(" ")
    }

    // --- bookkeeping ---------------------------------------------------

    fn location(&self) -> (usize, usize) {
        self.cursor
            .peek()
            .map(|t| (t.line, t.column))
            .unwrap_or((0, 0))
    }

    fn diag(&mut self, line: usize, column: usize, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            message: message.into(),
            line,
            column,
        });
    }

    fn skip_current(&mut self) {
        let Some(token) = self.cursor.advance() else {
            return;
        };
        match &mut self.pending_skip {
            Some(span) => {
                span.count += 1;
                if span.preview.len() < SKIP_PREVIEW_LIMIT {
                    span.preview.push(token.text.clone());
                }
            }
            None => {
                self.pending_skip = Some(SkippedSpan {
                    line: token.line,
                    column: token.column,
                    count: 1,
                    preview: vec![token.text.clone()],
                });
            }
        }
    }

    fn flush_skipped(&mut self) {
        let Some(span) = self.pending_skip.take() else {
            return;
        };
        let mut preview = span.preview.join(" ");
        if span.count > SKIP_PREVIEW_LIMIT {
            preview.push_str(" ...");
        }
        let noun = if span.count == 1 { "token" } else { "tokens" };
        self.diag(
            span.line,
            span.column,
            format!("skipped {} {noun} at top level: `{preview}`", span.count),
        );
    }
}
