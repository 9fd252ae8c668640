//! The action model
//!
//! An [`Action`] is a single typed, immutable record describing one
//! recognized declarative construct. Actions form a flat, ordered sequence;
//! which declarations lie inside which scope is implicit from the
//! interleaving of `ScopeOpen`/`ScopeClose` markers, not from containment.
//! A `Claim` and the `ProofStep` that discharges it are two independent,
//! adjacent records with no structural link beyond emission order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two nesting constructs of the surface subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Namespace,
    Section,
}

impl ScopeKind {
    /// The surface keyword that opens this scope.
    pub fn keyword(self) -> &'static str {
        match self {
            ScopeKind::Namespace => "namespace",
            ScopeKind::Section => "section",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One recognized declarative construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// `namespace Foo` or `section` — name is optional for sections.
    ScopeOpen {
        kind: ScopeKind,
        name: Option<String>,
    },

    /// `end` or `end Foo`. The kind is the kind of the scope being closed;
    /// the name is the written closing name, unchecked here.
    ScopeClose {
        kind: ScopeKind,
        name: Option<String>,
    },

    /// `structure Point extends Base where` followed by `field : Type` lines.
    /// Fields are an ordered name-to-type mapping.
    StructureDecl {
        name: String,
        extends: Vec<String>,
        fields: Vec<(String, String)>,
    },

    /// `inductive Color` followed by one `| constructor` line each.
    /// Forward-only: the reverse converter reports inductive declarations
    /// as skipped spans.
    Inductive {
        name: String,
        constructors: Vec<String>,
    },

    /// `def name (args…) : ReturnType := body`, or the `noncomputable`
    /// variant. Argument groups are kept as raw signature strings such as
    /// `"(n : Nat)"`; the body is raw expression text.
    Definition {
        name: String,
        args: Vec<String>,
        return_type: Option<String>,
        body: String,
        computable: bool,
    },

    /// `lemma name : statement` — the statement is raw text.
    Claim { name: String, statement: String },

    /// The tactic that discharges the preceding claim, e.g. `sorry`, `simp`.
    ProofStep { method: String },

    /// `variable (x : Real)`.
    VariableDecl { name: String, ty: String },

    /// Verbatim surface text, rendered as-is. The escape hatch for imports,
    /// attributes, and constructs outside the structural subset.
    Raw { content: String },
}

impl Action {
    /// The declared name this action introduces, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Action::ScopeOpen { name, .. } | Action::ScopeClose { name, .. } => name.as_deref(),
            Action::StructureDecl { name, .. }
            | Action::Inductive { name, .. }
            | Action::Definition { name, .. }
            | Action::Claim { name, .. }
            | Action::VariableDecl { name, .. } => Some(name),
            Action::ProofStep { .. } | Action::Raw { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accessor() {
        let action = Action::Definition {
            name: "square".to_string(),
            args: vec!["(n : Nat)".to_string()],
            return_type: Some("Nat".to_string()),
            body: "n * n".to_string(),
            computable: true,
        };
        assert_eq!(action.name(), Some("square"));

        let step = Action::ProofStep {
            method: "simp".to_string(),
        };
        assert_eq!(step.name(), None);
    }

    #[test]
    fn test_serde_tagging() {
        let action = Action::VariableDecl {
            name: "x".to_string(),
            ty: "Real".to_string(),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"action":"variable_decl","name":"x","ty":"Real"}"#);

        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_serde_tagging_of_forward_only_variants() {
        let inductive = Action::Inductive {
            name: "Color".to_string(),
            constructors: vec!["red".to_string(), "green".to_string()],
        };
        let json = serde_json::to_string(&inductive).unwrap();
        assert!(json.starts_with(r#"{"action":"inductive""#));

        let raw = Action::Raw {
            content: "open Classical".to_string(),
        };
        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"action":"raw","content":"open Classical"}"#);
    }

    #[test]
    fn test_scope_kind_keyword() {
        assert_eq!(ScopeKind::Namespace.keyword(), "namespace");
        assert_eq!(ScopeKind::Section.keyword(), "section");
    }
}
