//! Forward direction: actions to surface text
//!
//! Pure string formatting. Each action renders to one construct of canonical
//! surface text; a full render joins the header imports, a blank line, and
//! the rendered actions. Type names pass through the [`LibraryMapper`] on
//! the way out.

use crate::lean::actions::{Action, ScopeKind};
use crate::lean::mapper::LibraryMapper;

/// Render a value to canonical surface syntax.
pub trait ToSurface {
    fn to_surface(&self, mapper: &LibraryMapper) -> String;
}

impl ToSurface for Action {
    fn to_surface(&self, mapper: &LibraryMapper) -> String {
        match self {
            Action::ScopeOpen { kind, name } => scope_line(*kind, name.as_deref()),
            Action::ScopeClose { name, .. } => match name {
                Some(name) => format!("end {name}"),
                None => "end".to_string(),
            },
            Action::StructureDecl {
                name,
                extends,
                fields,
            } => {
                let mut lines = Vec::with_capacity(fields.len() + 1);
                if extends.is_empty() {
                    lines.push(format!("structure {name} where"));
                } else {
                    lines.push(format!("structure {name} extends {} where", extends.join(", ")));
                }
                for (field, ty) in fields {
                    lines.push(format!("  {field} : {}", mapper.resolve(ty)));
                }
                lines.join("\n")
            }
            Action::Inductive { name, constructors } => {
                let mut lines = Vec::with_capacity(constructors.len() + 1);
                lines.push(format!("inductive {name}"));
                for constructor in constructors {
                    lines.push(format!("| {constructor}"));
                }
                lines.join("\n")
            }
            Action::Definition {
                name,
                args,
                return_type,
                body,
                computable,
            } => {
                let keyword = if *computable {
                    "def"
                } else {
                    "noncomputable def"
                };
                let mut line = format!("{keyword} {name}");
                for arg in args {
                    line.push(' ');
                    line.push_str(arg);
                }
                if let Some(ty) = return_type {
                    line.push_str(&format!(" : {}", mapper.resolve(ty)));
                }
                line.push_str(&format!(" := {body}"));
                line
            }
            Action::Claim { name, statement } => format!("lemma {name} : {statement}"),
            Action::ProofStep { method } => format!("  := by {method}"),
            Action::VariableDecl { name, ty } => {
                format!("variable ({name} : {})", mapper.resolve(ty))
            }
            Action::Raw { content } => content.clone(),
        }
    }
}

fn scope_line(kind: ScopeKind, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} {name}", kind.keyword()),
        None => kind.keyword().to_string(),
    }
}

/// Render an action sequence without any header, one construct per line.
pub fn to_surface(actions: &[Action], mapper: &LibraryMapper) -> String {
    actions
        .iter()
        .map(|action| action.to_surface(mapper))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full-document renderer: header imports, a blank line, then the actions.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub header_imports: Vec<String>,
    pub mapper: LibraryMapper,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            header_imports: vec!["import Mathlib".to_string()],
            mapper: LibraryMapper::new(),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapper(mapper: LibraryMapper) -> Self {
        Self {
            mapper,
            ..Self::default()
        }
    }

    pub fn render(&self, actions: &[Action]) -> String {
        let mut lines = self.header_imports.clone();
        lines.push(String::new());
        for action in actions {
            lines.push(action.to_surface(&self.mapper));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> LibraryMapper {
        LibraryMapper::new()
    }

    #[test]
    fn test_variable_rendering() {
        let action = Action::VariableDecl {
            name: "x".to_string(),
            ty: "Real".to_string(),
        };
        assert_eq!(action.to_surface(&mapper()), "variable (x : Real)");
    }

    #[test]
    fn test_definition_rendering() {
        let action = Action::Definition {
            name: "square".to_string(),
            args: vec!["(n : Nat)".to_string()],
            return_type: Some("Nat".to_string()),
            body: "n * n".to_string(),
            computable: true,
        };
        assert_eq!(
            action.to_surface(&mapper()),
            "def square (n : Nat) : Nat := n * n"
        );
    }

    #[test]
    fn test_noncomputable_definition_rendering() {
        let action = Action::Definition {
            name: "pi".to_string(),
            args: vec![],
            return_type: Some("Real".to_string()),
            body: "Real.pi".to_string(),
            computable: false,
        };
        assert_eq!(
            action.to_surface(&mapper()),
            "noncomputable def pi : Real := Real.pi"
        );
    }

    #[test]
    fn test_structure_rendering() {
        let action = Action::StructureDecl {
            name: "Point".to_string(),
            extends: vec![],
            fields: vec![
                ("x".to_string(), "Int".to_string()),
                ("y".to_string(), "Int".to_string()),
            ],
        };
        assert_eq!(
            action.to_surface(&mapper()),
            "structure Point where\n  x : Int\n  y : Int"
        );
    }

    #[test]
    fn test_structure_with_extends_rendering() {
        let action = Action::StructureDecl {
            name: "Circle".to_string(),
            extends: vec!["Point".to_string(), "Shape".to_string()],
            fields: vec![("radius".to_string(), "Real".to_string())],
        };
        assert_eq!(
            action.to_surface(&mapper()),
            "structure Circle extends Point, Shape where\n  radius : Real"
        );
    }

    #[test]
    fn test_inductive_rendering() {
        let action = Action::Inductive {
            name: "Color".to_string(),
            constructors: vec![
                "red".to_string(),
                "green".to_string(),
                "blue".to_string(),
            ],
        };
        assert_eq!(
            action.to_surface(&mapper()),
            "inductive Color\n| red\n| green\n| blue"
        );
    }

    #[test]
    fn test_raw_renders_verbatim() {
        let action = Action::Raw {
            content: "open Classical in\nattribute [simp] foo".to_string(),
        };
        assert_eq!(
            action.to_surface(&mapper()),
            "open Classical in\nattribute [simp] foo"
        );
    }

    #[test]
    fn test_claim_and_proof_step_rendering() {
        let claim = Action::Claim {
            name: "foo".to_string(),
            statement: "x > 0".to_string(),
        };
        let step = Action::ProofStep {
            method: "sorry".to_string(),
        };
        assert_eq!(
            to_surface(&[claim, step], &mapper()),
            "lemma foo : x > 0\n  := by sorry"
        );
    }

    #[test]
    fn test_mapper_is_applied_to_types() {
        let mut custom = LibraryMapper::new();
        custom.register("Vec3", "EuclideanSpace.Vec3");
        let action = Action::VariableDecl {
            name: "v".to_string(),
            ty: "Vec3".to_string(),
        };
        assert_eq!(
            action.to_surface(&custom),
            "variable (v : EuclideanSpace.Vec3)"
        );
    }

    #[test]
    fn test_renderer_adds_header() {
        let renderer = Renderer::new();
        let actions = vec![Action::ScopeOpen {
            kind: ScopeKind::Section,
            name: None,
        }];
        assert_eq!(renderer.render(&actions), "import Mathlib\n\nsection");
    }
}
