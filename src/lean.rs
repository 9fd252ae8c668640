//! Main module for lean-bridge library functionality

pub mod actions;
pub mod lexer;
pub mod mapper;
pub mod render;
pub mod reverse;
pub mod testing;

pub use actions::{Action, ScopeKind};
pub use lexer::{tokenize, Keyword, Token, TokenKind};
pub use mapper::LibraryMapper;
pub use render::{to_surface, Renderer, ToSurface};
pub use reverse::{convert, Conversion, Diagnostic};
