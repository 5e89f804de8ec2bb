//! Core token types shared across the pipeline stages and tooling.

pub mod core;
pub mod scopes;

pub use self::core::{LineRef, Token, TokenKind};
pub use self::scopes::EXTENSION_SCOPE;
