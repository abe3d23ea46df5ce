//! C type-string decomposition and alias synthesis.
//!
//! Turns raw macro arguments like `unsigned long long` or `struct Node *`
//! into a [`ParsedType`] carrying pointer depth, qualifier flags, the
//! remaining base type name, and a short identifier-safe alias.

pub mod alias;
pub mod parser;
pub mod qualifiers;

pub use alias::synthesize_alias;
pub use parser::{ParsedType, parse};
pub use qualifiers::Qualifiers;
