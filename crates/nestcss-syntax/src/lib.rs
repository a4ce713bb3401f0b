//! # nestcss-syntax
//!
//! Syntax tree for the nestcss dialect: plain CSS plus `$variables` and
//! nested rulesets.
//!
//! The tree shape follows the usual SCSS parser layout. Every node carries a
//! kind tag and either a literal payload or an ordered list of children.
//! Document order of children is significant.
//!
//! This crate provides:
//!
//! - [`SyntaxNode`] / [`NodeKind`]: the tree itself
//! - [`normalize`]: strips whitespace and delimiter nodes before compilation
//! - [`parse`]: a reader for the subset of the dialect the compiler handles
//!
//! ## Example
//!
//! ```rust
//! use nestcss_syntax::{NodeKind, normalize, parse};
//!
//! let mut tree = parse("$color: red;\n.box { color: $color; }").unwrap();
//! normalize(&mut tree);
//!
//! let kinds: Vec<_> = tree.children().iter().map(|n| n.kind().clone()).collect();
//! assert_eq!(kinds, vec![NodeKind::Declaration, NodeKind::Ruleset]);
//! ```

pub mod error;
pub mod node;
pub mod normalize;
pub mod reader;

pub use error::SyntaxError;
pub use node::{NodeContent, NodeKind, Position, SyntaxNode};
pub use normalize::{normalize, normalized};
pub use reader::parse;
