//! Error types for reading dialect source.

use crate::node::Position;
use thiserror::Error;

/// Errors that can occur when reading dialect source into a syntax tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntaxError {
    /// Input the reader has no grammar rule for.
    ///
    /// `found` holds a short excerpt starting at the offending position.
    #[error("unexpected input at {at}: {found}")]
    UnexpectedInput { at: Position, found: String },
}
