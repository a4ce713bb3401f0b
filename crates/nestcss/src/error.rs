//! Error types for compiling and rendering nestcss programs.
//!
//! Compile errors are permanent: the input tree has a shape the compiler
//! cannot translate, and no partial program is produced. Render errors abort
//! the current render pass; rules emitted before the failure stay in the sink.

use nestcss_syntax::{NodeKind, Position, SyntaxError};
use thiserror::Error;

/// Errors raised while translating a syntax tree into a [`Program`](crate::Program).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    /// A node kind with no translation rule in the position it appeared.
    #[error("unsupported construct `{kind}` {context} at {at}")]
    UnsupportedConstruct {
        kind: NodeKind,
        context: &'static str,
        at: Position,
    },

    /// A selector child that cannot be flattened into a selector string.
    #[error("malformed selector: cannot interpret `{kind}` at {at}")]
    MalformedSelector { kind: NodeKind, at: Position },

    /// A node of a known kind whose children do not have the expected shape.
    #[error("malformed `{kind}` at {at}: {reason}")]
    MalformedNode {
        kind: NodeKind,
        reason: &'static str,
        at: Position,
    },
}

/// Errors raised while executing a program against a sink.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// A declaration referenced a variable missing from the active bindings.
    #[error("Unknown variable {0}")]
    UnknownVariable(String),

    /// A unit list that does not start with exactly one variable initializer.
    #[error("malformed program: {0}")]
    MalformedProgram(&'static str),
}

/// Umbrella error for the one-call entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NestcssError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
