//! # nestcss
//!
//! Compiler and runtime for a CSS dialect with `$variables` and nested
//! rulesets.
//!
//! Source is read into a syntax tree (see [`nestcss_syntax`]), compiled into a
//! [`Program`], and executed by a [`RuntimeInstance`] that writes flat CSS
//! rules into a [`RuleSink`]. The instance can re-render with different
//! variable values at any time without recompiling.
//!
//! ## Quick Start
//!
//! ```rust
//! use nestcss::{RuntimeInstance, StyleSheetBuffer, compile_source};
//!
//! let source = r#"
//!     $color: red;
//!     .box {
//!         color: $color;
//!         .inner { width: 10px; }
//!     }
//! "#;
//!
//! let program = compile_source(source).expect("valid stylesheet");
//! let instance = RuntimeInstance::new(program, StyleSheetBuffer::new()).unwrap();
//!
//! assert_eq!(
//!     instance.sink().rules(),
//!     [".box { color: red }", ".box .inner { width: 10px }"]
//! );
//! ```
//!
//! ## Nesting
//!
//! A nested ruleset always means the descendant combinator. Comma-separated
//! alternatives at any level multiply out:
//!
//! ```css
//! .a, .b { .c { color: red; } }
//! ```
//!
//! renders `.a .c` and `.b .c`. There is no `&` parent reference.
//!
//! ## Modules
//!
//! - [`compiler`]: syntax tree → [`Program`]
//! - [`ir`]: compiled units
//! - [`runtime`]: evaluation context, selector expansion, rendering
//! - [`sink`]: output targets
//! - [`registry`]: ownership of live instances
//! - [`error`]: error types

pub mod compiler;
pub mod error;
pub mod ir;
pub mod registry;
pub mod runtime;
pub mod sink;
pub mod variables;

pub use compiler::compile;
pub use error::{CompileError, NestcssError, RenderError};
pub use ir::{CompiledUnit, Declarations, Program, RuleUnit, SelectorGroup};
pub use registry::{InstanceId, RuntimeRegistry};
pub use runtime::{EvaluationContext, RuntimeInstance, expand_selectors};
pub use sink::{RuleSink, StyleSheetBuffer};
pub use variables::{VARIABLE_SIGIL, Variables};

/// Reads and compiles dialect source in one step.
pub fn compile_source(source: &str) -> Result<Program, NestcssError> {
    let tree = nestcss_syntax::parse(source)?;
    Ok(compile(tree)?)
}
