//! nestcss: nested, variable-aware stylesheets compiled once and re-rendered
//! with new variable values on demand.
//!
//! This package re-exports the workspace crates:
//!
//! - [`syntax`]: syntax tree, normalizer and reader (`nestcss-syntax`)
//! - everything from `nestcss`: compiler, program, runtime, sinks, registry

pub use nestcss::*;
pub use nestcss_syntax as syntax;
