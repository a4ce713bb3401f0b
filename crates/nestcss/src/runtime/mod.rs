//! Execution of compiled programs.
//!
//! A [`RuntimeInstance`] owns a program, its [`EvaluationContext`] and the
//! sink it renders into. Construction binds the initial variables and does
//! the first render; [`RuntimeInstance::render_with_variables`] clears the
//! sink and renders again with overrides applied on top of the original
//! variables.
//!
//! ## Example
//!
//! ```rust
//! use nestcss::{RuntimeInstance, StyleSheetBuffer, Variables, compile_source};
//!
//! let program = compile_source("$color: red;\n.box { color: $color; }").unwrap();
//! let mut instance = RuntimeInstance::new(program, StyleSheetBuffer::new()).unwrap();
//! assert_eq!(instance.sink().rules(), [".box { color: red }"]);
//!
//! let overrides: Variables = [("$color", "blue")].into_iter().collect();
//! instance.render_with_variables(&overrides).unwrap();
//! assert_eq!(instance.sink().rules(), [".box { color: blue }"]);
//! ```

pub mod context;
pub mod expand;

pub use context::EvaluationContext;
pub use expand::expand_selectors;

use crate::error::RenderError;
use crate::ir::{CompiledUnit, Declarations, Program, RuleUnit};
use crate::sink::RuleSink;
use crate::variables::Variables;

/// A program bound to its evaluation context and output sink.
#[derive(Debug)]
pub struct RuntimeInstance<S: RuleSink> {
    units: Vec<RuleUnit>,
    context: EvaluationContext,
    sink: S,
}

impl<S: RuleSink> RuntimeInstance<S> {
    /// Binds the program's variables and performs the initial render.
    pub fn new(program: Program, sink: S) -> Result<Self, RenderError> {
        let Program { initializer, units } = program;
        let mut instance = Self {
            units,
            context: EvaluationContext::initialize(initializer),
            sink,
        };

        log::debug!(
            "RUNTIME: instantiate with {} unit(s), {} variable(s)",
            instance.units.len(),
            instance.context.original_variables().len()
        );

        instance.process_blocks()?;
        Ok(instance)
    }

    /// Same as [`RuntimeInstance::new`] for a flat unit list; the first unit
    /// must be the variable initializer.
    pub fn from_units(units: Vec<CompiledUnit>, sink: S) -> Result<Self, RenderError> {
        Self::new(Program::try_from(units)?, sink)
    }

    /// Renders again with `overrides` applied over the original variables.
    ///
    /// The sink is cleared first. If a declaration references an unknown
    /// variable the pass stops there and the rules emitted so far remain.
    pub fn render_with_variables(&mut self, overrides: &Variables) -> Result<(), RenderError> {
        let variables = self.context.overridden(overrides);
        self.context.set_variables(variables);

        log::debug!("RUNTIME: re-render with {} override(s)", overrides.len());

        self.sink.clear();
        self.process_blocks()
    }

    /// Clears the sink and hands it back.
    pub fn dispose(mut self) -> S {
        log::debug!("RUNTIME: dispose, clearing {} rule(s)", self.sink.len());
        self.sink.clear();
        self.sink
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn units(&self) -> &[RuleUnit] {
        &self.units
    }

    pub fn variables(&self) -> &Variables {
        self.context.variables()
    }

    pub fn original_variables(&self) -> &Variables {
        self.context.original_variables()
    }

    fn process_blocks(&mut self) -> Result<(), RenderError> {
        self.context.reset_selectors();
        render_units(&self.units, &mut self.context, &mut self.sink)
    }
}

/// Renders every unit in order.
pub fn render_units<S: RuleSink + ?Sized>(
    units: &[RuleUnit],
    context: &mut EvaluationContext,
    sink: &mut S,
) -> Result<(), RenderError> {
    for unit in units {
        process_block(unit, context, sink)?;
    }
    Ok(())
}

/// Renders one unit: its own rule first, then nested units depth-first, all
/// while its selector group is on the stack.
pub fn process_block<S: RuleSink + ?Sized>(
    unit: &RuleUnit,
    context: &mut EvaluationContext,
    sink: &mut S,
) -> Result<(), RenderError> {
    context.push_selectors(&unit.selector_group);

    if !unit.local_declarations.is_empty() {
        emit_rules(&unit.local_declarations, context, sink)?;
    }

    for nested in &unit.nested_units {
        process_block(nested, context, sink)?;
    }

    context.pop_selectors();
    Ok(())
}

/// One rule per flat selector, declarations joined with `;`. All values are
/// resolved before anything is inserted.
fn emit_rules<S: RuleSink + ?Sized>(
    declarations: &Declarations,
    context: &EvaluationContext,
    sink: &mut S,
) -> Result<(), RenderError> {
    let body = declarations
        .iter()
        .map(|(property, value)| {
            context
                .resolve_value(value)
                .map(|resolved| format!("{property}: {resolved}"))
        })
        .collect::<Result<Vec<_>, _>>()?
        .join(";");

    for selector in context.current_selectors() {
        let index = sink.insert_rule(&format!("{selector} {{ {body} }}"));
        log::trace!("RUNTIME: rule #{index} `{selector}`");
    }
    Ok(())
}
