use crate::error::RenderError;
use crate::ir::SelectorGroup;
use crate::runtime::expand::expand_selectors;
use crate::variables::{Variables, is_variable_reference};

/// Mutable state of one running program.
///
/// `selector_stack` holds one group per open nesting level. `variables` are
/// the active bindings; `original_variables` is the snapshot taken after the
/// initializer ran and is the base for every override.
#[derive(Clone, Debug, Default)]
pub struct EvaluationContext {
    selector_stack: Vec<SelectorGroup>,
    variables: Variables,
    original_variables: Variables,
}

impl EvaluationContext {
    /// Runs the variable initializer: binds `initial` and snapshots it.
    pub fn initialize(initial: Variables) -> Self {
        Self {
            selector_stack: Vec::new(),
            original_variables: initial.clone(),
            variables: initial,
        }
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn original_variables(&self) -> &Variables {
        &self.original_variables
    }

    pub fn set_variables(&mut self, variables: Variables) {
        self.variables = variables;
    }

    /// Original bindings with `overrides` on top. Never compounds earlier
    /// overrides.
    pub fn overridden(&self, overrides: &Variables) -> Variables {
        self.original_variables.merged_with(overrides)
    }

    pub fn push_selectors(&mut self, group: &SelectorGroup) {
        self.selector_stack.push(group.clone());
    }

    pub fn pop_selectors(&mut self) {
        self.selector_stack.pop();
    }

    /// Drops any levels left open by a pass that failed midway.
    pub fn reset_selectors(&mut self) {
        self.selector_stack.clear();
    }

    pub fn depth(&self) -> usize {
        self.selector_stack.len()
    }

    /// Flat selectors for the innermost open level.
    pub fn current_selectors(&self) -> Vec<String> {
        expand_selectors(&self.selector_stack)
    }

    /// Resolves a declaration value; `$name` values are looked up in the
    /// active bindings, anything else is returned as is.
    pub fn resolve_value<'a>(&'a self, value: &'a str) -> Result<&'a str, RenderError> {
        if !is_variable_reference(value) {
            return Ok(value);
        }
        self.variables
            .get(value)
            .ok_or_else(|| RenderError::UnknownVariable(value.to_string()))
    }
}
