//! The compiled program.
//!
//! A [`Program`] is what the compiler hands to the runtime: one variable
//! initializer followed by the top-level rule units in document order. Each
//! [`RuleUnit`] keeps its own declarations and the units nested inside it, so
//! the runtime can rebuild flat selectors on every render.

use crate::error::RenderError;
use crate::variables::Variables;

/// Selector alternatives at a single nesting level, e.g. `[".a", ".b"]`.
pub type SelectorGroup = Vec<String>;

/// Property → value pairs of one rule, in first-declaration order.
///
/// Values are kept unresolved: a value starting with `$` is looked up when
/// the rule is rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration. A repeated property overwrites the earlier value in
    /// place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == property) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Declarations {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut declarations = Declarations::new();
        for (property, value) in iter {
            declarations.insert(property, value);
        }
        declarations
    }
}

/// A ruleset with its nested rulesets.
///
/// A unit with no declarations and no nested units is valid and renders
/// nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleUnit {
    pub selector_group: SelectorGroup,
    pub local_declarations: Declarations,
    pub nested_units: Vec<RuleUnit>,
}

impl RuleUnit {
    pub fn new(selector_group: SelectorGroup) -> Self {
        Self {
            selector_group,
            ..Default::default()
        }
    }

    pub fn with_declaration(mut self, property: &str, value: &str) -> Self {
        self.local_declarations.insert(property, value);
        self
    }

    pub fn with_nested(mut self, unit: RuleUnit) -> Self {
        self.nested_units.push(unit);
        self
    }
}

/// One element of a compiled unit list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompiledUnit {
    /// Top-level variable definitions; always the first unit.
    VariableInitializer(Variables),
    Rule(RuleUnit),
}

/// A compiled stylesheet: the initializer plus top-level rule units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub initializer: Variables,
    pub units: Vec<RuleUnit>,
}

impl Program {
    pub fn new(initializer: Variables, units: Vec<RuleUnit>) -> Self {
        Self { initializer, units }
    }

    /// The flat unit list, initializer first.
    pub fn into_units(self) -> Vec<CompiledUnit> {
        let mut parts = Vec::with_capacity(self.units.len() + 1);
        parts.push(CompiledUnit::VariableInitializer(self.initializer));
        parts.extend(self.units.into_iter().map(CompiledUnit::Rule));
        parts
    }
}

impl TryFrom<Vec<CompiledUnit>> for Program {
    type Error = RenderError;

    fn try_from(parts: Vec<CompiledUnit>) -> Result<Self, Self::Error> {
        let mut parts = parts.into_iter();
        let initializer = match parts.next() {
            Some(CompiledUnit::VariableInitializer(vars)) => vars,
            Some(CompiledUnit::Rule(_)) => {
                return Err(RenderError::MalformedProgram(
                    "first unit must be the variable initializer",
                ));
            }
            None => return Err(RenderError::MalformedProgram("program has no units")),
        };

        let units = parts
            .map(|part| match part {
                CompiledUnit::Rule(unit) => Ok(unit),
                CompiledUnit::VariableInitializer(_) => Err(RenderError::MalformedProgram(
                    "variable initializer after the first unit",
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Program { initializer, units })
    }
}
