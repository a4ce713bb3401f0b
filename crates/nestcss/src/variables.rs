//! Ordered variable tables.
//!
//! Variable names always carry the [`VARIABLE_SIGIL`] prefix (`$color`).
//! The same table type backs the compiled initializer, the active bindings
//! of a running instance, and caller-supplied override sets.

/// Marker that distinguishes a variable reference from a literal value.
pub const VARIABLE_SIGIL: char = '$';

/// Returns `true` if a declaration value refers to a variable.
pub fn is_variable_reference(value: &str) -> bool {
    value.starts_with(VARIABLE_SIGIL)
}

/// Name → value bindings in first-definition order.
///
/// Redefining a name replaces its value but keeps its original position.
///
/// # Examples
///
/// ```rust
/// use nestcss::Variables;
///
/// let mut vars = Variables::new();
/// vars.set("$color", "red");
/// vars.set("gap", "4px");
/// vars.set("$color", "blue");
///
/// assert_eq!(vars.get("$color"), Some("blue"));
/// assert_eq!(vars.get("$gap"), Some("4px"));
/// assert_eq!(vars.names().collect::<Vec<_>>(), vec!["$color", "$gap"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(String, String)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`. A name given without the sigil gets one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let mut name = name.into();
        if !is_variable_reference(&name) {
            name.insert(0, VARIABLE_SIGIL);
        }
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// `self` with every binding of `overrides` applied on top.
    pub fn merged_with(&self, overrides: &Variables) -> Variables {
        let mut merged = self.clone();
        merged.extend(overrides.iter());
        merged
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Variables {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut vars = Variables::new();
        vars.extend(iter);
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_overrides_and_keeps_base_order() {
        let base: Variables = [("$a", "1"), ("$b", "2")].into_iter().collect();
        let overrides: Variables = [("$c", "3"), ("$a", "9")].into_iter().collect();

        let merged = base.merged_with(&overrides);
        assert_eq!(
            merged.iter().collect::<Vec<_>>(),
            vec![("$a", "9"), ("$b", "2"), ("$c", "3")]
        );
        assert_eq!(base.get("$a"), Some("1"));
    }

    #[test]
    fn detects_references() {
        assert!(is_variable_reference("$color"));
        assert!(!is_variable_reference("red"));
        assert!(!is_variable_reference(""));
    }
}
