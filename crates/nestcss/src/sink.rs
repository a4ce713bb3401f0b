//! Output targets for rendered CSS rules.

/// An ordered rule list a runtime instance renders into.
///
/// The runtime only appends and clears; it never reads rule text back.
pub trait RuleSink {
    /// Appends a rule and returns its index.
    fn insert_rule(&mut self, rule: &str) -> usize;

    /// Removes every rule.
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory sink holding rule text in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheetBuffer {
    rules: Vec<String>,
}

impl StyleSheetBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// All rules, one per line.
    pub fn to_css(&self) -> String {
        self.rules.join("\n")
    }
}

impl RuleSink for StyleSheetBuffer {
    fn insert_rule(&mut self, rule: &str) -> usize {
        self.rules.push(rule.to_string());
        self.rules.len() - 1
    }

    fn clear(&mut self) {
        self.rules.clear();
    }

    fn len(&self) -> usize {
        self.rules.len()
    }
}

impl<S: RuleSink + ?Sized> RuleSink for &mut S {
    fn insert_rule(&mut self, rule: &str) -> usize {
        (**self).insert_rule(rule)
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
