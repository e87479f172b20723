use serde::Serialize;
use std::fmt;

/// Ordered decision clauses; order is significant and preserved as pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultClauses(Vec<String>);

impl ResultClauses {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, clause: impl Into<String>) {
        self.0.push(clause.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Clauses joined by newline, as rendered in the decision.
    pub fn render(&self) -> String {
        self.0.join("\n")
    }
}

impl fmt::Display for ResultClauses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a ResultClauses {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
