//! Variable environment for the evaluator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mapping from variable name to value.
///
/// Names are unique; a later `define` of the same name replaces the
/// earlier binding. The evaluator only ever reads from an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: BTreeMap<String, i32>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: i32) {
        self.bindings.insert(name.into(), value);
    }

    /// Builder form of [`Environment::define`].
    pub fn with(mut self, name: impl Into<String>, value: i32) -> Self {
        self.define(name, value);
        self
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.bindings.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, i32)> for Environment {
    fn extend<I: IntoIterator<Item = (K, i32)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.define(k, v);
        }
    }
}
