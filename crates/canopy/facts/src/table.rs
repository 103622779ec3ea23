//! The process-wide fact table.

use crate::key::FactKey;
use std::collections::HashMap;

/// Read-only mapping from `(axis value, fact key)` to a literal.
///
/// Built once at process start from a dataset and shared across synthesis
/// passes. Resolution only queries it; deferred references accumulate in the
/// pass-local lookup table, never here.
#[derive(Debug, Clone, Default)]
pub struct FactTable {
    entries: HashMap<(String, String), String>,
}

impl FactTable {
    pub fn builder() -> FactTableBuilder {
        FactTableBuilder::default()
    }

    /// Look up a fact for a concrete axis value.
    pub fn lookup(&self, axis_value: &str, key: &FactKey) -> Option<&str> {
        self.entries
            .get(&(axis_value.to_string(), key.name()))
            .map(String::as_str)
    }

    /// All axis values that carry the given key, sorted for deterministic
    /// emission.
    pub fn axis_values_with(&self, key: &FactKey) -> Vec<&str> {
        let name = key.name();
        let mut values: Vec<&str> = self
            .entries
            .keys()
            .filter(|(_, k)| *k == name)
            .map(|(axis, _)| axis.as_str())
            .collect();
        values.sort_unstable();
        values
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder populating a [`FactTable`] at startup.
#[derive(Debug, Default)]
pub struct FactTableBuilder {
    entries: HashMap<(String, String), String>,
}

impl FactTableBuilder {
    /// Register one fact. Registering the same `(axis, key)` pair again
    /// replaces the value; the table never changes once built.
    pub fn fact(
        mut self,
        axis_value: impl Into<String>,
        key: &FactKey,
        value: impl Into<String>,
    ) -> Self {
        self.entries
            .insert((axis_value.into(), key.name()), value.into());
        self
    }

    pub fn build(self) -> FactTable {
        FactTable {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_registered_facts() {
        let key = FactKey::tracing_layer("GENERIC", "0.115.0", "arm64");
        let table = FactTable::builder()
            .fact("us-east-1", &key, "arn:aws:lambda:us-east-1:123456789012:layer:generic:5")
            .build();

        assert_eq!(
            table.lookup("us-east-1", &key),
            Some("arn:aws:lambda:us-east-1:123456789012:layer:generic:5")
        );
        assert_eq!(table.lookup("eu-west-1", &key), None);
    }

    #[test]
    fn axis_values_are_sorted() {
        let key = FactKey::dns_suffix();
        let table = FactTable::builder()
            .fact("us-west-2", &key, "amazonaws.com")
            .fact("eu-west-1", &key, "amazonaws.com")
            .fact("us-east-1", &key, "amazonaws.com")
            .build();

        assert_eq!(
            table.axis_values_with(&key),
            vec!["eu-west-1", "us-east-1", "us-west-2"]
        );
    }

    #[test]
    fn re_registration_replaces_the_value() {
        let key = FactKey::dns_suffix();
        let table = FactTable::builder()
            .fact("cn-north-1", &key, "amazonaws.com")
            .fact("cn-north-1", &key, "amazonaws.com.cn")
            .build();
        assert_eq!(table.lookup("cn-north-1", &key), Some("amazonaws.com.cn"));
        assert_eq!(table.len(), 1);
    }
}
