//! Keys identifying environment-scoped facts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fact key: a domain plus the parameters that select one row of it.
///
/// Keys are scoped to an environment axis value (usually the region) when
/// looked up; the key itself is axis-independent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactKey {
    domain: String,
    parameters: Vec<String>,
}

impl FactKey {
    pub fn new(
        domain: impl Into<String>,
        parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            domain: domain.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// The key for a tracing collector layer of a given type, version and
    /// architecture.
    pub fn tracing_layer(layer_type: &str, version: &str, architecture: &str) -> Self {
        Self::new("tracing-layer", [layer_type, version, architecture])
    }

    /// The key for a runtime-insights extension layer.
    pub fn insights_layer(version: &str, architecture: &str) -> Self {
        Self::new("insights-layer", [version, architecture])
    }

    /// The key for the service DNS suffix of a partition's regions.
    pub fn dns_suffix() -> Self {
        Self::new("dns-suffix", Vec::<String>::new())
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Canonical name: the domain and parameters joined with `:`. This is the
    /// form facts are registered and emitted under.
    pub fn name(&self) -> String {
        if self.parameters.is_empty() {
            return self.domain.clone();
        }
        let mut name = self.domain.clone();
        for parameter in &self.parameters {
            name.push(':');
            name.push_str(parameter);
        }
        name
    }
}

impl fmt::Display for FactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
