//! Construct paths for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path of a declaration within the caller's construct tree.
///
/// The tree itself is external; the core only threads the path through so
/// every error names the declaration it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructPath(Vec<String>);

impl ConstructPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended by one child segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConstructPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
