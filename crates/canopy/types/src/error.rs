//! Structured synthesis errors.
//!
//! Every failure aborts the current synthesis pass and carries the context
//! the host tooling needs to print an actionable diagnostic. The core never
//! downgrades an error to a default value.

use crate::pattern::IntegrationPattern;
use crate::scope::ConstructPath;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a synthesis pass.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SynthError {
    /// The environment axis is a known literal, but the fact table has no
    /// matching entry. Fatal: picking a wrong identifier is worse than
    /// failing the build.
    #[error("no fact registered for {key} in {axis_value}")]
    UnknownFact { axis_value: String, key: String },

    /// The declared integration pattern is not in the supported set for the
    /// resource-action kind. A caller-configuration bug.
    #[error(
        "unsupported integration pattern {selected} at {path}; supported patterns: {}",
        .supported.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
    )]
    UnsupportedPattern {
        selected: IntegrationPattern,
        supported: Vec<IntegrationPattern>,
        path: ConstructPath,
    },

    /// Malformed literal input, e.g. a resource path fragment without its
    /// leading separator, or a dialect conflict at render time.
    #[error("{detail} at {path}")]
    Validation {
        detail: String,
        path: ConstructPath,
    },

    /// A malformed identifier was handed to the ARN parser.
    #[error("{reason}: {input}")]
    ArnFormat { reason: String, input: String },
}

impl SynthError {
    /// Shorthand for a validation failure at a construct path.
    pub fn validation(detail: impl Into<String>, path: &ConstructPath) -> Self {
        Self::Validation {
            detail: detail.into(),
            path: path.clone(),
        }
    }
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fact_names_key_and_axis() {
        let err = SynthError::UnknownFact {
            axis_value: "eu-central-2".into(),
            key: "tracing-layer:GENERIC:0.115.0:arm64".into(),
        };
        assert_eq!(
            err.to_string(),
            "no fact registered for tracing-layer:GENERIC:0.115.0:arm64 in eu-central-2"
        );
    }

    #[test]
    fn unsupported_pattern_lists_the_supported_set() {
        let err = SynthError::UnsupportedPattern {
            selected: IntegrationPattern::WaitForCallback,
            supported: vec![
                IntegrationPattern::RequestResponse,
                IntegrationPattern::RunJob,
            ],
            path: ConstructPath::root().child("Build"),
        };
        assert_eq!(
            err.to_string(),
            "unsupported integration pattern WAIT_FOR_CALLBACK at /Build; \
             supported patterns: REQUEST_RESPONSE, RUN_JOB"
        );
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SynthError>();
    }
}
