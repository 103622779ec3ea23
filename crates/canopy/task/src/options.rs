//! Integration options: the validated pairing of a resource-action kind and
//! a selected execution pattern.

use crate::catalog::ServiceIntegration;
use crate::metrics::TaskMetrics;
use canopy_iam::PolicyIntention;
use canopy_types::{ConstructPath, IntegrationPattern, SynthError, SynthResult};

/// Reject a pattern outside the supported set.
pub fn validate_pattern_supported(
    selected: IntegrationPattern,
    supported: &[IntegrationPattern],
    path: &ConstructPath,
) -> SynthResult<()> {
    if supported.contains(&selected) {
        return Ok(());
    }
    Err(SynthError::UnsupportedPattern {
        selected,
        supported: supported.to_vec(),
        path: path.clone(),
    })
}

/// A declaration's integration configuration.
///
/// Construction validates the selected pattern against the kind's supported
/// set; an invalid pairing never exists as a value. The kind's completion
/// intention, when present, is wired in automatically.
#[derive(Debug)]
pub struct IntegrationOptions {
    pub kind: &'static ServiceIntegration,
    pub selected: IntegrationPattern,
    pub intentions: Vec<PolicyIntention>,
    pub metrics: Option<TaskMetrics>,
}

impl IntegrationOptions {
    /// Validate and build options for a kind. `selected` defaults to
    /// `REQUEST_RESPONSE` when not given.
    pub fn new(
        kind: &'static ServiceIntegration,
        selected: Option<IntegrationPattern>,
        path: &ConstructPath,
    ) -> SynthResult<Self> {
        let selected = selected.unwrap_or(IntegrationPattern::RequestResponse);
        validate_pattern_supported(selected, kind.supported, path)?;

        let intentions = kind.completion_intention().into_iter().collect();
        Ok(Self {
            kind,
            selected,
            intentions,
            metrics: None,
        })
    }

    /// Add a caller-declared intention on top of the kind's own.
    pub fn with_intention(mut self, intention: PolicyIntention) -> Self {
        self.intentions.push(intention);
        self
    }

    pub fn with_metrics(mut self, metrics: TaskMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }
}
