//! The orchestrator-side integration resource identifier.

use crate::catalog::ServiceIntegration;
use canopy_types::{ConstructPath, IntegrationPattern, SynthError, SynthResult};

/// Build the integration resource identifier for a service action under a
/// pattern: `arn:<partition>:states:::<service>:<action>[suffix]`.
///
/// Region and account are intentionally empty; the orchestrator resolves the
/// integration in its own environment. The suffix encodes the pattern.
pub fn integration_resource_arn(
    partition: &str,
    service: &str,
    action: &str,
    pattern: IntegrationPattern,
    path: &ConstructPath,
) -> SynthResult<String> {
    if service.is_empty() || action.is_empty() {
        return Err(SynthError::validation(
            "both a service and an action are required to build an integration resource identifier",
            path,
        ));
    }
    Ok(format!(
        "arn:{}:states:::{}:{}{}",
        partition,
        service,
        action,
        pattern.resource_suffix()
    ))
}

impl ServiceIntegration {
    /// The integration resource identifier of this kind under a pattern.
    pub fn resource_arn(
        &self,
        partition: &str,
        pattern: IntegrationPattern,
        path: &ConstructPath,
    ) -> SynthResult<String> {
        integration_resource_arn(partition, self.service, self.action, pattern, path)
    }
}
