//! Task observability wiring.

use crate::catalog::ServiceIntegration;
use canopy_types::{DeferredValue, IntegrationPattern};
use serde::{Deserialize, Serialize};

/// Metric configuration attached to a task declaration.
///
/// Dimension keys are mode-aware: a callback-style task reports against its
/// callback resource, not the plain integration resource, so dashboards can
/// tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMetrics {
    pub prefix_singular: String,
    pub prefix_plural: String,
    pub dimensions: Vec<(String, DeferredValue<String>)>,
}

impl TaskMetrics {
    /// Metrics with the kind's prefixes and no dimensions yet.
    pub fn for_kind(kind: &ServiceIntegration) -> Self {
        Self {
            prefix_singular: kind.metric_prefix_singular.to_string(),
            prefix_plural: kind.metric_prefix_plural.to_string(),
            dimensions: Vec::new(),
        }
    }

    pub fn with_dimension(
        mut self,
        key: impl Into<String>,
        value: DeferredValue<String>,
    ) -> Self {
        self.dimensions.push((key.into(), value));
        self
    }

    /// Dimension key for the integration resource under the given pattern.
    pub fn resource_dimension_key(pattern: IntegrationPattern) -> &'static str {
        match pattern {
            IntegrationPattern::WaitForCallback => "CallbackResourceArn",
            _ => "ResourceArn",
        }
    }

    /// Attach the integration resource dimension under its mode-aware key.
    pub fn with_resource_dimension(
        self,
        pattern: IntegrationPattern,
        resource: DeferredValue<String>,
    ) -> Self {
        let key = Self::resource_dimension_key(pattern);
        self.with_dimension(key, resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup;

    #[test]
    fn prefixes_come_from_the_catalog_row() {
        let kind = lookup("codebuild", "startBuild").unwrap();
        let metrics = TaskMetrics::for_kind(kind);
        assert_eq!(metrics.prefix_singular, "CodeBuildProject");
        assert_eq!(metrics.prefix_plural, "CodeBuildProjects");
    }

    #[test]
    fn resource_dimension_key_is_mode_aware() {
        assert_eq!(
            TaskMetrics::resource_dimension_key(IntegrationPattern::RequestResponse),
            "ResourceArn"
        );
        assert_eq!(
            TaskMetrics::resource_dimension_key(IntegrationPattern::RunJob),
            "ResourceArn"
        );
        assert_eq!(
            TaskMetrics::resource_dimension_key(IntegrationPattern::WaitForCallback),
            "CallbackResourceArn"
        );
    }

    #[test]
    fn dimensions_keep_insertion_order() {
        let kind = lookup("ecs", "runTask").unwrap();
        let metrics = TaskMetrics::for_kind(kind)
            .with_dimension("Cluster", DeferredValue::string("prod"))
            .with_resource_dimension(
                IntegrationPattern::WaitForCallback,
                DeferredValue::string("arn:aws:states:::ecs:runTask.waitForTaskToken"),
            );
        assert_eq!(metrics.dimensions[0].0, "Cluster");
        assert_eq!(metrics.dimensions[1].0, "CallbackResourceArn");
    }
}
