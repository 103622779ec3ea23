//! The service-integration catalog.
//!
//! Which execution patterns a resource-action kind supports is a static
//! property of the kind: one row of this table, not a type hierarchy. Adding
//! an integration means adding a row.

use canopy_iam::{IntentionResource, PolicyIntention};
use canopy_types::IntegrationPattern;
use canopy_types::IntegrationPattern::{RequestResponse, RunJob, WaitForCallback};

/// One resource-action kind and its static integration properties.
#[derive(Debug)]
pub struct ServiceIntegration {
    pub service: &'static str,
    pub action: &'static str,
    /// Patterns this kind supports; selection outside this set is rejected.
    pub supported: &'static [IntegrationPattern],
    pub metric_prefix_singular: &'static str,
    pub metric_prefix_plural: &'static str,
    /// Name of the managed completion rule the orchestrator registers when
    /// the kind runs under `RUN_JOB`, if the service needs one.
    pub completion_rule: Option<&'static str>,
}

/// All known resource-action kinds.
pub const CATALOG: &[ServiceIntegration] = &[
    ServiceIntegration {
        service: "codebuild",
        action: "startBuild",
        supported: &[RequestResponse, RunJob],
        metric_prefix_singular: "CodeBuildProject",
        metric_prefix_plural: "CodeBuildProjects",
        completion_rule: Some("CodeBuildStartBuildCompletionRule"),
    },
    ServiceIntegration {
        service: "lambda",
        action: "invoke",
        supported: &[RequestResponse, WaitForCallback],
        metric_prefix_singular: "LambdaFunction",
        metric_prefix_plural: "LambdaFunctions",
        completion_rule: None,
    },
    ServiceIntegration {
        service: "sqs",
        action: "sendMessage",
        supported: &[RequestResponse, WaitForCallback],
        metric_prefix_singular: "SqsQueue",
        metric_prefix_plural: "SqsQueues",
        completion_rule: None,
    },
    ServiceIntegration {
        service: "sns",
        action: "publish",
        supported: &[RequestResponse, WaitForCallback],
        metric_prefix_singular: "SnsTopic",
        metric_prefix_plural: "SnsTopics",
        completion_rule: None,
    },
    ServiceIntegration {
        service: "ecs",
        action: "runTask",
        supported: &[RequestResponse, RunJob, WaitForCallback],
        metric_prefix_singular: "EcsTask",
        metric_prefix_plural: "EcsTasks",
        completion_rule: Some("EcsRunTaskCompletionRule"),
    },
    ServiceIntegration {
        service: "glue",
        action: "startJobRun",
        supported: &[RequestResponse, RunJob],
        metric_prefix_singular: "GlueJob",
        metric_prefix_plural: "GlueJobs",
        completion_rule: Some("GlueStartJobRunCompletionRule"),
    },
    ServiceIntegration {
        service: "batch",
        action: "submitJob",
        supported: &[RunJob],
        metric_prefix_singular: "BatchJob",
        metric_prefix_plural: "BatchJobs",
        completion_rule: None,
    },
    ServiceIntegration {
        service: "states",
        action: "startExecution",
        supported: &[RequestResponse, RunJob, WaitForCallback],
        metric_prefix_singular: "StateMachineExecution",
        metric_prefix_plural: "StateMachineExecutions",
        completion_rule: Some("StatesStartExecutionCompletionRule"),
    },
];

/// Find the catalog row for a resource-action kind.
pub fn lookup(service: &str, action: &str) -> Option<&'static ServiceIntegration> {
    CATALOG
        .iter()
        .find(|entry| entry.service == service && entry.action == action)
}

impl ServiceIntegration {
    pub fn supports(&self, pattern: IntegrationPattern) -> bool {
        self.supported.contains(&pattern)
    }

    /// The completion-rule intention for this kind, when it has one. The
    /// grant covers registering and inspecting the managed rule, and it only
    /// activates when the selected pattern waits on job completion.
    pub fn completion_intention(&self) -> Option<PolicyIntention> {
        self.completion_rule.map(|rule_name| {
            PolicyIntention::new(
                ["events:PutTargets", "events:PutRule", "events:DescribeRule"],
                IntentionResource::CompletionRule {
                    rule_name: rule_name.to_string(),
                },
                [RunJob],
            )
        })
    }
}
