//! Deriving minimal-privilege statements from declared intent.

use crate::intention::PolicyIntention;
use crate::statement::PolicyStatement;
use canopy_arn::{format_arn, ArnParts};
use canopy_types::{
    DeferredValue, IntegrationPattern, TargetEnvironment, TokenRegistry,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The primary resource a declaration grants against: structured parts, or
/// an identifier the caller already holds as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceRef {
    Arn(ArnParts),
    Opaque(String),
}

impl ResourceRef {
    fn format(&self, tokens: &mut TokenRegistry) -> DeferredValue<String> {
        match self {
            Self::Arn(parts) => format_arn(tokens, parts),
            Self::Opaque(arn) => DeferredValue::string(arn.clone()),
        }
    }
}

/// Synthesize the statement sequence for one declaration.
///
/// Always one statement covering the base actions against the primary
/// resource, then one statement per intention whose activation predicate
/// holds for the selected pattern. Statements are never merged; callers that
/// declare overlapping intentions over-grant, and that is accepted.
pub fn synthesize(
    tokens: &mut TokenRegistry,
    env: &TargetEnvironment,
    base_actions: impl IntoIterator<Item = impl Into<String>>,
    resource: &ResourceRef,
    intentions: &[PolicyIntention],
    selected: IntegrationPattern,
) -> Vec<PolicyStatement> {
    let primary = resource.format(tokens);
    let mut statements = vec![PolicyStatement::allow()
        .with_actions(base_actions)
        .with_resource(primary)];

    for intention in intentions {
        if !intention.activates_for(selected) {
            continue;
        }
        debug!(pattern = %selected, actions = ?intention.actions,
               "intention activated by integration pattern");
        statements.push(
            PolicyStatement::allow()
                .with_actions(intention.actions.iter().cloned())
                .with_resource(intention.resource_arn(tokens, env)),
        );
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intention::IntentionResource;

    fn completion_intention() -> PolicyIntention {
        PolicyIntention::new(
            ["events:PutTargets", "events:PutRule", "events:DescribeRule"],
            IntentionResource::CompletionRule {
                rule_name: "ManagedCompletionRule".to_string(),
            },
            [IntegrationPattern::RunJob],
        )
    }

    #[test]
    fn run_job_yields_base_and_completion_statements() {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::resolved("us-east-1", "123456789012");
        let resource = ResourceRef::Opaque(
            "arn:aws:codebuild:us-east-1:123456789012:project/my-build".to_string(),
        );

        let statements = synthesize(
            &mut tokens,
            &env,
            ["codebuild:StartBuild", "codebuild:StopBuild"],
            &resource,
            &[completion_intention()],
            IntegrationPattern::RunJob,
        );

        assert_eq!(statements.len(), 2);
        assert_eq!(
            statements[0].actions(),
            ["codebuild:StartBuild", "codebuild:StopBuild"]
        );
        assert_eq!(
            statements[0].resources(),
            [DeferredValue::string(
                "arn:aws:codebuild:us-east-1:123456789012:project/my-build"
            )]
        );
        assert_eq!(
            statements[1].resources(),
            [DeferredValue::string(
                "arn:aws:events:us-east-1:123456789012:rule/ManagedCompletionRule"
            )]
        );
    }

    #[test]
    fn inactive_intention_emits_only_the_base_statement() {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::resolved("us-east-1", "123456789012");
        let resource = ResourceRef::Opaque("arn:aws:sqs:us-east-1:1:queue".to_string());

        let statements = synthesize(
            &mut tokens,
            &env,
            ["sqs:SendMessage"],
            &resource,
            &[completion_intention()],
            IntegrationPattern::RequestResponse,
        );

        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn overlapping_statements_are_not_merged() {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::resolved("us-east-1", "123456789012");
        let resource = ResourceRef::Opaque("*".to_string());
        let overlapping = PolicyIntention::new(
            ["sqs:SendMessage"],
            IntentionResource::Opaque("*".to_string()),
            [IntegrationPattern::RequestResponse],
        );

        let statements = synthesize(
            &mut tokens,
            &env,
            ["sqs:SendMessage"],
            &resource,
            &[overlapping],
            IntegrationPattern::RequestResponse,
        );

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].actions(), statements[1].actions());
    }
}
