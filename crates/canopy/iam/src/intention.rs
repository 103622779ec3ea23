//! Policy intentions: grants that only apply when the selected integration
//! pattern actually needs them.

use canopy_arn::{format_arn, ArnFormat, ArnParts};
use canopy_types::{
    DeferredValue, IntegrationPattern, TargetEnvironment, TokenRegistry,
};
use serde::{Deserialize, Serialize};

/// The resource an intention's extra statement is scoped to. Deliberately a
/// different resource from the declaration's primary one: elevated
/// privileges stay pinned to the narrow object that needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentionResource {
    /// The fixed-name completion rule on the executing account and region.
    CompletionRule { rule_name: String },
    /// An explicit identifier built from parts.
    Arn(ArnParts),
    /// A pre-formatted opaque identifier.
    Opaque(String),
}

/// A conditional grant: actions over a resource, activated only for certain
/// integration patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyIntention {
    pub actions: Vec<String>,
    pub resource: IntentionResource,
    pub activates_on: Vec<IntegrationPattern>,
}

impl PolicyIntention {
    pub fn new(
        actions: impl IntoIterator<Item = impl Into<String>>,
        resource: IntentionResource,
        activates_on: impl IntoIterator<Item = IntegrationPattern>,
    ) -> Self {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
            resource,
            activates_on: activates_on.into_iter().collect(),
        }
    }

    /// Whether the intention's activation predicate holds for the selected
    /// pattern.
    pub fn activates_for(&self, selected: IntegrationPattern) -> bool {
        self.activates_on.contains(&selected)
    }

    /// The identifier of the intention's resource in the given environment.
    pub fn resource_arn(
        &self,
        tokens: &mut TokenRegistry,
        env: &TargetEnvironment,
    ) -> DeferredValue<String> {
        match &self.resource {
            IntentionResource::CompletionRule { rule_name } => {
                let parts = ArnParts::in_env(env, "events", "rule")
                    .with_format(ArnFormat::Slash)
                    .with_resource_name(DeferredValue::string(rule_name.clone()));
                format_arn(tokens, &parts)
            }
            IntentionResource::Arn(parts) => format_arn(tokens, parts),
            IntentionResource::Opaque(arn) => DeferredValue::string(arn.clone()),
        }
    }
}
