//! Policy statements.

use canopy_types::DeferredValue;
use serde::{Deserialize, Serialize};

/// Statement effect. Synthesis only ever grants; denies belong to the
/// caller's hand-written policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
}

/// A single allow-rule: a set of actions over an ordered list of resources.
///
/// Statements are immutable once synthesized; the synthesizer creates them,
/// the resource declaration aggregates and attaches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatement {
    effect: Effect,
    actions: Vec<String>,
    resources: Vec<DeferredValue<String>>,
}

impl PolicyStatement {
    pub fn allow() -> Self {
        Self {
            effect: Effect::Allow,
            actions: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Add one action, keeping first-seen order and dropping duplicates.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        let action = action.into();
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
        self
    }

    pub fn with_actions(
        mut self,
        actions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        for action in actions {
            self = self.with_action(action);
        }
        self
    }

    pub fn with_resource(mut self, resource: DeferredValue<String>) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn resources(&self) -> &[DeferredValue<String>] {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_dedup_in_first_seen_order() {
        let statement = PolicyStatement::allow()
            .with_action("codebuild:StartBuild")
            .with_action("codebuild:StopBuild")
            .with_action("codebuild:StartBuild");
        assert_eq!(
            statement.actions(),
            ["codebuild:StartBuild", "codebuild:StopBuild"]
        );
    }

    #[test]
    fn resources_keep_insertion_order() {
        let statement = PolicyStatement::allow()
            .with_resource(DeferredValue::string("arn:aws:s3:::b"))
            .with_resource(DeferredValue::string("arn:aws:s3:::a"));
        assert_eq!(
            statement.resources(),
            [
                DeferredValue::string("arn:aws:s3:::b"),
                DeferredValue::string("arn:aws:s3:::a"),
            ]
        );
    }
}
