//! The target environment a document is synthesized against.
//!
//! This is the narrow stack-context interface: the surrounding tooling knows
//! which environment a declaration tree belongs to; the core only needs the
//! partition plus deferred region and account axes.

use crate::deferred::DeferredValue;
use crate::token::{TokenExpr, TokenRegistry};
use serde::{Deserialize, Serialize};

/// Deploy-time environment axes a value can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvAxis {
    Region,
    Account,
}

impl EnvAxis {
    /// Stable key used when embedding the axis in emitted placeholders.
    pub fn key(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Account => "account",
        }
    }
}

/// The environment one synthesis pass targets.
///
/// Region and account are deferred values: a document may be synthesized for
/// a concrete environment, or for an environment only known at deploy time.
/// The partition is always literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEnvironment {
    pub partition: String,
    pub region: DeferredValue<String>,
    pub account: DeferredValue<String>,
}

impl TargetEnvironment {
    /// An environment with concrete region and account.
    pub fn resolved(region: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            partition: "aws".to_string(),
            region: DeferredValue::Literal(region.into()),
            account: DeferredValue::Literal(account.into()),
        }
    }

    /// An environment whose region and account stay deploy-time placeholders.
    pub fn deferred(tokens: &mut TokenRegistry) -> Self {
        Self {
            partition: "aws".to_string(),
            region: DeferredValue::Unresolved(tokens.intern(TokenExpr::Pseudo(EnvAxis::Region))),
            account: DeferredValue::Unresolved(tokens.intern(TokenExpr::Pseudo(EnvAxis::Account))),
        }
    }

    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = partition.into();
        self
    }
}
