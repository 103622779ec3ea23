//! The components of a structured resource identifier.

use crate::format::ArnFormat;
use canopy_types::{DeferredValue, TargetEnvironment};
use serde::{Deserialize, Serialize};

/// Components of a resource identifier.
///
/// Region and account are deferred values so identifiers can be built before
/// the target environment is concrete. Empty literal region/account segments
/// are permitted (some services are global) and emit as empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArnParts {
    pub partition: String,
    pub service: String,
    pub region: DeferredValue<String>,
    pub account: DeferredValue<String>,
    pub resource: String,
    pub resource_name: Option<DeferredValue<String>>,
    pub format: ArnFormat,
}

impl ArnParts {
    /// Identifier parts for a resource in the given environment.
    pub fn in_env(
        env: &TargetEnvironment,
        service: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            partition: env.partition.clone(),
            service: service.into(),
            region: env.region.clone(),
            account: env.account.clone(),
            resource: resource.into(),
            resource_name: None,
            format: ArnFormat::Slash,
        }
    }

    pub fn with_resource_name(mut self, name: impl Into<DeferredValue<String>>) -> Self {
        self.resource_name = Some(name.into());
        self
    }

    pub fn with_format(mut self, format: ArnFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the region segment (e.g. `*` for a cross-region grant).
    pub fn with_region(mut self, region: impl Into<DeferredValue<String>>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_account(mut self, account: impl Into<DeferredValue<String>>) -> Self {
        self.account = account.into();
        self
    }
}
