//! # canopy-task
//!
//! Integration-pattern gating for task-like resource declarations.
//!
//! Which execution patterns a resource-action kind supports is data: a row
//! in the [`catalog`]. Constructing [`IntegrationOptions`] validates the
//! selection against that row, wires in the kind's conditional policy
//! intention, and carries the mode-aware metric configuration. Pure
//! classification; no I/O.

#![deny(unsafe_code)]

pub mod catalog;
pub mod metrics;
pub mod options;
pub mod resource_arn;

pub use catalog::{lookup, ServiceIntegration, CATALOG};
pub use metrics::TaskMetrics;
pub use options::{validate_pattern_supported, IntegrationOptions};
pub use resource_arn::integration_resource_arn;
