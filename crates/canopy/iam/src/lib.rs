//! # canopy-iam
//!
//! Minimal-privilege policy synthesis. A declaration's base actions always
//! grant against its primary resource; elevated grants (e.g. registering a
//! completion rule) are expressed as [`PolicyIntention`]s whose activation
//! predicate is the selected integration pattern, so they are emitted only
//! when the execution mode actually needs them.

#![deny(unsafe_code)]

pub mod intention;
pub mod statement;
pub mod synthesize;

pub use intention::{IntentionResource, PolicyIntention};
pub use statement::{Effect, PolicyStatement};
pub use synthesize::{synthesize, ResourceRef};
