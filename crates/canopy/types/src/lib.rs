//! # canopy-types
//!
//! Core value model for Canopy's deferred-value synthesis.
//!
//! Definition-time code treats values it knows and values that only become
//! concrete at deploy time uniformly through [`DeferredValue`]. Unresolved
//! values are backed by tokens interned in a pass-local [`TokenRegistry`],
//! so identity, deduplication and emission order are all deterministic.
//!
//! This crate also carries the vocabulary shared by the rest of the
//! workspace: the target environment axes, integration patterns, construct
//! paths for diagnostics, and the [`SynthError`] taxonomy.

#![deny(unsafe_code)]

pub mod deferred;
pub mod env;
pub mod error;
pub mod pattern;
pub mod scope;
pub mod token;

pub use deferred::DeferredValue;
pub use env::{EnvAxis, TargetEnvironment};
pub use error::{SynthError, SynthResult};
pub use pattern::IntegrationPattern;
pub use scope::ConstructPath;
pub use token::{ConcatPart, TokenExpr, TokenId, TokenRegistry};
