//! # canopy-synth
//!
//! The synthesis pass that turns a declaration tree into a deployable
//! configuration document.
//!
//! One [`SynthesisPass`] per document: it validates each declaration's
//! integration options, derives the minimal policy statements, resolves or
//! defers facts, shapes the parameter block under the effective expression
//! dialect, and assembles the [`SynthDocument`] — declarations, the
//! deferred-lookup mapping section and the policy collections — with
//! byte-deterministic serialization.

#![deny(unsafe_code)]

pub mod declaration;
pub mod dialect;
pub mod document;
pub mod emit;
pub mod pass;
pub mod render;

pub use declaration::TaskDeclaration;
pub use dialect::{effective_dialect, FieldDialect};
pub use document::{DeclarationOutput, SynthDocument};
pub use pass::SynthesisPass;
pub use render::{render, FieldValue, RenderedBlock};
