//! # canopy-facts
//!
//! Environment-scoped facts and their resolution strategy.
//!
//! A fact is a dataset-backed constant selected by `(axis value, key)`, e.g.
//! a region-specific layer identifier. The [`FactTable`] is process-wide and
//! read-only once built; each synthesis pass resolves against it through a
//! [`FactResolver`], which either returns literals now or accumulates
//! deferred references in a pass-local [`DeferredLookupTable`] for runtime
//! resolution.

#![deny(unsafe_code)]

pub mod dataset;
pub mod key;
pub mod lookup;
pub mod resolver;
pub mod table;

pub use key::FactKey;
pub use lookup::{DeferredLookupTable, LookupEntry};
pub use resolver::FactResolver;
pub use table::{FactTable, FactTableBuilder};
