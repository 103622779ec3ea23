//! Fact resolution: resolve now against the table, or defer to the runtime
//! lookup section.

use crate::key::FactKey;
use crate::lookup::DeferredLookupTable;
use crate::table::FactTable;
use canopy_types::{DeferredValue, SynthError, SynthResult, TokenRegistry};
use tracing::{debug, trace};

/// Resolves facts for one synthesis pass.
///
/// Borrows the shared read-only [`FactTable`] and owns the pass-local
/// [`DeferredLookupTable`]. Resolution is pure: for a fixed table and a fixed
/// call sequence, the returned values and the accumulated lookup table are
/// identical across runs.
#[derive(Debug)]
pub struct FactResolver<'a> {
    table: &'a FactTable,
    lookups: DeferredLookupTable,
}

impl<'a> FactResolver<'a> {
    pub fn new(table: &'a FactTable) -> Self {
        Self {
            table,
            lookups: DeferredLookupTable::new(),
        }
    }

    /// Resolve a fact against an axis value.
    ///
    /// A literal axis resolves now: the table either has the entry or the
    /// pass fails with [`SynthError::UnknownFact`] — never a default, never a
    /// deferred fallback. An unresolved axis registers a deferred lookup and
    /// returns an opaque reference into the lookup table, reusing the entry
    /// for an identical `(axis, key)` pair.
    pub fn resolve(
        &mut self,
        tokens: &mut TokenRegistry,
        axis: &DeferredValue<String>,
        key: &FactKey,
    ) -> SynthResult<DeferredValue<String>> {
        match axis {
            DeferredValue::Literal(axis_value) => {
                match self.table.lookup(axis_value, key) {
                    Some(value) => {
                        trace!(axis = %axis_value, key = %key, "fact resolved from table");
                        Ok(DeferredValue::Literal(value.to_string()))
                    }
                    None => Err(SynthError::UnknownFact {
                        axis_value: axis_value.clone(),
                        key: key.name(),
                    }),
                }
            }
            DeferredValue::Unresolved(axis_token) => {
                let reference = self.lookups.register(tokens, *axis_token, key);
                debug!(axis = %axis_token, key = %key, reference = %reference,
                       "fact deferred to runtime lookup");
                Ok(DeferredValue::Unresolved(reference))
            }
        }
    }

    pub fn lookups(&self) -> &DeferredLookupTable {
        &self.lookups
    }

    /// Hand the accumulated lookup table over for document emission.
    pub fn into_lookups(self) -> DeferredLookupTable {
        self.lookups
    }
}
