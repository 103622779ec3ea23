//! The pass-local deferred lookup table.
//!
//! When a fact is requested against an axis that is itself unresolved, the
//! resolver registers the `(axis, key)` pair here and hands back a reference
//! token. The table becomes the mapping section of the output document,
//! keyed by the axis literals reachable at runtime.

use crate::key::FactKey;
use crate::table::FactTable;
use canopy_types::{TokenExpr, TokenId, TokenRegistry};
use serde_json::Value;
use std::collections::HashMap;

/// One registered deferred lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    /// Token of the axis value the lookup is selected by at runtime.
    pub axis: TokenId,
    /// The fact being looked up.
    pub key: FactKey,
    /// Token referencing this entry; embedded wherever the fact was needed.
    pub reference: TokenId,
}

/// Accumulator for deferred lookups, local to one synthesis pass.
///
/// Entries append in first-seen order and identical `(axis, key)` pairs reuse
/// their entry, so the table cannot grow when the same fact is requested from
/// multiple call sites.
#[derive(Debug, Default)]
pub struct DeferredLookupTable {
    entries: Vec<LookupEntry>,
    index: HashMap<(TokenId, String), TokenId>,
}

impl DeferredLookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the per-axis lookup table in the emitted document.
    pub fn table_name(axis: TokenId) -> String {
        format!("deferred-facts-{}", axis.index())
    }

    /// Register a deferred lookup, reusing the entry for an identical pair.
    pub fn register(
        &mut self,
        tokens: &mut TokenRegistry,
        axis: TokenId,
        key: &FactKey,
    ) -> TokenId {
        let slot = (axis, key.name());
        if let Some(&reference) = self.index.get(&slot) {
            return reference;
        }
        let reference = tokens.intern(TokenExpr::Lookup {
            table: Self::table_name(axis),
            axis,
            key: key.name(),
        });
        self.entries.push(LookupEntry {
            axis,
            key: key.clone(),
            reference,
        });
        self.index.insert(slot, reference);
        reference
    }

    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the mapping section of the output document.
    ///
    /// One table per axis token; per table, a row for every axis literal in
    /// the fact table that carries at least one registered key. Keys absent
    /// for an axis literal are omitted from its row.
    pub fn render_section(&self, facts: &FactTable) -> Value {
        let mut section = serde_json::Map::new();
        for entry in &self.entries {
            let table = section
                .entry(Self::table_name(entry.axis))
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            let Value::Object(rows) = table else {
                continue;
            };
            for axis_value in facts.axis_values_with(&entry.key) {
                let row = rows
                    .entry(axis_value.to_string())
                    .or_insert_with(|| Value::Object(serde_json::Map::new()));
                if let Value::Object(row) = row {
                    if let Some(literal) = facts.lookup(axis_value, &entry.key) {
                        row.insert(entry.key.name(), Value::String(literal.to_string()));
                    }
                }
            }
        }
        Value::Object(section)
    }
}
