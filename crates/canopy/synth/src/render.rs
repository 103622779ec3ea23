//! The dual-mode parameter renderer.
//!
//! Rendering relabels — it never resolves. The same field mapping rendered
//! under both dialects carries identical values; only the block key and the
//! state-reference field keys differ.

use crate::dialect::{effective_dialect, FieldDialect};
use canopy_types::{ConstructPath, DeferredValue, SynthResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field value destined for the rendered block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// A definition-time value, possibly deferred.
    Static(DeferredValue<Value>),
    /// A reference into the runtime state. Under PATH the key is suffixed
    /// with `.$`; under EXPR the key stays plain. The reference itself is
    /// emitted unchanged either way.
    StateRef(String),
}

impl FieldValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::Static(DeferredValue::Literal(Value::String(value.into())))
    }

    pub fn json(value: Value) -> Self {
        Self::Static(DeferredValue::Literal(value))
    }

    /// Lift a deferred string (e.g. a resolved fact or formatted identifier)
    /// into a field value.
    pub fn deferred(value: DeferredValue<String>) -> Self {
        Self::Static(value.map(Value::String))
    }

    pub fn state_ref(reference: impl Into<String>) -> Self {
        Self::StateRef(reference.into())
    }
}

/// The dialect-specific output shape of one declaration's fields.
///
/// Created once per synthesis pass and discarded after emission into the
/// parent document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedBlock {
    pub mode: FieldDialect,
    pub fields: Vec<(String, FieldValue)>,
}

impl RenderedBlock {
    /// Name of the block in the emitted document.
    pub fn block_key(&self) -> &'static str {
        self.mode.block_key()
    }

    /// Fields with their mode-relabeled keys, in declaration order.
    pub fn field_entries(&self) -> impl Iterator<Item = (String, &FieldValue)> {
        let mode = self.mode;
        self.fields
            .iter()
            .map(move |(key, value)| (relabel(key, value, mode), value))
    }
}

fn relabel(key: &str, value: &FieldValue, mode: FieldDialect) -> String {
    match (mode, value) {
        (FieldDialect::Path, FieldValue::StateRef(_)) => format!("{}.$", key),
        _ => key.to_string(),
    }
}

/// Shape the final block for one declaration.
///
/// The effective dialect is selected exactly once (see
/// [`effective_dialect`]); the values are carried over untouched.
pub fn render(
    fields: &[(String, FieldValue)],
    declared: Option<FieldDialect>,
    top_level: Option<FieldDialect>,
    path: &ConstructPath,
) -> SynthResult<RenderedBlock> {
    let mode = effective_dialect(top_level, declared, path)?;
    Ok(RenderedBlock {
        mode,
        fields: fields.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<(String, FieldValue)> {
        vec![
            ("ProjectName".to_string(), FieldValue::string("my-build")),
            ("SourceVersion".to_string(), FieldValue::state_ref("$.commit")),
        ]
    }

    #[test]
    fn path_mode_suffixes_state_reference_keys() {
        let block = render(&sample_fields(), None, None, &ConstructPath::root()).unwrap();
        let entries: Vec<_> = block.field_entries().collect();
        assert_eq!(block.block_key(), "parameters");
        assert_eq!(entries[0].0, "ProjectName");
        assert_eq!(entries[1].0, "SourceVersion.$");
    }

    #[test]
    fn expr_mode_keeps_keys_plain() {
        let block = render(
            &sample_fields(),
            Some(FieldDialect::Expr),
            None,
            &ConstructPath::root(),
        )
        .unwrap();
        let entries: Vec<_> = block.field_entries().collect();
        assert_eq!(block.block_key(), "arguments");
        assert_eq!(entries[1].0, "SourceVersion");
    }

    #[test]
    fn both_modes_carry_identical_values() {
        let fields = sample_fields();
        let path_block = render(&fields, None, None, &ConstructPath::root()).unwrap();
        let expr_block = render(
            &fields,
            Some(FieldDialect::Expr),
            None,
            &ConstructPath::root(),
        )
        .unwrap();

        let path_values: Vec<_> = path_block.field_entries().map(|(_, v)| v.clone()).collect();
        let expr_values: Vec<_> = expr_block.field_entries().map(|(_, v)| v.clone()).collect();
        assert_eq!(path_values, expr_values);
    }

    #[test]
    fn dialect_conflict_rejects_the_declaration() {
        let err = render(
            &sample_fields(),
            Some(FieldDialect::Path),
            Some(FieldDialect::Expr),
            &ConstructPath::root().child("Task"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("PATH dialect inside an EXPR document"));
    }
}
