//! The output document of a synthesis pass.

use crate::emit;
use crate::render::RenderedBlock;
use canopy_iam::PolicyStatement;
use canopy_task::TaskMetrics;
use canopy_types::TokenRegistry;
use serde_json::{Map, Value};

/// Everything synthesized for one declaration.
#[derive(Debug)]
pub struct DeclarationOutput {
    pub id: String,
    /// The integration resource identifier, pattern suffix included.
    pub resource: String,
    pub block: RenderedBlock,
    pub statements: Vec<PolicyStatement>,
    pub metrics: TaskMetrics,
}

/// The single tree a completed pass hands back: resource declarations, the
/// deferred-lookup mapping section, and the policy collections. A document
/// only exists for a pass that completed; failures never emit partial
/// documents.
#[derive(Debug)]
pub struct SynthDocument {
    declarations: Vec<DeclarationOutput>,
    lookup_section: Value,
    tokens: TokenRegistry,
}

impl SynthDocument {
    pub(crate) fn new(
        declarations: Vec<DeclarationOutput>,
        lookup_section: Value,
        tokens: TokenRegistry,
    ) -> Self {
        Self {
            declarations,
            lookup_section,
            tokens,
        }
    }

    pub fn declarations(&self) -> &[DeclarationOutput] {
        &self.declarations
    }

    /// The deferred-lookup mapping section: every `(axis, key)` pair that
    /// stayed unresolved, keyed by the axis literals reachable at runtime.
    pub fn lookup_section(&self) -> &Value {
        &self.lookup_section
    }

    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    /// Serialize the document. Key order is canonical, so equal passes
    /// produce byte-identical output.
    pub fn to_json(&self) -> Value {
        let mut resources = Map::new();
        let mut policies = Map::new();
        for output in &self.declarations {
            let mut entry = Map::new();
            entry.insert("resource".to_string(), Value::String(output.resource.clone()));
            entry.insert(
                output.block.block_key().to_string(),
                emit::rendered_block(&self.tokens, &output.block),
            );
            resources.insert(output.id.clone(), Value::Object(entry));

            policies.insert(
                output.id.clone(),
                Value::Array(
                    output
                        .statements
                        .iter()
                        .map(|statement| emit::statement(&self.tokens, statement))
                        .collect(),
                ),
            );
        }

        let mut document = Map::new();
        document.insert("resources".to_string(), Value::Object(resources));
        document.insert("lookups".to_string(), self.lookup_section.clone());
        document.insert("policies".to_string(), Value::Object(policies));
        Value::Object(document)
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}
