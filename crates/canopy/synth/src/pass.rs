//! The synthesis pass: one sequential traversal of a declaration tree.

use crate::declaration::TaskDeclaration;
use crate::dialect::FieldDialect;
use crate::document::{DeclarationOutput, SynthDocument};
use crate::render::render;
use canopy_facts::{FactKey, FactResolver, FactTable};
use canopy_iam::synthesize as synthesize_policies;
use canopy_task::TaskMetrics;
use canopy_types::{
    DeferredValue, SynthResult, TargetEnvironment, TokenRegistry,
};
use tracing::{debug, info};

/// One synthesis pass over one document.
///
/// The pass owns the token registry and the deferred-lookup accumulator;
/// the fact table is borrowed, read-only, and safely shared with concurrent
/// passes. Synthesis is a single sequential traversal — later declarations
/// may reference identifiers produced by earlier ones, and ordering must be
/// reproducible. There is no partial success: the first error aborts the
/// pass and no document is emitted.
#[derive(Debug)]
pub struct SynthesisPass<'a> {
    table: &'a FactTable,
    facts: FactResolver<'a>,
    tokens: TokenRegistry,
    env: TargetEnvironment,
    top_dialect: Option<FieldDialect>,
}

impl<'a> SynthesisPass<'a> {
    /// A pass targeting a concrete environment.
    pub fn resolved(
        table: &'a FactTable,
        region: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            table,
            facts: FactResolver::new(table),
            tokens: TokenRegistry::new(),
            env: TargetEnvironment::resolved(region, account),
            top_dialect: None,
        }
    }

    /// A pass whose region and account stay deploy-time placeholders.
    pub fn deferred(table: &'a FactTable) -> Self {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::deferred(&mut tokens);
        Self {
            table,
            facts: FactResolver::new(table),
            tokens,
            env,
            top_dialect: None,
        }
    }

    /// Set the document-level dialect chosen once at the top.
    pub fn with_top_dialect(mut self, dialect: FieldDialect) -> Self {
        self.top_dialect = Some(dialect);
        self
    }

    pub fn environment(&self) -> &TargetEnvironment {
        &self.env
    }

    pub fn tokens_mut(&mut self) -> &mut TokenRegistry {
        &mut self.tokens
    }

    /// Resolve a fact against an explicit axis value.
    pub fn resolve_fact(
        &mut self,
        axis: &DeferredValue<String>,
        key: &FactKey,
    ) -> SynthResult<DeferredValue<String>> {
        self.facts.resolve(&mut self.tokens, axis, key)
    }

    /// Resolve a fact against the pass environment's region axis.
    pub fn resolve_regional_fact(
        &mut self,
        key: &FactKey,
    ) -> SynthResult<DeferredValue<String>> {
        let axis = self.env.region.clone();
        self.facts.resolve(&mut self.tokens, &axis, key)
    }

    /// Traverse the declarations and assemble the output document.
    pub fn synthesize(
        mut self,
        declarations: Vec<TaskDeclaration>,
    ) -> SynthResult<SynthDocument> {
        let mut outputs = Vec::with_capacity(declarations.len());

        for declaration in declarations {
            debug!(id = %declaration.id, path = %declaration.path, "synthesizing declaration");

            let block = render(
                &declaration.fields,
                declaration.dialect,
                self.top_dialect,
                &declaration.path,
            )?;

            let resource = declaration.options.kind.resource_arn(
                &self.env.partition,
                declaration.options.selected,
                &declaration.path,
            )?;

            let statements = synthesize_policies(
                &mut self.tokens,
                &self.env,
                declaration.base_actions.iter().cloned(),
                &declaration.resource,
                &declaration.options.intentions,
                declaration.options.selected,
            );

            let metrics = declaration
                .options
                .metrics
                .clone()
                .unwrap_or_else(|| TaskMetrics::for_kind(declaration.options.kind))
                .with_resource_dimension(
                    declaration.options.selected,
                    DeferredValue::string(resource.clone()),
                );

            outputs.push(DeclarationOutput {
                id: declaration.id,
                resource,
                block,
                statements,
                metrics,
            });
        }

        let lookup_section = self.facts.lookups().render_section(self.table);
        info!(
            declarations = outputs.len(),
            deferred_lookups = self.facts.lookups().len(),
            "synthesis pass complete"
        );
        Ok(SynthDocument::new(outputs, lookup_section, self.tokens))
    }
}
