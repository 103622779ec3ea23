//! Task declarations: the caller-facing input to a synthesis pass.

use crate::dialect::FieldDialect;
use crate::render::FieldValue;
use canopy_iam::ResourceRef;
use canopy_task::IntegrationOptions;
use canopy_types::ConstructPath;

/// One declared resource integration: the validated options, the primary
/// resource the base actions grant against, and the field mapping destined
/// for the renderer.
#[derive(Debug)]
pub struct TaskDeclaration {
    pub id: String,
    pub path: ConstructPath,
    pub options: IntegrationOptions,
    pub resource: ResourceRef,
    pub base_actions: Vec<String>,
    pub fields: Vec<(String, FieldValue)>,
    /// Per-declaration dialect choice; `None` defers to the document.
    pub dialect: Option<FieldDialect>,
}

impl TaskDeclaration {
    pub fn new(
        id: impl Into<String>,
        path: ConstructPath,
        options: IntegrationOptions,
        resource: ResourceRef,
    ) -> Self {
        Self {
            id: id.into(),
            path,
            options,
            resource,
            base_actions: Vec::new(),
            fields: Vec::new(),
            dialect: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.base_actions.push(action.into());
        self
    }

    pub fn with_actions(
        mut self,
        actions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.base_actions
            .extend(actions.into_iter().map(Into::into));
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.fields.push((key.into(), value));
        self
    }

    pub fn with_dialect(mut self, dialect: FieldDialect) -> Self {
        self.dialect = Some(dialect);
        self
    }
}
