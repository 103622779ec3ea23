//! Expression dialects and the precedence that selects one per declaration.

use canopy_types::{ConstructPath, SynthError, SynthResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The expression dialect a declaration's fields are rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldDialect {
    /// Path-reference dialect: state references are separate, suffixed keys.
    Path,
    /// Expression dialect: state references live inline in field values.
    Expr,
}

impl FieldDialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "PATH",
            Self::Expr => "EXPR",
        }
    }

    /// Name of the block the fields are emitted under in this dialect.
    pub fn block_key(self) -> &'static str {
        match self {
            Self::Path => "parameters",
            Self::Expr => "arguments",
        }
    }
}

impl fmt::Display for FieldDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the effective dialect for one declaration, exactly once.
///
/// The per-declaration choice overrides the ambient top-level default, with
/// one exception: a declaration explicitly selecting PATH under an EXPR
/// document is rejected — an EXPR document cannot be locally downgraded.
/// Neither set means PATH.
pub fn effective_dialect(
    top_level: Option<FieldDialect>,
    declared: Option<FieldDialect>,
    path: &ConstructPath,
) -> SynthResult<FieldDialect> {
    match declared {
        Some(FieldDialect::Path) if top_level == Some(FieldDialect::Expr) => {
            Err(SynthError::validation(
                "declaration selects the PATH dialect inside an EXPR document",
                path,
            ))
        }
        Some(dialect) => Ok(dialect),
        None => Ok(top_level.unwrap_or(FieldDialect::Path)),
    }
}
