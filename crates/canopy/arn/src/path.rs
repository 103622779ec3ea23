//! Validation of caller-supplied resource path fragments.

use canopy_types::{ConstructPath, DeferredValue, SynthError, SynthResult};

/// Check that a literal path fragment starts with `/`.
///
/// Unresolved fragments are exempt: their shape is only known at deploy time
/// and the check cannot apply.
pub fn validate_resource_path(
    fragment: &DeferredValue<String>,
    path: &ConstructPath,
) -> SynthResult<()> {
    if let Some(literal) = fragment.as_literal() {
        if !literal.starts_with('/') {
            return Err(SynthError::validation(
                format!("resource path must start with '/': {}", literal),
                path,
            ));
        }
    }
    Ok(())
}

/// Normalize a wildcard method token: `ANY` in any casing becomes `*`; other
/// methods pass through unchanged.
pub fn normalize_method(method: &str) -> String {
    if method.eq_ignore_ascii_case("ANY") {
        "*".to_string()
    } else {
        method.to_string()
    }
}
