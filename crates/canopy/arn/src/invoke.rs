//! Invoke-style identifiers: stage/method/path grants against an API
//! endpoint, with wildcard defaulting.

use crate::codec::format_arn;
use crate::format::ArnFormat;
use crate::parts::ArnParts;
use crate::path::{normalize_method, validate_resource_path};
use canopy_types::{
    ConcatPart, ConstructPath, DeferredValue, SynthResult, TargetEnvironment, TokenRegistry,
};

/// Build the invocation identifier for an API: stage, method and path each
/// default to `*` when not supplied.
///
/// A literal `path` must start with `/`; a deferred path is embedded as-is.
/// The method wildcard token is normalized case-insensitively.
pub fn invoke_arn(
    tokens: &mut TokenRegistry,
    env: &TargetEnvironment,
    api_id: &str,
    stage: Option<&str>,
    method: Option<&str>,
    path: Option<&DeferredValue<String>>,
    scope: &ConstructPath,
) -> SynthResult<DeferredValue<String>> {
    if let Some(fragment) = path {
        validate_resource_path(fragment, scope)?;
    }

    let stage = stage.unwrap_or("*");
    let method = method.map(normalize_method).unwrap_or_else(|| "*".to_string());

    let mut name = vec![ConcatPart::Lit(format!("{}/{}", stage, method))];
    match path {
        Some(DeferredValue::Literal(literal)) => name.push(ConcatPart::Lit(literal.clone())),
        Some(DeferredValue::Unresolved(token)) => name.push(ConcatPart::Token(*token)),
        None => name.push(ConcatPart::Lit("/*".to_string())),
    }
    let resource_name = tokens.concat(name);

    let parts = ArnParts::in_env(env, "execute-api", api_id)
        .with_format(ArnFormat::SlashResourceName)
        .with_resource_name(resource_name);
    Ok(format_arn(tokens, &parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_wildcards() {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::resolved("us-east-1", "123456789012");
        let arn = invoke_arn(
            &mut tokens,
            &env,
            "api123",
            None,
            None,
            None,
            &ConstructPath::root(),
        )
        .unwrap();
        assert_eq!(
            arn,
            DeferredValue::Literal(
                "arn:aws:execute-api:us-east-1:123456789012:api123/*/*/*".to_string()
            )
        );
    }

    #[test]
    fn explicit_stage_method_and_path() {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::resolved("us-east-1", "123456789012");
        let path = DeferredValue::string("/books");
        let arn = invoke_arn(
            &mut tokens,
            &env,
            "api123",
            Some("prod"),
            Some("any"),
            Some(&path),
            &ConstructPath::root(),
        )
        .unwrap();
        assert_eq!(
            arn,
            DeferredValue::Literal(
                "arn:aws:execute-api:us-east-1:123456789012:api123/prod/*/books".to_string()
            )
        );
    }

    #[test]
    fn bad_literal_path_is_rejected() {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::resolved("us-east-1", "123456789012");
        let path = DeferredValue::string("books");
        let scope = ConstructPath::root().child("Api");
        assert!(invoke_arn(
            &mut tokens,
            &env,
            "api123",
            None,
            None,
            Some(&path),
            &scope
        )
        .is_err());
    }

    #[test]
    fn deferred_environment_yields_a_deferred_identifier() {
        let mut tokens = TokenRegistry::new();
        let env = TargetEnvironment::deferred(&mut tokens);
        let arn = invoke_arn(
            &mut tokens,
            &env,
            "api123",
            None,
            None,
            None,
            &ConstructPath::root(),
        )
        .unwrap();
        assert!(!arn.is_resolved());
    }
}
