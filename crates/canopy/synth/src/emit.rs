//! Emission of deferred values into the output document.
//!
//! Unresolved tokens are embedded as opaque tagged objects. The deployment
//! executor dereferences them; nothing here ever string-formats one.

use crate::render::{FieldValue, RenderedBlock};
use canopy_iam::PolicyStatement;
use canopy_types::{ConcatPart, DeferredValue, TokenExpr, TokenId, TokenRegistry};
use serde_json::{json, Map, Value};

/// Emit the placeholder object for a token.
pub fn token_value(tokens: &TokenRegistry, id: TokenId) -> Value {
    match tokens.expr(id) {
        TokenExpr::Pseudo(axis) => json!({ "$ref": format!("env:{}", axis.key()) }),
        TokenExpr::Lookup { table, axis, key } => json!({
            "$lookup": {
                "table": table,
                "axis": token_value(tokens, *axis),
                "key": key,
            }
        }),
        TokenExpr::Concat(parts) => {
            let parts: Vec<Value> = parts
                .iter()
                .map(|part| match part {
                    ConcatPart::Lit(literal) => Value::String(literal.clone()),
                    ConcatPart::Token(token) => token_value(tokens, *token),
                })
                .collect();
            json!({ "$concat": parts })
        }
    }
}

/// Emit a deferred string: the literal itself, or the token placeholder.
pub fn deferred_string(tokens: &TokenRegistry, value: &DeferredValue<String>) -> Value {
    match value {
        DeferredValue::Literal(literal) => Value::String(literal.clone()),
        DeferredValue::Unresolved(token) => token_value(tokens, *token),
    }
}

fn deferred_json(tokens: &TokenRegistry, value: &DeferredValue<Value>) -> Value {
    match value {
        DeferredValue::Literal(literal) => literal.clone(),
        DeferredValue::Unresolved(token) => token_value(tokens, *token),
    }
}

fn field_value(tokens: &TokenRegistry, value: &FieldValue) -> Value {
    match value {
        FieldValue::Static(deferred) => deferred_json(tokens, deferred),
        FieldValue::StateRef(reference) => Value::String(reference.clone()),
    }
}

/// Emit a rendered block as its document object.
pub fn rendered_block(tokens: &TokenRegistry, block: &RenderedBlock) -> Value {
    let mut fields = Map::new();
    for (key, value) in block.field_entries() {
        fields.insert(key, field_value(tokens, value));
    }
    Value::Object(fields)
}

/// Emit a policy statement in the identity subsystem's external shape.
pub fn statement(tokens: &TokenRegistry, statement: &PolicyStatement) -> Value {
    json!({
        "effect": "Allow",
        "actions": statement.actions(),
        "resources": statement
            .resources()
            .iter()
            .map(|resource| deferred_string(tokens, resource))
            .collect::<Vec<Value>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_types::EnvAxis;

    #[test]
    fn pseudo_tokens_emit_env_references() {
        let mut tokens = TokenRegistry::new();
        let region = tokens.intern(TokenExpr::Pseudo(EnvAxis::Region));
        assert_eq!(token_value(&tokens, region), json!({ "$ref": "env:region" }));
    }

    #[test]
    fn concat_embeds_nested_tokens_opaquely() {
        let mut tokens = TokenRegistry::new();
        let region = tokens.intern(TokenExpr::Pseudo(EnvAxis::Region));
        let composite = tokens.concat(vec![
            ConcatPart::Lit("arn:aws:s3:".to_string()),
            ConcatPart::Token(region),
        ]);

        let emitted = deferred_string(&tokens, &composite);
        assert_eq!(
            emitted,
            json!({ "$concat": ["arn:aws:s3:", { "$ref": "env:region" }] })
        );
    }

    #[test]
    fn literal_strings_emit_as_plain_strings() {
        let tokens = TokenRegistry::new();
        assert_eq!(
            deferred_string(&tokens, &DeferredValue::string("us-east-1")),
            json!("us-east-1")
        );
    }

    #[test]
    fn statements_emit_actions_and_resources_in_order() {
        let tokens = TokenRegistry::new();
        let stmt = PolicyStatement::allow()
            .with_action("sqs:SendMessage")
            .with_resource(DeferredValue::string("arn:aws:sqs:us-east-1:1:q"));
        assert_eq!(
            statement(&tokens, &stmt),
            json!({
                "effect": "Allow",
                "actions": ["sqs:SendMessage"],
                "resources": ["arn:aws:sqs:us-east-1:1:q"],
            })
        );
    }
}
