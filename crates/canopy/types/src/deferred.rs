//! Deferred values: literals known at definition time, or references to
//! values that only become concrete at deploy time.

use crate::token::TokenId;
use serde::{Deserialize, Serialize};

/// A value that is either known now or carries the identity of a later-stage
/// resolution.
///
/// Unresolved values compare equal iff their token ids are equal. A
/// `DeferredValue` never changes resolution state in place; resolving
/// produces a new `Literal` bound to the token at emission time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeferredValue<T> {
    /// The value is known at definition time.
    Literal(T),
    /// The value is only available at a later stage; the token identifies it
    /// within the current synthesis pass.
    Unresolved(TokenId),
}

impl<T> DeferredValue<T> {
    /// Wrap a definition-time value.
    pub fn literal(value: T) -> Self {
        Self::Literal(value)
    }

    /// Whether the value is concrete at this point.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The literal value, if resolved.
    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Unresolved(_) => None,
        }
    }

    /// The token identity, if unresolved.
    pub fn token(&self) -> Option<TokenId> {
        match self {
            Self::Literal(_) => None,
            Self::Unresolved(token) => Some(*token),
        }
    }

    /// Apply `f` to the literal value, leaving unresolved values untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DeferredValue<U> {
        match self {
            Self::Literal(value) => DeferredValue::Literal(f(value)),
            Self::Unresolved(token) => DeferredValue::Unresolved(token),
        }
    }
}

impl DeferredValue<String> {
    /// Convenience constructor for literal strings.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }
}

impl<T> From<T> for DeferredValue<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}
