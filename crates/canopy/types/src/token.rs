//! Token identity and the pass-local registry that interns deferred
//! expressions.
//!
//! Every unresolved value in a synthesis pass is backed by a token whose
//! expression is recorded here. Identical expressions intern to the same
//! token, and tokens are numbered in first-seen order, which is what makes
//! repeated synthesis runs reproducible.

use crate::deferred::DeferredValue;
use crate::env::EnvAxis;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity of an unresolved value within one synthesis pass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TokenId(u32);

impl TokenId {
    /// Position of the token in first-seen order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token#{}", self.0)
    }
}

/// One segment of a concatenation over deferred values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcatPart {
    /// A literal segment.
    Lit(String),
    /// An unresolved segment, embedded by token.
    Token(TokenId),
}

/// The expression a token stands for.
///
/// The emitted document embeds these as opaque placeholders; nothing in the
/// core string-formats an unresolved expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenExpr {
    /// A deploy-time environment axis (region, account).
    Pseudo(EnvAxis),
    /// A deferred fact lookup: entry `key` of `table`, selected at runtime by
    /// the value of `axis`.
    Lookup {
        table: String,
        axis: TokenId,
        key: String,
    },
    /// Concatenation of literal and deferred segments.
    Concat(Vec<ConcatPart>),
}

/// Pass-local interning registry for token expressions.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    exprs: Vec<TokenExpr>,
    interned: HashMap<TokenExpr, TokenId>,
}

impl TokenRegistry {
    /// Create an empty registry for a new synthesis pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct expressions interned so far.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Intern an expression, reusing the token of an identical expression
    /// seen earlier in this pass.
    pub fn intern(&mut self, expr: TokenExpr) -> TokenId {
        if let Some(&id) = self.interned.get(&expr) {
            return id;
        }
        let id = TokenId(self.exprs.len() as u32);
        self.exprs.push(expr.clone());
        self.interned.insert(expr, id);
        id
    }

    /// The expression behind a token.
    ///
    /// # Panics
    ///
    /// Panics if the token was not issued by this registry.
    pub fn expr(&self, id: TokenId) -> &TokenExpr {
        &self.exprs[id.index()]
    }

    /// Concatenate segments into a single deferred string.
    ///
    /// Adjacent literal segments are merged. If every segment is literal the
    /// result folds to a literal; a single unresolved segment makes the whole
    /// composite unresolved. Interpolation never degrades an unresolved
    /// segment to a literal.
    pub fn concat(&mut self, parts: Vec<ConcatPart>) -> DeferredValue<String> {
        let mut merged: Vec<ConcatPart> = Vec::new();
        for part in parts {
            match (merged.last_mut(), part) {
                (Some(ConcatPart::Lit(acc)), ConcatPart::Lit(lit)) => acc.push_str(&lit),
                (_, part) => merged.push(part),
            }
        }
        match merged.as_slice() {
            [] => DeferredValue::Literal(String::new()),
            [ConcatPart::Lit(lit)] => DeferredValue::Literal(lit.clone()),
            _ => DeferredValue::Unresolved(self.intern(TokenExpr::Concat(merged))),
        }
    }
}
