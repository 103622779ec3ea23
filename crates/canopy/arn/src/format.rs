//! Layout variants for structured resource identifiers.

use serde::{Deserialize, Serialize};

/// How the resource and resource-name segments of an identifier are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArnFormat {
    /// `arn:partition:service:region:account:resource` — no name segment.
    NoResourceName,
    /// `arn:partition:service:region:account:resource:name`.
    Colon,
    /// `arn:partition:service:region:account:resource/name`.
    Slash,
    /// Like [`Slash`](Self::Slash), but the name is a path and may itself
    /// contain `/` separators; parsing splits on the first one only.
    SlashResourceName,
}

impl ArnFormat {
    /// Separator between resource and resource name, if the format has one.
    pub fn separator(self) -> Option<char> {
        match self {
            Self::NoResourceName => None,
            Self::Colon => Some(':'),
            Self::Slash | Self::SlashResourceName => Some('/'),
        }
    }
}
