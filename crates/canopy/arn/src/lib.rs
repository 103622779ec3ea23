//! # canopy-arn
//!
//! Codec for structured resource identifiers, tolerant of deferred
//! components. Formatting over an unresolved region or account produces an
//! unresolved composite; parsing is the inverse of formatting for the COLON
//! layout. Caller-supplied resource paths are validated here, and wildcard
//! method tokens are normalized.

#![deny(unsafe_code)]

pub mod codec;
pub mod format;
pub mod invoke;
pub mod parts;
pub mod path;

pub use codec::{format_arn, parse_arn};
pub use format::ArnFormat;
pub use invoke::invoke_arn;
pub use parts::ArnParts;
pub use path::{normalize_method, validate_resource_path};
