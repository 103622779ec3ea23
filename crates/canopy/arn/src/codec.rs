//! Formatting and parsing of structured resource identifiers.

use crate::format::ArnFormat;
use crate::parts::ArnParts;
use canopy_types::{ConcatPart, DeferredValue, SynthError, SynthResult, TokenRegistry};

/// Format identifier parts into a (possibly deferred) string.
///
/// Any unresolved segment makes the whole composite unresolved; interpolation
/// never degrades a deferred segment to a literal. Under
/// [`ArnFormat::NoResourceName`] a supplied resource name is omitted.
pub fn format_arn(tokens: &mut TokenRegistry, parts: &ArnParts) -> DeferredValue<String> {
    let mut segments = vec![
        ConcatPart::Lit(format!("arn:{}:{}:", parts.partition, parts.service)),
    ];
    push_segment(&mut segments, &parts.region);
    segments.push(ConcatPart::Lit(":".to_string()));
    push_segment(&mut segments, &parts.account);
    segments.push(ConcatPart::Lit(format!(":{}", parts.resource)));

    if let (Some(separator), Some(name)) = (parts.format.separator(), &parts.resource_name) {
        segments.push(ConcatPart::Lit(separator.to_string()));
        push_segment(&mut segments, name);
    }

    tokens.concat(segments)
}

fn push_segment(segments: &mut Vec<ConcatPart>, value: &DeferredValue<String>) {
    match value {
        DeferredValue::Literal(literal) => segments.push(ConcatPart::Lit(literal.clone())),
        DeferredValue::Unresolved(token) => segments.push(ConcatPart::Token(*token)),
    }
}

/// Parse an identifier string back into parts.
///
/// The inverse of [`format_arn`] for the [`ArnFormat::Colon`] format only;
/// other formats are ambiguous to split and are rejected.
pub fn parse_arn(input: &str, format: ArnFormat) -> SynthResult<ArnParts> {
    if format != ArnFormat::Colon {
        return Err(SynthError::ArnFormat {
            reason: "parsing is supported for the COLON format only".to_string(),
            input: input.to_string(),
        });
    }

    let segments: Vec<&str> = input.splitn(7, ':').collect();
    if segments.len() != 7 {
        return Err(SynthError::ArnFormat {
            reason: format!(
                "expected 7 ':'-separated segments for the COLON format, found {}",
                segments.len()
            ),
            input: input.to_string(),
        });
    }
    if segments[0] != "arn" {
        return Err(SynthError::ArnFormat {
            reason: "identifier must start with 'arn'".to_string(),
            input: input.to_string(),
        });
    }
    if segments[2].is_empty() || segments[5].is_empty() {
        return Err(SynthError::ArnFormat {
            reason: "service and resource segments must not be empty".to_string(),
            input: input.to_string(),
        });
    }

    Ok(ArnParts {
        partition: segments[1].to_string(),
        service: segments[2].to_string(),
        region: DeferredValue::string(segments[3]),
        account: DeferredValue::string(segments[4]),
        resource: segments[5].to_string(),
        resource_name: Some(DeferredValue::string(segments[6])),
        format: ArnFormat::Colon,
    })
}
