//! Built-in fact dataset.
//!
//! One row per `(region, key)` pair. Versioned layer identifiers are plain
//! data here, not a type per version: adding a release means adding a row.

use crate::key::FactKey;
use crate::table::{FactTable, FactTableBuilder};

const TRACING_LAYER_ACCOUNT: &str = "901920570463";
const INSIGHTS_LAYER_ACCOUNT: &str = "580247275435";

/// Regions the built-in dataset covers.
const REGIONS: &[&str] = &[
    "ap-southeast-2",
    "eu-central-1",
    "eu-west-1",
    "us-east-1",
    "us-east-2",
    "us-west-2",
];

/// Published tracing collector layer versions: (type, version, layer name
/// fragment, layer revision).
const TRACING_LAYERS: &[(&str, &str, &str, u32)] = &[
    ("GENERIC", "0.115.0", "aws-otel-collector", 1),
    ("GENERIC", "0.102.1", "aws-otel-collector", 1),
    ("JAVA_SDK", "1.32.0", "aws-otel-java-wrapper", 1),
    ("PYTHON_SDK", "1.29.0", "aws-otel-python", 1),
];

const TRACING_ARCHITECTURES: &[&str] = &["amd64", "arm64"];

/// Published insights extension versions: (version, layer revision).
const INSIGHTS_LAYERS: &[(&str, u32)] = &[("1.0.229.0", 21), ("1.0.178.0", 14)];

impl FactTable {
    /// The table populated from the built-in dataset.
    pub fn builtin() -> FactTable {
        populate(FactTable::builder()).build()
    }
}

fn populate(mut builder: FactTableBuilder) -> FactTableBuilder {
    for &region in REGIONS {
        builder = builder.fact(region, &FactKey::dns_suffix(), "amazonaws.com");

        for &(layer_type, version, layer, revision) in TRACING_LAYERS {
            for &architecture in TRACING_ARCHITECTURES {
                let key = FactKey::tracing_layer(layer_type, version, architecture);
                builder = builder.fact(
                    region,
                    &key,
                    format!(
                        "arn:aws:lambda:{}:{}:layer:{}-{}-ver-{}:{}",
                        region,
                        TRACING_LAYER_ACCOUNT,
                        layer,
                        architecture,
                        version.replace('.', "-"),
                        revision,
                    ),
                );
            }
        }

        for &(version, revision) in INSIGHTS_LAYERS {
            for &architecture in TRACING_ARCHITECTURES {
                let key = FactKey::insights_layer(version, architecture);
                let suffix = match architecture {
                    "arm64" => "-Arm64",
                    _ => "",
                };
                builder = builder.fact(
                    region,
                    &key,
                    format!(
                        "arn:aws:lambda:{}:{}:layer:LambdaInsightsExtension{}:{}",
                        region, INSIGHTS_LAYER_ACCOUNT, suffix, revision,
                    ),
                );
            }
        }
    }
    builder
}
