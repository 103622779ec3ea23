//! Execution-completion contracts for task-like integrations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a task-like integration completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrationPattern {
    /// Fire-and-forget: the call returns as soon as the service responds.
    RequestResponse,
    /// Run the job and wait for it to run to completion.
    RunJob,
    /// Run and wait for an external callback to report completion.
    WaitForCallback,
}

impl IntegrationPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RequestResponse => "REQUEST_RESPONSE",
            Self::RunJob => "RUN_JOB",
            Self::WaitForCallback => "WAIT_FOR_CALLBACK",
        }
    }

    /// Suffix appended to an integration resource identifier for this
    /// pattern.
    pub fn resource_suffix(self) -> &'static str {
        match self {
            Self::RequestResponse => "",
            Self::RunJob => ".sync",
            Self::WaitForCallback => ".waitForTaskToken",
        }
    }
}

impl fmt::Display for IntegrationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
