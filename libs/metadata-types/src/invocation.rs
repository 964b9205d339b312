//! Value types the metrics-reporting interface is declared over.

use std::collections::BTreeMap;

/// One call against an exposed service, as seen by a metrics
/// reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub method_name: String,
    pub attachments: BTreeMap<String, String>,
}

/// Outcome of a completed invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationResult {
    /// Rendered error, if the invocation failed.
    pub error: Option<String>,
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
