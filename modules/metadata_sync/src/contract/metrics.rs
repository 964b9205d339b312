//! Metrics-reporting interface for invocation durations.
//!
//! A sibling collaborator of the synchronization service: hosts may
//! register any number of independent reporter implementations. The
//! interface deliberately declares no error channel; reporting is
//! synchronous and best-effort, and failure handling is entirely up
//! to the implementation.

use metadata_types::{Invocation, InvocationResult, ServiceUrl};
use std::time::Duration;

/// Namespace under which invocation metrics are published.
pub const METRICS_NAMESPACE: &str = "dubbo";

/// Reports the duration of one completed invocation.
pub trait MetricsReporter: Send + Sync {
    fn report(
        &self,
        invoker: &ServiceUrl,
        invocation: &Invocation,
        cost: Duration,
        result: &InvocationResult,
    );
}
