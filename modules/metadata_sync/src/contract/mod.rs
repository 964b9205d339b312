pub mod client;
pub mod error;
pub mod metrics;

pub use client::MetadataSyncApi;
pub use error::MetadataSyncError;
pub use metrics::MetricsReporter;
