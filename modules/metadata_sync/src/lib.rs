//! Remote metadata synchronization module.
//!
//! Mediates between the process-local exported-metadata cache and a
//! remote metadata store so that peers can discover what an
//! application offers without a full registry round-trip. Application
//! snapshots are published at most once per revision; per-interface
//! service definitions are published according to the connection's
//! role (provider or consumer).
//!
//! The public surface is [`contract::client::MetadataSyncApi`],
//! implemented locally by [`gateways::local::MetadataSyncLocalClient`]
//! over the singleton [`domain::service::RemoteMetadataService`].

pub mod config;
pub mod contract;
pub mod domain;
pub mod gateways;

pub use config::{MetadataSyncConfig, ReportConfig};
pub use contract::client::MetadataSyncApi;
pub use contract::error::MetadataSyncError;
pub use contract::metrics::{MetricsReporter, METRICS_NAMESPACE};
pub use domain::service::RemoteMetadataService;
