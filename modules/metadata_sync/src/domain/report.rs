//! Remote metadata store abstraction.
//!
//! The synchronization service never talks to a concrete store;
//! everything goes through [`MetadataReport`]. Backends register a
//! factory under their protocol name and are selected through
//! [`ReportConfig`].

use crate::config::ReportConfig;
use metadata_types::{
    MetadataIdentifier, MetadataInfo, ServiceDefinition, SubscriberMetadataIdentifier,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock, RwLock};

/// Errors produced by a metadata store backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("Metadata store request failed: {0}")]
    Store(String),

    #[error("No metadata document for key: {0}")]
    NotFound(String),

    #[error("Metadata document could not be encoded: {0}")]
    Serialization(String),
}

/// Keyed read/write of metadata documents in the remote store.
#[async_trait::async_trait]
pub trait MetadataReport: Send + Sync {
    /// Write an application's exported snapshot under its
    /// application/revision key.
    async fn publish_app_metadata(
        &self,
        id: &SubscriberMetadataIdentifier,
        info: &MetadataInfo,
    ) -> Result<(), ReportError>;

    /// Read the snapshot stored under an application/revision key.
    async fn get_app_metadata(
        &self,
        id: &SubscriberMetadataIdentifier,
    ) -> Result<MetadataInfo, ReportError>;

    /// Write a provider-side service definition.
    async fn store_provider_metadata(
        &self,
        id: &MetadataIdentifier,
        definition: &ServiceDefinition,
    ) -> Result<(), ReportError>;

    /// Write a consumer-side parameter map.
    async fn store_consumer_metadata(
        &self,
        id: &MetadataIdentifier,
        params: &BTreeMap<String, String>,
    ) -> Result<(), ReportError>;
}

/// Builds a report backend from its configuration.
pub type ReportFactory =
    Arc<dyn Fn(&ReportConfig) -> Result<Arc<dyn MetadataReport>, ReportError> + Send + Sync>;

fn factories() -> &'static RwLock<HashMap<String, ReportFactory>> {
    static FACTORIES: OnceLock<RwLock<HashMap<String, ReportFactory>>> = OnceLock::new();
    FACTORIES.get_or_init(|| {
        let mut map: HashMap<String, ReportFactory> = HashMap::new();
        map.insert(
            "memory".to_owned(),
            Arc::new(|_cfg: &ReportConfig| {
                Ok(Arc::new(crate::gateways::memory::InMemoryMetadataReport::new())
                    as Arc<dyn MetadataReport>)
            }),
        );
        RwLock::new(map)
    })
}

/// Register a report backend under `protocol`, replacing any previous
/// registration.
pub fn register_report_factory(protocol: impl Into<String>, factory: ReportFactory) {
    if let Ok(mut map) = factories().write() {
        map.insert(protocol.into(), factory);
    }
}

/// Build the report backend selected by `cfg`.
pub fn new_metadata_report(cfg: &ReportConfig) -> Result<Arc<dyn MetadataReport>, ReportError> {
    let factory = factories()
        .read()
        .ok()
        .and_then(|map| map.get(&cfg.protocol).cloned())
        .ok_or_else(|| {
            ReportError::Store(format!("no metadata report registered for protocol '{}'", cfg.protocol))
        })?;
    factory(cfg)
}
