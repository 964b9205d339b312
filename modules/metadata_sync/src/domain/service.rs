//! Core synchronization service between the local metadata cache and
//! the remote metadata store.

use crate::config::MetadataSyncConfig;
use crate::contract::error::MetadataSyncError;
use crate::domain::cache::{InMemoryMetadataCache, LocalMetadataCache};
use crate::domain::directory::{InMemoryServiceDirectory, ServiceDirectory};
use crate::domain::error::DomainError;
use crate::domain::report::{new_metadata_report, MetadataReport};
use metadata_types::{
    build_service_definition, MetadataIdentifier, MetadataInfo, ServiceInstance, ServiceUrl, Side,
    SubscriberMetadataIdentifier, EXPORTED_SERVICES_REVISION_KEY,
};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Mediates between the local exported-metadata cache and the remote
/// metadata store. One instance per process; all per-call state is
/// call-local, and the only shared mutable state touched here is the
/// snapshot's reported flag, accessed through the snapshot itself.
pub struct RemoteMetadataService {
    cache: Arc<dyn LocalMetadataCache>,
    report: Arc<dyn MetadataReport>,
    directory: Arc<dyn ServiceDirectory>,
}

static INSTANCE: OnceLock<Result<Arc<RemoteMetadataService>, MetadataSyncError>> = OnceLock::new();

impl fmt::Debug for RemoteMetadataService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteMetadataService").finish_non_exhaustive()
    }
}

impl RemoteMetadataService {
    pub fn new(
        cache: Arc<dyn LocalMetadataCache>,
        report: Arc<dyn MetadataReport>,
        directory: Arc<dyn ServiceDirectory>,
    ) -> Self {
        Self {
            cache,
            report,
            directory,
        }
    }

    /// Process-wide instance. The constructor body runs exactly once,
    /// even under concurrent first-time callers; everyone blocks on
    /// that single attempt and then shares its outcome. A report
    /// construction failure is captured once and returned identically
    /// to every caller, first and subsequent.
    pub fn global(config: &MetadataSyncConfig) -> Result<Arc<Self>, MetadataSyncError> {
        INSTANCE
            .get_or_init(|| {
                let report = new_metadata_report(&config.report)
                    .map_err(|e| MetadataSyncError::ReportUnavailable(e.to_string()))?;
                Ok(Arc::new(Self::new(
                    InMemoryMetadataCache::global(),
                    report,
                    InMemoryServiceDirectory::global(),
                )))
            })
            .clone()
    }

    /// Publish the current snapshot under `service_name`, at most
    /// once per revision. Exactly one store write is attempted; on
    /// failure the snapshot stays unreported so a later call can
    /// retry the same revision.
    pub async fn publish_metadata(&self, service_name: &str) {
        let info = match self.cache.get_metadata_info(service_name) {
            Ok(info) => info,
            Err(e) => {
                tracing::error!(service_name, error = %e, "Reading local metadata snapshot failed");
                return;
            }
        };
        if info.has_reported() {
            return;
        }
        let revision = info.cal_and_get_revision();
        let id = SubscriberMetadataIdentifier::new(service_name, revision.clone());
        if let Err(e) = self.report.publish_app_metadata(&id, &info).await {
            tracing::error!(service_name, %revision, error = %e, "Publishing metadata snapshot failed");
            return;
        }
        info.mark_reported();
        tracing::debug!(service_name, %revision, "Published metadata snapshot");
    }

    /// Fetch the metadata document a peer instance advertises. An
    /// absent revision key addresses the empty-revision document; the
    /// store's answer, error included, is passed through.
    pub async fn get_metadata(
        &self,
        instance: &ServiceInstance,
    ) -> Result<MetadataInfo, DomainError> {
        let revision = instance
            .metadata
            .get(EXPORTED_SERVICES_REVISION_KEY)
            .cloned()
            .unwrap_or_default();
        let id = SubscriberMetadataIdentifier::new(instance.service_name.clone(), revision);
        self.report
            .get_app_metadata(&id)
            .await
            .map_err(DomainError::read_from)
    }

    /// Publish per-interface metadata for one connection, branched on
    /// the connection's role. Store outcomes are logged, never
    /// surfaced.
    pub async fn publish_service_definition(&self, url: &ServiceUrl) {
        match url.role() {
            Side::Provider => self.publish_provider_definition(url).await,
            Side::Consumer => self.publish_consumer_params(url).await,
        }
    }

    async fn publish_provider_definition(&self, url: &ServiceUrl) {
        let interface = url.interface();
        if interface.is_empty() || url.is_generic() {
            // Intentional no-op; logged loudly so skipped providers
            // stay visible.
            tracing::error!(
                url = %url.service_key(),
                generic = url.is_generic(),
                "Skipping provider definition publication: interface missing or service is generic"
            );
            return;
        }
        let service_key = url.service_key();
        let Some(model) = self
            .directory
            .get_service_by_service_key(&url.protocol, &service_key)
        else {
            tracing::error!(
                protocol = %url.protocol,
                %service_key,
                "Skipping provider definition publication: no registered implementation"
            );
            return;
        };
        let definition = build_service_definition(&model, url);
        let id = MetadataIdentifier::new(
            interface,
            url.version(),
            url.group(),
            Side::Provider,
        );
        if let Err(e) = self.report.store_provider_metadata(&id, &definition).await {
            tracing::warn!(key = %id.unique_key(), error = %e, "Storing provider definition failed");
        }
    }

    async fn publish_consumer_params(&self, url: &ServiceUrl) {
        // Every connection parameter, flattened; keys are unique by
        // construction and order is irrelevant to the store.
        let params = url.params.clone();
        let id = MetadataIdentifier::new(
            url.interface(),
            url.version(),
            url.group(),
            Side::Consumer,
        );
        if let Err(e) = self.report.store_consumer_metadata(&id, &params).await {
            tracing::warn!(key = %id.unique_key(), error = %e, "Storing consumer parameters failed");
        }
    }
}
