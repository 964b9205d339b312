use crate::contract::error::MetadataSyncError;
use metadata_types::{MetadataInfo, ServiceInstance, ServiceUrl};

/// Client trait for the metadata synchronization module
#[async_trait::async_trait]
pub trait MetadataSyncApi: Send + Sync {
    /// Publish the application's current exported-metadata snapshot
    /// under `service_name`, at most once per revision. Failures are
    /// logged and the next call retries the same revision.
    async fn publish_metadata(&self, service_name: &str);

    /// Fetch a peer's metadata document, addressed by the instance's
    /// service name and the revision it advertises.
    async fn get_metadata(
        &self,
        instance: &ServiceInstance,
    ) -> Result<MetadataInfo, MetadataSyncError>;

    /// Publish the per-interface metadata for one connection: a
    /// service definition on the provider side, the flattened
    /// parameter map on the consumer side. Store failures are logged
    /// but not surfaced; the call itself always succeeds.
    async fn publish_service_definition(
        &self,
        url: &ServiceUrl,
    ) -> Result<(), MetadataSyncError>;
}
