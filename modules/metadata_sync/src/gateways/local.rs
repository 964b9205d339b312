use crate::contract::client::MetadataSyncApi;
use crate::contract::error::MetadataSyncError;
use crate::domain::service::RemoteMetadataService;
use metadata_types::{MetadataInfo, ServiceInstance, ServiceUrl};
use std::sync::Arc;

/// Local client implementation for metadata synchronization
pub struct MetadataSyncLocalClient {
    service: Arc<RemoteMetadataService>,
}

impl MetadataSyncLocalClient {
    pub fn new(service: Arc<RemoteMetadataService>) -> Self {
        Self { service }
    }
}

#[async_trait::async_trait]
impl MetadataSyncApi for MetadataSyncLocalClient {
    async fn publish_metadata(&self, service_name: &str) {
        self.service.publish_metadata(service_name).await;
    }

    async fn get_metadata(
        &self,
        instance: &ServiceInstance,
    ) -> Result<MetadataInfo, MetadataSyncError> {
        self.service.get_metadata(instance).await.map_err(|e| e.into())
    }

    async fn publish_service_definition(
        &self,
        url: &ServiceUrl,
    ) -> Result<(), MetadataSyncError> {
        // Store outcomes are logged by the domain layer and not
        // surfaced in the current contract.
        self.service.publish_service_definition(url).await;
        Ok(())
    }
}
