//! In-memory metadata store backend.
//!
//! Default backend behind the `"memory"` protocol: documents are kept
//! as JSON in concurrent maps keyed by the identifiers' unique keys.
//! Serves single-process deployments and the integration tests.

use crate::domain::report::{MetadataReport, ReportError};
use dashmap::DashMap;
use metadata_types::{
    MetadataIdentifier, MetadataInfo, ServiceDefinition, SubscriberMetadataIdentifier,
};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct InMemoryMetadataReport {
    app_metadata: DashMap<String, String>,
    service_metadata: DashMap<String, String>,
}

impl InMemoryMetadataReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored per-interface documents, provider and
    /// consumer side combined.
    pub fn service_document_count(&self) -> usize {
        self.service_metadata.len()
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, ReportError> {
    serde_json::to_string(value).map_err(|e| ReportError::Serialization(e.to_string()))
}

#[async_trait::async_trait]
impl MetadataReport for InMemoryMetadataReport {
    async fn publish_app_metadata(
        &self,
        id: &SubscriberMetadataIdentifier,
        info: &MetadataInfo,
    ) -> Result<(), ReportError> {
        let document = encode(info)?;
        self.app_metadata.insert(id.unique_key(), document);
        Ok(())
    }

    async fn get_app_metadata(
        &self,
        id: &SubscriberMetadataIdentifier,
    ) -> Result<MetadataInfo, ReportError> {
        let key = id.unique_key();
        let document = self
            .app_metadata
            .get(&key)
            .ok_or(ReportError::NotFound(key))?;
        serde_json::from_str(document.value())
            .map_err(|e| ReportError::Serialization(e.to_string()))
    }

    async fn store_provider_metadata(
        &self,
        id: &MetadataIdentifier,
        definition: &ServiceDefinition,
    ) -> Result<(), ReportError> {
        let document = encode(definition)?;
        self.service_metadata.insert(id.unique_key(), document);
        Ok(())
    }

    async fn store_consumer_metadata(
        &self,
        id: &MetadataIdentifier,
        params: &BTreeMap<String, String>,
    ) -> Result<(), ReportError> {
        let document = encode(params)?;
        self.service_metadata.insert(id.unique_key(), document);
        Ok(())
    }
}
