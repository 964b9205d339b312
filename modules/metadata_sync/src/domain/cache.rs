//! Process-local cache of the application's exported metadata.
//!
//! The cache owns the current [`MetadataInfo`] snapshot; the
//! synchronization service only reads it and flips its reported flag
//! through the snapshot's own accessors. Exporting a service swaps in
//! a whole new snapshot, so a changed descriptor set always starts
//! unreported and with a fresh revision.

use crate::domain::error::DomainError;
use arc_swap::ArcSwap;
use metadata_types::{MetadataInfo, ServiceDescriptor};
use std::sync::{Arc, OnceLock};

/// Read access into the local exported-metadata cache.
pub trait LocalMetadataCache: Send + Sync {
    /// Current snapshot for `service_name`. Faults only in
    /// exceptional conditions; a fault aborts the caller's publish
    /// attempt.
    fn get_metadata_info(&self, service_name: &str) -> Result<Arc<MetadataInfo>, DomainError>;
}

/// In-memory cache singleton holding the current snapshot.
pub struct InMemoryMetadataCache {
    info: ArcSwap<MetadataInfo>,
}

impl InMemoryMetadataCache {
    pub fn new(app: impl Into<String>) -> Self {
        Self {
            info: ArcSwap::from_pointee(MetadataInfo::new(app)),
        }
    }

    /// Process-wide cache instance.
    pub fn global() -> Arc<Self> {
        static INSTANCE: OnceLock<Arc<InMemoryMetadataCache>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| Arc::new(Self::new(String::new())))
            .clone()
    }

    /// Record one exported service. Builds a fresh snapshot from the
    /// current descriptor set plus `descriptor`; the new snapshot is
    /// unreported and its revision is recomputed on demand.
    pub fn export_service(&self, descriptor: ServiceDescriptor) {
        let current = self.info.load();
        let mut next = MetadataInfo::new(current.app.clone());
        next.services = current.services.clone();
        next.add_service(descriptor);
        self.info.store(Arc::new(next));
    }

    /// Current snapshot, regardless of service name.
    pub fn snapshot(&self) -> Arc<MetadataInfo> {
        self.info.load_full()
    }
}

impl LocalMetadataCache for InMemoryMetadataCache {
    fn get_metadata_info(&self, _service_name: &str) -> Result<Arc<MetadataInfo>, DomainError> {
        Ok(self.snapshot())
    }
}
