//! Directory of registered service implementations.
//!
//! Used only by the provider-definition path: given the protocol and
//! service key of an exposed connection, it resolves the registered
//! implementation the definition is derived from.

use dashmap::DashMap;
use metadata_types::ServiceModel;
use std::sync::{Arc, OnceLock};

/// Resolves a registered service implementation.
pub trait ServiceDirectory: Send + Sync {
    fn get_service_by_service_key(
        &self,
        protocol: &str,
        service_key: &str,
    ) -> Option<Arc<ServiceModel>>;
}

/// In-memory implementation directory, keyed by protocol and service
/// key.
#[derive(Default)]
pub struct InMemoryServiceDirectory {
    services: DashMap<String, Arc<ServiceModel>>,
}

impl InMemoryServiceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide directory instance.
    pub fn global() -> Arc<Self> {
        static INSTANCE: OnceLock<Arc<InMemoryServiceDirectory>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(Self::new())).clone()
    }

    pub fn register(&self, protocol: &str, service_key: &str, model: ServiceModel) {
        self.services
            .insert(Self::key(protocol, service_key), Arc::new(model));
    }

    fn key(protocol: &str, service_key: &str) -> String {
        format!("{protocol}:{service_key}")
    }
}

impl ServiceDirectory for InMemoryServiceDirectory {
    fn get_service_by_service_key(
        &self,
        protocol: &str,
        service_key: &str,
    ) -> Option<Arc<ServiceModel>> {
        self.services
            .get(&Self::key(protocol, service_key))
            .map(|entry| entry.value().clone())
    }
}
