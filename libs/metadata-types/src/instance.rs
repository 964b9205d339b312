//! Peer service-instance descriptor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A registered instance of a peer application: identity plus an open
/// string map. The map carries, among other things, the well-known
/// exported-revision key used to address the peer's metadata
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub service_name: String,
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ServiceInstance {
    pub fn new(service_name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            service_name: service_name.into(),
            host: host.into(),
            port,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
