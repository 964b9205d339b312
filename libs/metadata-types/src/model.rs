//! Exported-metadata snapshot and its content-derived revision.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Well-known instance-metadata key under which a peer advertises the
/// revision of its exported snapshot.
pub const EXPORTED_SERVICES_REVISION_KEY: &str = "dubbo.exported-services.revision";

/// Revision reported for a snapshot that exports nothing.
const EMPTY_REVISION: &str = "0";

/// One exported service as seen by peers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    pub protocol: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl ServiceDescriptor {
    /// `group/name:version:protocol` with empty parts omitted; the key
    /// descriptors are stored under inside a snapshot.
    pub fn match_key(&self) -> String {
        let mut key = String::new();
        if !self.group.is_empty() {
            key.push_str(&self.group);
            key.push('/');
        }
        key.push_str(&self.name);
        if !self.version.is_empty() {
            key.push(':');
            key.push_str(&self.version);
        }
        key.push(':');
        key.push_str(&self.protocol);
        key
    }
}

/// Snapshot of everything an application currently exports.
///
/// The descriptor set is the durable content; the revision cache and
/// the reported flag are runtime state local to the process holding
/// the snapshot. The reported flag transitions false to true only
/// after a successful store write and is never reset in place: a
/// change in exports produces a whole new snapshot.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MetadataInfo {
    pub app: String,
    #[serde(default)]
    pub services: BTreeMap<String, ServiceDescriptor>,
    #[serde(skip)]
    revision: OnceLock<String>,
    #[serde(skip)]
    reported: AtomicBool,
}

impl MetadataInfo {
    pub fn new(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            services: BTreeMap::new(),
            revision: OnceLock::new(),
            reported: AtomicBool::new(false),
        }
    }

    /// Add one exported service, keyed by its match key.
    pub fn add_service(&mut self, descriptor: ServiceDescriptor) {
        self.services.insert(descriptor.match_key(), descriptor);
    }

    pub fn has_reported(&self) -> bool {
        self.reported.load(Ordering::Acquire)
    }

    pub fn mark_reported(&self) {
        self.reported.store(true, Ordering::Release);
    }

    /// Content-derived revision of this snapshot, computed once and
    /// cached. Identical descriptor sets always hash to the same
    /// revision; any descriptor change yields a different one.
    pub fn cal_and_get_revision(&self) -> String {
        self.revision.get_or_init(|| self.compute_revision()).clone()
    }

    fn compute_revision(&self) -> String {
        if self.services.is_empty() {
            return EMPTY_REVISION.to_owned();
        }
        let mut hasher = Sha256::new();
        hasher.update(self.app.as_bytes());
        for (key, descriptor) in &self.services {
            hasher.update(key.as_bytes());
            for (param, value) in &descriptor.params {
                hasher.update(param.as_bytes());
                hasher.update(value.as_bytes());
            }
        }
        let digest = hasher.finalize();
        hex::encode(&digest[..8])
    }
}

impl Clone for MetadataInfo {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
            services: self.services.clone(),
            revision: self.revision.clone(),
            reported: AtomicBool::new(self.reported.load(Ordering::Acquire)),
        }
    }
}

impl PartialEq for MetadataInfo {
    fn eq(&self, other: &Self) -> bool {
        self.app == other.app && self.services == other.services
    }
}

impl Eq for MetadataInfo {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> ServiceDescriptor {
        ServiceDescriptor {
            name: name.to_owned(),
            group: "g1".to_owned(),
            version: "1.0.0".to_owned(),
            protocol: "tri".to_owned(),
            path: name.to_owned(),
            params: BTreeMap::from([("serialization".to_owned(), "json".to_owned())]),
        }
    }

    #[test]
    fn match_key_layout() {
        assert_eq!(descriptor("com.x.Foo").match_key(), "g1/com.x.Foo:1.0.0:tri");

        let bare = ServiceDescriptor {
            name: "com.x.Foo".to_owned(),
            protocol: "tri".to_owned(),
            ..ServiceDescriptor::default()
        };
        assert_eq!(bare.match_key(), "com.x.Foo:tri");
    }

    #[test]
    fn revision_is_deterministic_across_snapshots() {
        let mut a = MetadataInfo::new("shop-app");
        a.add_service(descriptor("com.x.Foo"));
        a.add_service(descriptor("com.x.Bar"));

        let mut b = MetadataInfo::new("shop-app");
        // Insertion order must not matter.
        b.add_service(descriptor("com.x.Bar"));
        b.add_service(descriptor("com.x.Foo"));

        assert_eq!(a.cal_and_get_revision(), b.cal_and_get_revision());
    }

    #[test]
    fn revision_changes_with_descriptor_set() {
        let mut a = MetadataInfo::new("shop-app");
        a.add_service(descriptor("com.x.Foo"));

        let mut b = MetadataInfo::new("shop-app");
        b.add_service(descriptor("com.x.Foo"));
        b.add_service(descriptor("com.x.Bar"));

        assert_ne!(a.cal_and_get_revision(), b.cal_and_get_revision());
    }

    #[test]
    fn empty_snapshot_has_sentinel_revision() {
        assert_eq!(MetadataInfo::new("shop-app").cal_and_get_revision(), "0");
    }

    #[test]
    fn reported_flag_starts_false() {
        let info = MetadataInfo::new("shop-app");
        assert!(!info.has_reported());
        info.mark_reported();
        assert!(info.has_reported());
    }

    #[test]
    fn serde_round_trip_resets_runtime_state() {
        let mut info = MetadataInfo::new("shop-app");
        info.add_service(descriptor("com.x.Foo"));
        info.mark_reported();
        let revision = info.cal_and_get_revision();

        let json = serde_json::to_string(&info).expect("serialize");
        let back: MetadataInfo = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back, info);
        assert!(!back.has_reported());
        assert_eq!(back.cal_and_get_revision(), revision);
    }
}
