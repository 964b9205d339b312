#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The process-wide accessor must construct exactly one instance,
//! even under concurrent first-time callers. Runs as its own test
//! binary because the singleton is per process.

use metadata_sync::config::MetadataSyncConfig;
use metadata_sync::domain::service::RemoteMetadataService;
use std::sync::Arc;

#[test]
fn concurrent_first_callers_share_one_instance() {
    let handles: Vec<_> = (0..16)
        .map(|_| {
            std::thread::spawn(|| {
                RemoteMetadataService::global(&MetadataSyncConfig::default())
            })
        })
        .collect();

    let instances: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().expect("construction must succeed"))
        .collect();

    for instance in &instances[1..] {
        assert!(Arc::ptr_eq(&instances[0], instance));
    }

    // Later callers keep getting the same instance.
    let again = RemoteMetadataService::global(&MetadataSyncConfig::default()).unwrap();
    assert!(Arc::ptr_eq(&instances[0], &again));
}
