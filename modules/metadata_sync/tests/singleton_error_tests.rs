#![allow(clippy::unwrap_used, clippy::expect_used)]

//! A failed first construction is captured once and returned
//! identically to every caller; it is never retried. Runs as its own
//! test binary because the singleton is per process.

use metadata_sync::config::{MetadataSyncConfig, ReportConfig};
use metadata_sync::contract::error::MetadataSyncError;
use metadata_sync::domain::service::RemoteMetadataService;

fn broken_config() -> MetadataSyncConfig {
    MetadataSyncConfig {
        enabled: true,
        report: ReportConfig {
            protocol: "zookeeper".to_owned(),
            address: "10.0.0.1:2181".to_owned(),
        },
    }
}

#[test]
fn construction_failure_is_shared_and_never_retried() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| RemoteMetadataService::global(&broken_config())))
        .collect();

    let errors: Vec<MetadataSyncError> = handles
        .into_iter()
        .map(|h| h.join().unwrap().expect_err("construction must fail"))
        .collect();

    for error in &errors {
        assert!(matches!(error, MetadataSyncError::ReportUnavailable(_)));
        assert_eq!(error, &errors[0]);
    }

    // Even a later call with a valid configuration observes the
    // captured failure; the constructor body never reruns.
    let err = RemoteMetadataService::global(&MetadataSyncConfig::default())
        .expect_err("first outcome is sticky");
    assert_eq!(err, errors[0]);
}
