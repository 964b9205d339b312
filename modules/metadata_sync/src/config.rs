use serde::{Deserialize, Serialize};

/// Configuration for the metadata synchronization module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataSyncConfig {
    /// Enable/disable metadata synchronization
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Remote metadata store backend
    #[serde(default)]
    pub report: ReportConfig,
}

/// Selects and addresses the remote metadata store backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Backend protocol, resolved against the registered report
    /// factories
    #[serde(default = "default_protocol")]
    pub protocol: String,

    /// Backend address, interpreted by the selected factory
    #[serde(default)]
    pub address: String,
}

fn default_enabled() -> bool {
    true
}

fn default_protocol() -> String {
    "memory".to_owned()
}

impl Default for MetadataSyncConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            protocol: default_protocol(),
            address: String::new(),
        }
    }
}
