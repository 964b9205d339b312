//! Connection descriptor for an exposed or referenced service.

use crate::identifier::{Side, DEFAULT_GROUP};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const INTERFACE_KEY: &str = "interface";
pub const VERSION_KEY: &str = "version";
pub const GROUP_KEY: &str = "group";
pub const SIDE_KEY: &str = "side";
pub const GENERIC_KEY: &str = "generic";

/// Describes one end of a service connection: the protocol and
/// address it is exposed on plus an open parameter map carrying
/// interface, version, group, side and any transport options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUrl {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    /// Path component, conventionally the interface name.
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl ServiceUrl {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port,
            path: String::new(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn param_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.param(key).unwrap_or(default)
    }

    pub fn param_bool(&self, key: &str) -> bool {
        self.param(key)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    pub fn interface(&self) -> &str {
        self.param_or(INTERFACE_KEY, "")
    }

    pub fn version(&self) -> &str {
        self.param_or(VERSION_KEY, "")
    }

    pub fn group(&self) -> &str {
        self.param_or(GROUP_KEY, DEFAULT_GROUP)
    }

    pub fn role(&self) -> Side {
        Side::from_role(self.param_or(SIDE_KEY, ""))
    }

    pub fn is_generic(&self) -> bool {
        self.param_bool(GENERIC_KEY)
    }

    /// `group/interface:version`, with empty group and version
    /// omitted. This is the key services register under in the
    /// service directory.
    pub fn service_key(&self) -> String {
        let interface = self.interface();
        let mut key = String::new();
        let group = self.param_or(GROUP_KEY, "");
        if !group.is_empty() {
            key.push_str(group);
            key.push('/');
        }
        key.push_str(interface);
        let version = self.version();
        if !version.is_empty() {
            key.push(':');
            key.push_str(version);
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_url() -> ServiceUrl {
        ServiceUrl::new("tri", "10.0.0.7", 20880)
            .with_path("com.x.Foo")
            .with_param(INTERFACE_KEY, "com.x.Foo")
            .with_param(VERSION_KEY, "1.0.0")
            .with_param(GROUP_KEY, "g1")
            .with_param(SIDE_KEY, "provider")
    }

    #[test]
    fn service_key_includes_group_and_version() {
        assert_eq!(provider_url().service_key(), "g1/com.x.Foo:1.0.0");
    }

    #[test]
    fn service_key_with_bare_interface() {
        let url = ServiceUrl::new("tri", "10.0.0.7", 20880).with_param(INTERFACE_KEY, "com.x.Foo");
        assert_eq!(url.service_key(), "com.x.Foo");
    }

    #[test]
    fn group_defaults_when_absent() {
        let url = ServiceUrl::new("tri", "10.0.0.7", 20880);
        assert_eq!(url.group(), DEFAULT_GROUP);
    }

    #[test]
    fn role_and_generic_flags() {
        assert_eq!(provider_url().role(), Side::Provider);
        assert!(!provider_url().is_generic());

        let generic = provider_url().with_param(GENERIC_KEY, "true");
        assert!(generic.is_generic());

        let consumer = provider_url().with_param(SIDE_KEY, "consumer");
        assert_eq!(consumer.role(), Side::Consumer);
    }
}
