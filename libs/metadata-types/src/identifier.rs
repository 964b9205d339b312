//! Keys addressing metadata documents in the remote store.
//!
//! Identifiers are ephemeral: they are built per operation from the
//! calling descriptor and never persisted by the synchronization
//! service itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default group applied when a descriptor carries none. Kept
/// wire-compatible with the upstream protocol.
pub const DEFAULT_GROUP: &str = "dubbo";

const KEY_SEPARATOR: &str = ":";

/// Which end of a connection a metadata document describes.
///
/// The role attribute on a connection descriptor is an open string;
/// it is normalized to this closed enum exactly once, at the boundary
/// of the publication path, and matched exhaustively afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Provider,
    Consumer,
}

impl Side {
    /// Any value other than the literal provider side is a consumer.
    pub fn from_role(role: &str) -> Self {
        if role == Self::Provider.as_str() {
            Self::Provider
        } else {
            Self::Consumer
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Consumer => "consumer",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a per-interface metadata document: one service definition
/// or one consumer parameter map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataIdentifier {
    pub service_interface: String,
    pub version: String,
    pub group: String,
    pub side: Side,
}

impl MetadataIdentifier {
    pub fn new(
        service_interface: impl Into<String>,
        version: impl Into<String>,
        group: impl Into<String>,
        side: Side,
    ) -> Self {
        Self {
            service_interface: service_interface.into(),
            version: version.into(),
            group: group.into(),
            side,
        }
    }

    /// Stable storage key; empty fields are omitted so that the same
    /// logical document always maps to the same key.
    pub fn unique_key(&self) -> String {
        join_key(&[
            &self.service_interface,
            &self.version,
            &self.group,
            self.side.as_str(),
        ])
    }
}

/// Key of an application-level metadata document, addressed by the
/// publishing application and the content-derived revision of its
/// exported snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberMetadataIdentifier {
    pub application: String,
    pub revision: String,
}

impl SubscriberMetadataIdentifier {
    pub fn new(application: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            revision: revision.into(),
        }
    }

    pub fn unique_key(&self) -> String {
        join_key(&[&self.application, &self.revision])
    }
}

fn join_key(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}
