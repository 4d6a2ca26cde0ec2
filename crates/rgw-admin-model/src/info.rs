//! Gateway info.

use serde::{Deserialize, Serialize};

/// Response of `GET /info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    /// Cluster details.
    #[serde(rename = "info", skip_serializing_if = "Option::is_none")]
    pub info_spec: Option<InfoSpec>,
}

/// Cluster details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoSpec {
    /// Storage backends behind the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_backends: Option<Vec<StorageBackend>>,
}

/// A storage backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageBackend {
    /// Backend name, e.g. `rados`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cluster fsid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
}
