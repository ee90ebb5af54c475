//! Types owned by the orchestration side.
//!
//! The orchestrator provisions nodes from a [`ClusterOptions`] value. It does
//! not know about configuration documents; options reach it through
//! [`crate::projection`], which matches fields by name and kind. Renaming a
//! field here silently stops it from being filled.

use crate::projection::projection_target;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Runtime options for one cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    pub name: String,
    pub namespace: String,
    pub disable_namespace: bool,
    pub use_static_endpoints: bool,
    pub api_domain: String,
    pub api_domain_internal: String,
    pub api_insecure_tls: bool,
    pub api_scheme: String,

    /// Labels attached to every provisioned resource.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Annotations attached to every provisioned resource.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

projection_target!(ClusterOptions {
    name: String,
    namespace: String,
    disable_namespace: bool,
    use_static_endpoints: bool,
    api_domain: String,
    api_domain_internal: String,
    api_insecure_tls: bool,
    api_scheme: String,
});

impl ClusterOptions {
    /// Labels that identify resources belonging to this cluster.
    pub fn with_default_labels(mut self) -> Self {
        self.labels
            .entry("app.kubernetes.io/managed-by".to_string())
            .or_insert_with(|| "clusterconf".to_string());
        if !self.name.is_empty() {
            self.labels
                .entry("app.kubernetes.io/part-of".to_string())
                .or_insert_with(|| self.name.clone());
        }
        self
    }
}

/// A node key credential, possibly encrypted.
///
/// The layout belongs to the key provider; this crate only carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptedKey(serde_yaml::Value);

impl EncryptedKey {
    pub fn new(value: serde_yaml::Value) -> Self {
        Self(value)
    }

    /// The raw credential document.
    pub fn as_value(&self) -> &serde_yaml::Value {
        &self.0
    }
}
