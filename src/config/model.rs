//! Config struct definition.

use super::cluster::Cluster;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A set of cluster documents, keyed by cluster name.
///
/// This is what one YAML file (or a directory of them) deserializes into:
///
/// ```yaml
/// clusters:
///   default:
///     namespace: test
///     api-domain: example.com
///   local:
///     _inherit: default
///     name: local
/// ```
///
/// Clusters are stored as written; see [`Config::resolve`] for applying
/// `_inherit` chains. Unknown top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clusters: BTreeMap<String, Cluster>,
}
