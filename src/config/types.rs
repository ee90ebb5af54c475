//! Shared configuration types and default values.

use serde::{Deserialize, Serialize};

/// Name reported for a cluster that does not set one.
pub const DEFAULT_CLUSTER_NAME: &str = "noname";

/// Namespace reported for a cluster that does not set one.
pub const DEFAULT_NAMESPACE: &str = "nonamespace";

/// URL scheme used for node APIs when `api-scheme` is absent.
pub const DEFAULT_API_SCHEME: &str = "http";

/// Funding policy for the nodes of a cluster.
///
/// Amounts are carried through to the orchestrator untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Funding {
    /// Native currency to send to each node.
    pub eth: f64,

    /// Storage token to send to each node.
    pub token: f64,

    /// Gas token to send to each node.
    pub gas_token: f64,
}
