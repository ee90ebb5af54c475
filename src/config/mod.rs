//! Cluster configuration documents.
//!
//! This module defines the [`Cluster`] document and its node groups, the
//! [`Config`] set that YAML files load into, and `_inherit` resolution.
//! Documents are parsed forward-compatibly (unknown fields are ignored) and
//! every cluster attribute is optional, with defaults supplied by accessors.

mod cluster;
mod inherit;
mod model;
mod node_group;
mod operations;
pub mod types;


// Re-export public API
pub use cluster::Cluster;
pub use model::Config;
pub use node_group::{ClusterNode, ClusterNodeGroup, NodeEndpoint, NodeGroupView};
pub use types::Funding;
