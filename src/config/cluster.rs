//! The cluster document.
//!
//! Every attribute is an `Option`: a document (or a parent it inherits
//! from) may leave any of them out, and "left out" must stay distinguishable
//! from an explicit empty string or `false`. Accessors supply the defaults.

use super::node_group::{ClusterNodeGroup, NodeGroupView};
use super::types::{DEFAULT_API_SCHEME, DEFAULT_CLUSTER_NAME, DEFAULT_NAMESPACE, Funding};
use crate::orchestration::ClusterOptions;
use crate::projection::{ProjectionPlan, projection_source};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EXPORT_PLAN: LazyLock<ProjectionPlan<Cluster, ClusterOptions>> =
    LazyLock::new(ProjectionPlan::new);

/// Configuration of one logical cluster of nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Cluster {
    /// Name of the cluster this one extends.
    #[serde(rename = "_inherit", skip_serializing_if = "Option::is_none")]
    pub inherit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Address nodes without the namespace label in their URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_namespace: Option<bool>,

    /// Use the endpoints published by each node group instead of derived URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_static_endpoints: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_domain_internal: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_insecure_tls: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_scheme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<Funding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_groups: Option<BTreeMap<String, ClusterNodeGroup>>,
}

projection_source!(Cluster {
    name: String,
    namespace: String,
    disable_namespace: bool,
    use_static_endpoints: bool,
    api_domain: String,
    api_domain_internal: String,
    api_insecure_tls: bool,
    api_scheme: String,
    funding: Funding,
    node_groups: BTreeMap<String, ClusterNodeGroup>,
});

impl Cluster {
    /// Name of the parent cluster, if this document extends one.
    pub fn parent_name(&self) -> Option<&str> {
        self.inherit.as_deref()
    }

    /// Cluster name, or `"noname"`.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_CLUSTER_NAME)
    }

    /// Cluster namespace, or `"nonamespace"`.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn is_namespace_disabled(&self) -> bool {
        self.disable_namespace.unwrap_or(false)
    }

    pub fn is_using_static_endpoints(&self) -> bool {
        self.use_static_endpoints.unwrap_or(false)
    }

    pub fn api_domain(&self) -> Option<&str> {
        self.api_domain.as_deref()
    }

    pub fn api_domain_internal(&self) -> Option<&str> {
        self.api_domain_internal.as_deref()
    }

    pub fn is_insecure_tls(&self) -> bool {
        self.api_insecure_tls.unwrap_or(false)
    }

    /// URL scheme for node APIs, or `"http"`.
    pub fn api_scheme(&self) -> &str {
        self.api_scheme.as_deref().unwrap_or(DEFAULT_API_SCHEME)
    }

    pub fn funding(&self) -> Option<&Funding> {
        self.funding.as_ref()
    }

    /// All node groups, each wired back to this cluster.
    ///
    /// A cluster without node groups yields an empty map.
    pub fn node_groups(&self) -> BTreeMap<&str, NodeGroupView<'_>> {
        self.node_groups
            .iter()
            .flatten()
            .map(|(name, group)| (name.as_str(), NodeGroupView::new(self, name, group)))
            .collect()
    }

    /// A single node group, wired back to this cluster.
    pub fn node_group(&self, name: &str) -> Option<NodeGroupView<'_>> {
        let (key, group) = self.node_groups.as_ref()?.get_key_value(name)?;
        Some(NodeGroupView::new(self, key, group))
    }

    /// Fill every absent attribute from `parent`.
    ///
    /// Attributes already present are kept; `node-groups` is taken as a
    /// whole. The `_inherit` link itself is never copied.
    pub fn inherit_from(&mut self, parent: &Cluster) {
        fn fill<T: Clone>(slot: &mut Option<T>, parent: &Option<T>) {
            if slot.is_none() {
                slot.clone_from(parent);
            }
        }

        fill(&mut self.name, &parent.name);
        fill(&mut self.namespace, &parent.namespace);
        fill(&mut self.disable_namespace, &parent.disable_namespace);
        fill(&mut self.use_static_endpoints, &parent.use_static_endpoints);
        fill(&mut self.api_domain, &parent.api_domain);
        fill(&mut self.api_domain_internal, &parent.api_domain_internal);
        fill(&mut self.api_insecure_tls, &parent.api_insecure_tls);
        fill(&mut self.api_scheme, &parent.api_scheme);
        fill(&mut self.funding, &parent.funding);
        fill(&mut self.node_groups, &parent.node_groups);
    }

    /// Project this cluster into orchestrator options.
    ///
    /// Only attributes present on the cluster are copied; everything else
    /// keeps the `ClusterOptions` default.
    pub fn export(&self) -> ClusterOptions {
        EXPORT_PLAN.apply(self)
    }
}
