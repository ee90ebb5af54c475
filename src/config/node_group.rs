//! Node groups, nodes and published endpoints of a cluster.

use super::cluster::Cluster;
use crate::orchestration::EncryptedKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

/// One homogeneous group of nodes within a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClusterNodeGroup {
    /// Provisioning mode (e.g. "node", "bootnode").
    pub mode: String,

    /// Name of the node process profile.
    pub node_config: String,

    /// Name of the node-group profile.
    pub config: String,

    /// Desired number of nodes when `nodes` is empty.
    pub count: usize,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<ClusterNode>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<NodeEndpoint>,
}

impl ClusterNodeGroup {
    /// Endpoints keyed by name. A later endpoint replaces an earlier one with
    /// the same name.
    pub fn endpoints(&self) -> BTreeMap<&str, &NodeEndpoint> {
        self.endpoints
            .iter()
            .map(|endpoint| (endpoint.name.as_str(), endpoint))
            .collect()
    }
}

/// One node within a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClusterNode {
    pub name: String,
    pub bootnodes: String,
    pub peer_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_key: Option<EncryptedKey>,
}

/// A published node API endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NodeEndpoint {
    pub name: String,
    pub api_url: String,
}

/// A node group together with the cluster that owns it.
///
/// Views are handed out by [`Cluster::node_groups`] and
/// [`Cluster::node_group`]; the owner reference is the cluster the group was
/// borrowed from, so it cannot drift from the group's storage.
#[derive(Debug, Clone, Copy)]
pub struct NodeGroupView<'a> {
    cluster: &'a Cluster,
    name: &'a str,
    group: &'a ClusterNodeGroup,
}

impl<'a> NodeGroupView<'a> {
    pub(crate) fn new(cluster: &'a Cluster, name: &'a str, group: &'a ClusterNodeGroup) -> Self {
        Self {
            cluster,
            name,
            group,
        }
    }

    /// The owning cluster.
    pub fn cluster(&self) -> &'a Cluster {
        self.cluster
    }

    /// Key of this group in the cluster's `node-groups` mapping.
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn group(&self) -> &'a ClusterNodeGroup {
        self.group
    }

    /// Names of the nodes in this group.
    ///
    /// Explicitly listed nodes win; otherwise `count` nodes are named
    /// `<group>-0`, `<group>-1`, ...
    pub fn node_names(&self) -> Vec<String> {
        if !self.group.nodes.is_empty() {
            return self.group.nodes.iter().map(|n| n.name.clone()).collect();
        }
        (0..self.group.count)
            .map(|i| format!("{}-{}", self.name, i))
            .collect()
    }

    /// Public API URL of `node`.
    ///
    /// With static endpoints this is the endpoint published under the node's
    /// name; otherwise it is derived from the cluster's scheme, namespace and
    /// public API domain.
    pub fn api_url(&self, node: &str) -> Option<String> {
        self.resolve_url(node, self.cluster.api_domain())
    }

    /// Like [`Self::api_url`] but using the internal API domain.
    pub fn internal_api_url(&self, node: &str) -> Option<String> {
        self.resolve_url(node, self.cluster.api_domain_internal())
    }

    fn resolve_url(&self, node: &str, domain: Option<&str>) -> Option<String> {
        if self.cluster.is_using_static_endpoints() {
            return self
                .group
                .endpoints()
                .get(node)
                .map(|endpoint| endpoint.api_url.clone());
        }

        let domain = domain?;
        let scheme = self.cluster.api_scheme();
        if self.cluster.is_namespace_disabled() {
            Some(format!("{}://{}.{}", scheme, node, domain))
        } else {
            Some(format!(
                "{}://{}.{}.{}",
                scheme,
                node,
                self.cluster.namespace(),
                domain
            ))
        }
    }
}

impl Deref for NodeGroupView<'_> {
    type Target = ClusterNodeGroup;

    fn deref(&self) -> &Self::Target {
        self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(name: &str, url: &str) -> NodeEndpoint {
        NodeEndpoint {
            name: name.to_string(),
            api_url: url.to_string(),
        }
    }

    #[test]
    fn endpoints_last_write_wins() {
        let group = ClusterNodeGroup {
            endpoints: vec![
                endpoint("A", "url1"),
                endpoint("B", "url2"),
                endpoint("A", "url3"),
            ],
            ..Default::default()
        };

        let endpoints = group.endpoints();
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints["A"].api_url, "url3");
        assert_eq!(endpoints["B"].api_url, "url2");
    }

    #[test]
    fn endpoints_empty_group() {
        let group = ClusterNodeGroup::default();
        assert!(group.endpoints().is_empty());
    }

    #[test]
    fn endpoints_are_repeatable() {
        let group = ClusterNodeGroup {
            endpoints: vec![endpoint("A", "url1"), endpoint("A", "url2")],
            ..Default::default()
        };
        assert_eq!(group.endpoints(), group.endpoints());
    }

    #[test]
    fn parse_node_group_yaml() {
        let yaml = r#"
mode: node
node-config: default
config: light
count: 2
nodes:
  - name: node-a
    bootnodes: /dns4/boot/tcp/1634
    peer-key: abc
    node-key:
      address: f00
      version: 3
endpoints:
  - name: node-a
    api-url: http://node-a.example.com
"#;
        let group: ClusterNodeGroup = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(group.mode, "node");
        assert_eq!(group.node_config, "default");
        assert_eq!(group.config, "light");
        assert_eq!(group.count, 2);
        assert_eq!(group.nodes.len(), 1);
        assert_eq!(group.nodes[0].peer_key, "abc");
        assert!(group.nodes[0].node_key.is_some());
        assert_eq!(group.endpoints[0].api_url, "http://node-a.example.com");
    }
}
