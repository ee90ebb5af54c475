//! `_inherit` resolution.
//!
//! A cluster may name a parent with `_inherit`. Resolution walks the chain up
//! to a cluster without a parent, then folds back down: each child keeps the
//! attributes it sets and takes the rest from the already-resolved parent.

use super::cluster::Cluster;
use super::model::Config;
use crate::error::{ConfError, Result};
use tracing::debug;

impl Config {
    /// Resolve one cluster against its `_inherit` chain.
    ///
    /// # Returns
    ///
    /// * `Ok(Cluster)` - The merged cluster, still carrying its own `_inherit` link
    /// * `Err(ConfError::UnknownCluster)` - `name` is not declared
    /// * `Err(ConfError::UnknownParent)` - Some cluster in the chain names a missing parent
    /// * `Err(ConfError::InheritanceCycle)` - The chain revisits a cluster
    pub fn resolve_cluster(&self, name: &str) -> Result<Cluster> {
        let chain = self.inheritance_chain(name)?;

        // chain[0] is the requested cluster, the last entry is the root.
        let mut links = chain.iter().rev();
        let mut resolved = match links.next() {
            Some(root) => self.clusters[*root].clone(),
            None => return Err(ConfError::UnknownCluster(name.to_string())),
        };
        for child in links {
            let mut next = self.clusters[*child].clone();
            next.inherit_from(&resolved);
            resolved = next;
        }

        debug!(cluster = name, chain = ?chain, "resolved cluster");
        Ok(resolved)
    }

    /// Resolve every cluster, returning a config without pending inheritance.
    pub fn resolve(&self) -> Result<Config> {
        let mut resolved = Config::default();
        for name in self.clusters.keys() {
            resolved
                .clusters
                .insert(name.clone(), self.resolve_cluster(name)?);
        }
        Ok(resolved)
    }

    /// Names from `name` up to its root ancestor.
    fn inheritance_chain(&self, name: &str) -> Result<Vec<&str>> {
        let mut current = self
            .clusters
            .get_key_value(name)
            .map(|(key, cluster)| (key.as_str(), cluster))
            .ok_or_else(|| ConfError::UnknownCluster(name.to_string()))?;
        let mut chain = vec![current.0];

        while let Some(parent) = current.1.parent_name() {
            if chain.contains(&parent) {
                let mut cycle: Vec<String> = chain.iter().map(|s| s.to_string()).collect();
                cycle.push(parent.to_string());
                return Err(ConfError::InheritanceCycle { chain: cycle });
            }

            current = self
                .clusters
                .get_key_value(parent)
                .map(|(key, cluster)| (key.as_str(), cluster))
                .ok_or_else(|| ConfError::UnknownParent {
                    cluster: current.0.to_string(),
                    parent: parent.to_string(),
                })?;
            chain.push(current.0);
        }

        Ok(chain)
    }
}
