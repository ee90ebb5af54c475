//! Config loading and serialization.

use super::model::Config;
use crate::error::{ConfError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name patterns picked up when loading a directory.
const DOCUMENT_PATTERNS: &[&str] = &["*.yaml", "*.yml"];

impl Config {
    /// Load config from a YAML file or a directory of YAML files.
    ///
    /// Directory entries matching `*.yaml` or `*.yml` are read in file name
    /// order and merged; subdirectories are not descended into. A cluster
    /// name may only be declared once across all files.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - All documents parsed and merged
    /// * `Err(ConfError::Read)` - The path or one of its files is unreadable
    /// * `Err(ConfError::Parse)` - A document is not valid YAML
    /// * `Err(ConfError::DuplicateCluster)` - Two documents declare the same cluster
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::load_dir(path)
        } else {
            Self::load_file(path)
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(path).map_err(|source| ConfError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    fn load_dir(dir: &Path) -> Result<Self> {
        let read_err = |source| ConfError::Read {
            path: dir.to_path_buf(),
            source,
        };

        let matcher = document_matcher();
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();
            if path.is_file() && matcher.is_match(entry.file_name()) {
                files.push(path);
            }
        }
        files.sort();

        let mut config = Config::default();
        for file in &files {
            config.merge(Self::load_file(file)?, file)?;
        }

        debug!(
            dir = %dir.display(),
            files = files.len(),
            clusters = config.clusters.len(),
            "loaded config directory"
        );
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, Path::new("<string>"))
    }

    fn parse(yaml: &str, origin: &Path) -> Result<Self> {
        // An empty document is an empty config rather than a parse error.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(yaml).map_err(|source| ConfError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ConfError::Serialize(format!("config: {}", e)))
    }

    /// Add the clusters of `other` (read from `origin`) to this config.
    pub fn merge(&mut self, other: Config, origin: &Path) -> Result<()> {
        for (name, cluster) in other.clusters {
            if self.clusters.contains_key(&name) {
                return Err(ConfError::DuplicateCluster {
                    name,
                    path: origin.to_path_buf(),
                });
            }
            self.clusters.insert(name, cluster);
        }
        Ok(())
    }

    /// Cluster names in sorted order.
    pub fn cluster_names(&self) -> impl Iterator<Item = &str> {
        self.clusters.keys().map(String::as_str)
    }
}

fn document_matcher() -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in DOCUMENT_PATTERNS {
        // The patterns are constants; a failure here is a programming error.
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}
