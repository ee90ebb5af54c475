//! Error types for clusterconf.
//!
//! The resolution core (accessors, node-group views, projection) never fails.
//! Everything here belongs to the document loader, the inheritance resolver
//! and the CLI around them.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for clusterconf operations.
#[derive(Error, Debug)]
pub enum ConfError {
    /// User provided invalid arguments or asked for something that does not exist.
    #[error("{0}")]
    UserError(String),

    /// A config file or directory could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config document is not valid YAML for the cluster schema.
    #[error("failed to parse config YAML '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A value could not be rendered for output.
    #[error("failed to serialize {0}")]
    Serialize(String),

    /// The same cluster name is declared by more than one document.
    #[error("cluster '{name}' is declared more than once (again in '{}')", path.display())]
    DuplicateCluster { name: String, path: PathBuf },

    /// A cluster was requested by name but no document declares it.
    #[error("unknown cluster '{0}'")]
    UnknownCluster(String),

    /// A cluster names a parent that no document declares.
    #[error("cluster '{cluster}' inherits from unknown cluster '{parent}'")]
    UnknownParent { cluster: String, parent: String },

    /// The `_inherit` chain loops back onto itself.
    #[error("inheritance cycle detected: {}", chain.join(" -> "))]
    InheritanceCycle { chain: Vec<String> },
}

impl ConfError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfError::UserError(_) | ConfError::UnknownCluster(_) => exit_codes::USER_ERROR,
            ConfError::Read { .. }
            | ConfError::Parse { .. }
            | ConfError::Serialize(_)
            | ConfError::DuplicateCluster { .. } => exit_codes::DOCUMENT_FAILURE,
            ConfError::UnknownParent { .. } | ConfError::InheritanceCycle { .. } => {
                exit_codes::INHERITANCE_FAILURE
            }
        }
    }
}

/// Result type alias for clusterconf operations.
pub type Result<T> = std::result::Result<T, ConfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ConfError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);

        let err = ConfError::UnknownCluster("ghost".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn document_errors_have_correct_exit_code() {
        let err = ConfError::Read {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.exit_code(), exit_codes::DOCUMENT_FAILURE);

        let err = ConfError::DuplicateCluster {
            name: "local".to_string(),
            path: PathBuf::from("b.yaml"),
        };
        assert_eq!(err.exit_code(), exit_codes::DOCUMENT_FAILURE);
    }

    #[test]
    fn inheritance_errors_have_correct_exit_code() {
        let err = ConfError::UnknownParent {
            cluster: "child".to_string(),
            parent: "ghost".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::INHERITANCE_FAILURE);

        let err = ConfError::InheritanceCycle {
            chain: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert_eq!(err.exit_code(), exit_codes::INHERITANCE_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ConfError::InheritanceCycle {
            chain: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert_eq!(err.to_string(), "inheritance cycle detected: a -> b -> a");

        let err = ConfError::UnknownParent {
            cluster: "child".to_string(),
            parent: "ghost".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cluster 'child' inherits from unknown cluster 'ghost'"
        );
    }
}
