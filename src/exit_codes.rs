//! Exit code constants for the clusterconf CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown cluster or node group)
//! - 2: Document failure (unreadable or malformed YAML, duplicate clusters)
//! - 3: Inheritance failure (missing parent, cyclic `_inherit` chain)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a name that does not exist.
pub const USER_ERROR: i32 = 1;

/// Document failure: a config file could not be read, parsed or serialized.
pub const DOCUMENT_FAILURE: i32 = 2;

/// Inheritance failure: the `_inherit` chain could not be resolved.
pub const INHERITANCE_FAILURE: i32 = 3;
