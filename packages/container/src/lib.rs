//! Namespace containers: isolated key/value spaces with shared access
//!
//! This layer turns the core tree into addressable namespaces:
//! - `Container`: the façade binding one identity to one private tree
//! - `NamespaceId`: explicit, stable namespace identities
//! - `Registry`: hands out the single shared façade per identity
//!
//! Use this layer for:
//! - Configuration and path registries scoped per subsystem
//! - Process-wide shared state without hidden statics in your own code
//!
//! # Example
//!
//! ```rust
//! use cubby_container::{Container, Registry};
//!
//! let settings = Container::new("docs.intro");
//! settings.set("server.host", "localhost");
//!
//! // every handle with the same identity sees the same tree
//! let same = Registry::global().instance("docs.intro");
//! assert_eq!(same.get("server.host").unwrap(), Some("localhost".into()));
//! ```

mod container;
mod namespace_id;
mod registry;

pub use container::Container;
pub use namespace_id::NamespaceId;
pub use registry::Registry;

// Re-export core types for convenience
pub use cubby_core_tree::{Error, Key, Scalar, Value};
