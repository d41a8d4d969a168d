//! cubby: namespace-isolated key/value storage with dot-path addressing.
//!
//! Every namespace keeps one private tree, addressed by flat scalar keys,
//! dot-delimited strings, or structured paths. Handles with the same
//! identity always share the same tree, however they were constructed.
//!
//! # Example
//!
//! ```rust
//! use cubby::{key, Container};
//!
//! let settings = Container::new("docs.cubby");
//!
//! settings.set("server.host", "localhost");
//! settings.set(key!("routes", "api.v1"), "/api/v1");
//!
//! assert_eq!(settings.get("server.host")?, Some("localhost".into()));
//! assert!(settings.has(key!("routes", "api.v1")));
//! assert!(!settings.has("routes.api.v1"));
//! # Ok::<(), cubby::Error>(())
//! ```

pub use cubby_container::{Container, NamespaceId, Registry};
pub use cubby_core_tree::{key, resolver, Error, Key, Scalar, Value};
pub use cubby_serde_tree::{from_value, to_value, Error as SerdeError, TypedContainer};
