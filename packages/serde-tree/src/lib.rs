//! Serde integration for cubby
//!
//! This layer keeps the core tree serde-free while containers gain typed
//! access:
//! - `TypedContainer`: store and load serde types at any key
//! - `to_value` / `from_value`: the serde bridge behind it
//!
//! # Example
//!
//! ```rust
//! use cubby_serde_tree::{Container, TypedContainer};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Limits {
//!     requests: u32,
//!     burst: u32,
//! }
//!
//! let config = Container::new("docs.limits");
//! config.set_as("rate.limits", &Limits { requests: 100, burst: 20 })?;
//!
//! let limits: Option<Limits> = config.get_as("rate.limits")?;
//! assert_eq!(limits.map(|l| l.requests), Some(100));
//! # Ok::<(), cubby_serde_tree::Error>(())
//! ```

mod convert;
mod error;
mod typed;

pub use convert::{from_value, to_value};
pub use error::Error;
pub use typed::TypedContainer;

// Re-export the container surface for convenience
pub use cubby_container::{Container, NamespaceId, Registry, Value};
