//! Core cubby: the value tree and its resolver
//!
//! This layer defines the data model every namespace stores:
//! - `Value`: the self-describing tree (maps, arrays, leaves)
//! - `Key`: flat or dot-path addressing, normalized to segments
//! - `Scalar`: the fragments a key is made of
//! - `resolver`: total read/write operations over segment slices
//!
//! Use this layer for:
//! - Manipulating trees directly, without namespace bookkeeping
//! - Building alternative facades over the same resolution rules
//!
//! # Example
//!
//! ```rust
//! use cubby_core_tree::{resolver, Key, Value};
//!
//! let mut tree = Value::map();
//! resolver::set(&mut tree, &Key::from("server.port").segments(), Value::from(8080));
//!
//! assert_eq!(
//!     resolver::get(&tree, &Key::from("server.port").segments()),
//!     Some(&Value::from(8080)),
//! );
//! ```

mod error;
mod key;
pub mod resolver;
mod value;

pub use error::Error;
pub use key::{Key, Scalar};
pub use value::Value;
