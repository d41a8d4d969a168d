//! Error types for the core tree.

use std::convert::Infallible;

/// Errors reported by the core tree types.
///
/// Tree operations themselves are total: absent paths, absent intermediate
/// containers, and kind mismatches along a walk all degrade to `None`,
/// `false`, or a no-op rather than failing. The one thing the core rejects
/// is a key built from a value whose kind cannot address anything.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The key was not a string, a number, or a sequence of scalars.
    #[error("invalid key kind: a {found} cannot be used as a key")]
    InvalidKeyKind {
        /// Kind name of the rejected value.
        found: &'static str,
    },
}

// Lets infallible key conversions flow through the same generic bounds as
// fallible ones.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
