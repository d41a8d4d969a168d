//! Keys: scalar or structured addressing into a namespace tree.
//!
//! A key is either a single scalar (string, integer, or float) or an ordered
//! sequence of scalar segments. A string scalar containing `.` denotes a
//! nested path; a structured key is used verbatim, never re-split, which is
//! how callers address a literal key that happens to contain the delimiter.

use crate::{Error, Value};

/// One key segment before canonicalization.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// A string. As a scalar key, `.` splits it into nested segments.
    String(String),
    /// An integer, addressed by its decimal form.
    Integer(i64),
    /// A float, addressed by its `Display` form (`1.5` becomes `"1.5"`).
    Float(f64),
}

impl Scalar {
    /// Canonical map-key form of this scalar.
    ///
    /// Integers use their decimal form, so the integer key `7` and the
    /// string key `"7"` address the same slot. Floats use the `Display`
    /// form, which drops a trailing `.0` (the float key `1.0` also lands on
    /// the `"1"` slot).
    pub fn canonical(&self) -> String {
        match self {
            Scalar::String(s) => s.clone(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(x) => x.to_string(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Integer(n as i64)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Integer(n as i64)
    }
}

impl From<usize> for Scalar {
    fn from(n: usize) -> Self {
        Scalar::Integer(n as i64)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<f32> for Scalar {
    fn from(x: f32) -> Self {
        Scalar::Float(x as f64)
    }
}

/// A key addressing one location in a namespace tree.
///
/// The two shapes cover every valid key:
///
/// - [`Key::Scalar`] - one scalar. String scalars are split on `.` when the
///   key is normalized, so `"server.port"` reaches two levels down. Numeric
///   scalars always address a single top-level slot.
/// - [`Key::Path`] - an explicit segment sequence, taken verbatim. Use this
///   (or the [`key!`](crate::key!) macro) when a segment must contain a
///   literal `.`.
///
/// Every common Rust key spelling converts via `From`, so call sites pass
/// `"a.b"`, `7`, or `["a", "b"]` directly.
///
/// # Examples
///
/// ```
/// use cubby_core_tree::Key;
///
/// assert_eq!(Key::from("server.port").segments(), vec!["server", "port"]);
/// assert_eq!(Key::from(7).segments(), vec!["7"]);
/// assert_eq!(Key::from(["a.b", "c"]).segments(), vec!["a.b", "c"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    /// A single scalar key.
    Scalar(Scalar),
    /// An ordered sequence of verbatim segments.
    Path(Vec<Scalar>),
}

impl Key {
    /// Normalize this key into the segment list the resolver walks.
    ///
    /// This is the only place key shape matters; past it, every operation is
    /// shape-agnostic. String scalars split on every `.`, keeping empty
    /// segments verbatim (`"a..b"` yields `["a", "", "b"]`), so each string
    /// key addresses one deterministic location. Path segments and numeric
    /// scalars are canonicalized without splitting.
    ///
    /// An empty `Key::Path` yields no segments; such a key addresses
    /// nothing (reads miss, writes no-op).
    pub fn segments(&self) -> Vec<String> {
        match self {
            Key::Scalar(Scalar::String(s)) => s.split('.').map(str::to_owned).collect(),
            Key::Scalar(scalar) => vec![scalar.canonical()],
            Key::Path(parts) => parts.iter().map(Scalar::canonical).collect(),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Scalar(Scalar::from(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Scalar(Scalar::from(s))
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Scalar(Scalar::from(n))
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Scalar(Scalar::from(n))
    }
}

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Key::Scalar(Scalar::from(n))
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Scalar(Scalar::from(n))
    }
}

impl From<f64> for Key {
    fn from(x: f64) -> Self {
        Key::Scalar(Scalar::from(x))
    }
}

impl From<f32> for Key {
    fn from(x: f32) -> Self {
        Key::Scalar(Scalar::from(x))
    }
}

impl<S: Into<Scalar>> From<Vec<S>> for Key {
    fn from(parts: Vec<S>) -> Self {
        Key::Path(parts.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<Scalar>, const N: usize> From<[S; N]> for Key {
    fn from(parts: [S; N]) -> Self {
        Key::Path(parts.into_iter().map(Into::into).collect())
    }
}

/// Keys carried as dynamic [`Value`]s keep the runtime shape check: strings,
/// numbers, and all-scalar arrays convert; anything else is rejected.
impl TryFrom<Value> for Key {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::String(s) => Ok(Key::from(s)),
            Value::Integer(n) => Ok(Key::from(n)),
            Value::Float(x) => Ok(Key::from(x)),
            Value::Array(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    parts.push(match item {
                        Value::String(s) => Scalar::String(s),
                        Value::Integer(n) => Scalar::Integer(n),
                        Value::Float(x) => Scalar::Float(x),
                        other => return Err(Error::InvalidKeyKind { found: other.kind() }),
                    });
                }
                Ok(Key::Path(parts))
            }
            other => Err(Error::InvalidKeyKind { found: other.kind() }),
        }
    }
}

/// Build a structured [`Key`] from comma-separated scalar segments.
///
/// Segments are taken verbatim: `key!("a.b")` is a single segment containing
/// a literal dot, unlike `Key::from("a.b")` which splits.
///
/// # Examples
///
/// ```
/// use cubby_core_tree::key;
///
/// assert_eq!(key!("users", 7, "name").segments(), vec!["users", "7", "name"]);
/// assert_eq!(key!("dotted.segment").segments(), vec!["dotted.segment"]);
/// ```
#[macro_export]
macro_rules! key {
    ($($segment:expr),+ $(,)?) => {
        $crate::Key::Path(vec![$($crate::Scalar::from($segment)),+])
    };
}
