//! Namespace identity tokens.

use std::borrow::Cow;
use std::fmt;

/// The stable identity of one namespace.
///
/// Identities are declared explicitly by the code that owns the namespace,
/// never derived from runtime type names. Two handles with equal ids always
/// reach the same tree, no matter how they were constructed.
///
/// # Example
///
/// ```rust
/// use cubby_container::NamespaceId;
///
/// const SETTINGS: NamespaceId = NamespaceId::from_static("app.settings");
///
/// assert_eq!(SETTINGS, NamespaceId::from("app.settings"));
/// assert_eq!(SETTINGS.as_str(), "app.settings");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(Cow<'static, str>);

impl NamespaceId {
    /// Declare an identity in const context, for namespace constants.
    pub const fn from_static(name: &'static str) -> Self {
        NamespaceId(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NamespaceId {
    fn from(name: &str) -> Self {
        NamespaceId(Cow::Owned(name.to_string()))
    }
}

impl From<String> for NamespaceId {
    fn from(name: String) -> Self {
        NamespaceId(Cow::Owned(name))
    }
}

impl From<&NamespaceId> for NamespaceId {
    fn from(id: &NamespaceId) -> Self {
        id.clone()
    }
}
