//! Typed container access.

use serde::de::DeserializeOwned;
use serde::Serialize;

use cubby_container::Container;
use cubby_core_tree::{Error as KeyError, Key};

use crate::convert::{from_value, to_value};
use crate::error::Error;

/// Extension trait storing serde types in containers.
///
/// Implemented for [`Container`]; bring the trait into scope and any
/// serializable type can live at any key, structured through the same
/// tree the untyped operations see.
///
/// # Example
///
/// ```rust
/// use cubby_serde_tree::{Container, TypedContainer};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let config = Container::new("docs.typed-trait");
/// config.set_as("net.server", &Server { host: "localhost".into(), port: 8080 })?;
///
/// // the struct is an ordinary subtree underneath
/// assert!(config.has("net.server.port"));
///
/// let server: Option<Server> = config.get_as("net.server")?;
/// assert_eq!(server.map(|s| s.port), Some(8080));
/// # Ok::<(), cubby_serde_tree::Error>(())
/// ```
pub trait TypedContainer {
    /// Serialize `data` and set it at `key`.
    fn set_as<K, T>(&self, key: K, data: &T) -> Result<(), Error>
    where
        K: Into<Key>,
        T: Serialize;

    /// Serialize `data` and merge it at `key`, reporting whether the slot
    /// was newly filled.
    fn add_as<K, T>(&self, key: K, data: &T) -> Result<bool, Error>
    where
        K: Into<Key>,
        T: Serialize;

    /// Read the value at `key` and deserialize it; `Ok(None)` when absent.
    fn get_as<K, T>(&self, key: K) -> Result<Option<T>, Error>
    where
        K: TryInto<Key>,
        KeyError: From<K::Error>,
        T: DeserializeOwned;

    /// Detach the value at `key` and deserialize it; `Ok(None)` when
    /// absent. The value is removed even when decoding fails.
    fn pull_as<K, T>(&self, key: K) -> Result<Option<T>, Error>
    where
        K: Into<Key>,
        T: DeserializeOwned;
}

impl TypedContainer for Container {
    fn set_as<K, T>(&self, key: K, data: &T) -> Result<(), Error>
    where
        K: Into<Key>,
        T: Serialize,
    {
        self.set(key, to_value(data)?);
        Ok(())
    }

    fn add_as<K, T>(&self, key: K, data: &T) -> Result<bool, Error>
    where
        K: Into<Key>,
        T: Serialize,
    {
        Ok(self.add(key, to_value(data)?))
    }

    fn get_as<K, T>(&self, key: K) -> Result<Option<T>, Error>
    where
        K: TryInto<Key>,
        KeyError: From<K::Error>,
        T: DeserializeOwned,
    {
        let Some(value) = self.get(key)? else {
            return Ok(None);
        };
        Ok(Some(from_value(value)?))
    }

    fn pull_as<K, T>(&self, key: K) -> Result<Option<T>, Error>
    where
        K: Into<Key>,
        T: DeserializeOwned,
    {
        let Some(value) = self.pull(key) else {
            return Ok(None);
        };
        Ok(Some(from_value(value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubby_container::Registry;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Server {
        host: String,
        port: u16,
    }

    fn server() -> Server {
        Server {
            host: "localhost".to_string(),
            port: 8080,
        }
    }

    #[test]
    fn typed_round_trip_at_a_dotted_path() {
        let container = Registry::new().instance("typed.roundtrip");

        container.set_as("net.server", &server()).unwrap();
        let recovered: Server = container.get_as("net.server").unwrap().unwrap();

        assert_eq!(recovered, server());
    }

    #[test]
    fn typed_subtrees_are_reachable_per_field() {
        let container = Registry::new().instance("typed.fields");
        container.set_as("net.server", &server()).unwrap();

        assert_eq!(
            container.get("net.server.port").unwrap(),
            Some(8080.into())
        );
        let host: Option<String> = container.get_as("net.server.host").unwrap();
        assert_eq!(host.as_deref(), Some("localhost"));
    }

    #[test]
    fn get_as_missing_is_none() {
        let container = Registry::new().instance("typed.missing");

        let absent: Option<Server> = container.get_as("nothing.here").unwrap();
        assert!(absent.is_none());
    }

    #[test]
    fn pull_as_detaches() {
        let container = Registry::new().instance("typed.pull");
        container.set_as("cfg", &server()).unwrap();

        let pulled: Option<Server> = container.pull_as("cfg").unwrap();
        assert_eq!(pulled, Some(server()));
        assert!(!container.has("cfg"));
    }

    #[test]
    fn add_as_respects_the_merge_policy() {
        let container = Registry::new().instance("typed.add");

        assert!(container.add_as("cfg", &server()).unwrap());

        let replacement = Server {
            host: "other".to_string(),
            port: 9090,
        };
        // maps union on conflict, so the slot reports merged rather than set
        assert!(!container.add_as("cfg", &replacement).unwrap());

        // union-internal collisions prefer the newer leaves
        let merged: Server = container.get_as("cfg").unwrap().unwrap();
        assert_eq!(merged, replacement);
    }

    #[test]
    fn decode_mismatch_is_an_error() {
        let container = Registry::new().instance("typed.mismatch");
        container.set("cfg", "just a string");

        let result: Result<Option<Server>, Error> = container.get_as("cfg");
        assert!(matches!(result, Err(Error::Deserialize(_))));
    }

    #[test]
    fn dynamic_keys_still_validate() {
        use cubby_core_tree::Value;

        let container = Registry::new().instance("typed.badkey");

        let result: Result<Option<Server>, Error> = container.get_as(Value::Null);
        assert!(matches!(result, Err(Error::Key(_))));
    }
}
