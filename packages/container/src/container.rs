//! The namespace façade.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cubby_core_tree::{resolver, Error, Key, Value};

use crate::namespace_id::NamespaceId;
use crate::registry::Registry;

/// A handle onto one namespace's private tree.
///
/// Handles are cheap to clone; every clone (and every other handle with the
/// same identity, however obtained) operates on the same tree. Mutating
/// operations take the namespace's write lock, reads take the read lock, so
/// each operation is atomic with respect to the tree it touches.
///
/// Keys may be flat scalars, dot-delimited strings, or structured paths;
/// see [`Key`] for the normalization rules.
///
/// # Example
///
/// ```rust
/// use cubby_container::Container;
///
/// let settings = Container::new("docs.settings");
/// settings.set("server.port", 8080);
///
/// assert_eq!(settings.get("server.port").unwrap(), Some(8080.into()));
/// assert!(settings.has("server"));
/// ```
#[derive(Clone, Debug)]
pub struct Container {
    id: NamespaceId,
    tree: Arc<RwLock<Value>>,
}

impl Container {
    /// Bind to the namespace `id`, creating it on first use.
    ///
    /// Goes through [`Registry::global`], so a directly-constructed handle
    /// shares its tree with every registry-obtained handle of the same
    /// identity.
    pub fn new<I: Into<NamespaceId>>(id: I) -> Self {
        Registry::global().instance(id)
    }

    /// Construct the one façade the registry hands out for `id`.
    pub(crate) fn bound(id: NamespaceId) -> Self {
        log::debug!("initializing namespace {}", id);
        Container {
            id,
            tree: Arc::new(RwLock::new(Value::map())),
        }
    }

    /// The identity this handle is bound to.
    pub fn id(&self) -> &NamespaceId {
        &self.id
    }

    /// Set `value` at `key`, overwriting any previous occupant.
    ///
    /// Intermediate mappings are created as needed; a leaf sitting mid-path
    /// is replaced. Never fails.
    pub fn set<K, V>(&self, key: K, value: V)
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let segments = key.into().segments();
        resolver::set(&mut self.write(), &segments, value.into());
    }

    /// Set `value` at `key` unless the slot is occupied, merging structures
    /// instead of overwriting.
    ///
    /// Returns `true` when the slot was newly filled. On conflict, maps
    /// union (newer leaves win inside), arrays concatenate, and any other
    /// pairing keeps the existing value.
    pub fn add<K, V>(&self, key: K, value: V) -> bool
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let segments = key.into().segments();
        resolver::add(&mut self.write(), &segments, value.into())
    }

    /// The value at `key`, if the full path resolves.
    ///
    /// Statically-shaped keys (strings, numbers, paths) never fail; a
    /// dynamically-shaped [`Value`] key of an invalid kind (null, bool, map,
    /// bytes) surfaces [`Error::InvalidKeyKind`]. A stored `Null` reads as
    /// `Some(Value::Null)`, an absent path as `None`.
    pub fn get<K>(&self, key: K) -> Result<Option<Value>, Error>
    where
        K: TryInto<Key>,
        Error: From<K::Error>,
    {
        let key: Key = key.try_into()?;
        let segments = key.segments();
        Ok(resolver::get(&self.read(), &segments).cloned())
    }

    /// Like [`get`](Self::get), but fall back to `default` when the path is
    /// absent.
    pub fn get_or<K, V>(&self, key: K, default: V) -> Result<Value, Error>
    where
        K: TryInto<Key>,
        Error: From<K::Error>,
        V: Into<Value>,
    {
        Ok(self.get(key)?.unwrap_or_else(|| default.into()))
    }

    /// True when the full path resolves, even to `Null`.
    pub fn has<K: Into<Key>>(&self, key: K) -> bool {
        let segments = key.into().segments();
        resolver::has(&self.read(), &segments)
    }

    /// Detach and return the value at `key`; `None` when absent.
    pub fn pull<K: Into<Key>>(&self, key: K) -> Option<Value> {
        let segments = key.into().segments();
        resolver::pull(&mut self.write(), &segments)
    }

    /// Like [`pull`](Self::pull), but fall back to `default` when the path
    /// is absent.
    pub fn pull_or<K, V>(&self, key: K, default: V) -> Value
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        self.pull(key).unwrap_or_else(|| default.into())
    }

    /// Delete the value at `key`; no-op when absent.
    pub fn remove<K: Into<Key>>(&self, key: K) {
        let segments = key.into().segments();
        resolver::remove(&mut self.write(), &segments);
    }

    /// Empty the namespace. The identity and its registration persist.
    pub fn flush(&self) {
        log::debug!("flushing namespace {}", self.id);
        resolver::flush(&mut self.write());
    }

    /// A snapshot of the entire tree.
    ///
    /// The snapshot is detached: mutating it never touches the namespace.
    pub fn all(&self) -> Value {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Value> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Value> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }
}
