//! Maps namespace identities to their shared façades.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lazy_static::lazy_static;

use crate::container::Container;
use crate::namespace_id::NamespaceId;

lazy_static! {
    static ref GLOBAL: Registry = Registry::new();
}

/// The namespace registry: one façade per identity.
///
/// Most callers go through [`Registry::global`], which backs
/// [`Container::new`]. Embedders and tests that want hermetic state can own
/// a registry directly and hand containers out themselves.
#[derive(Debug)]
pub struct Registry {
    namespaces: RwLock<HashMap<NamespaceId, Container>>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            namespaces: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// The shared façade for `id`, constructed and registered on first
    /// request.
    ///
    /// Idempotent: every call with the same identity hands out a handle onto
    /// the same tree.
    pub fn instance<I: Into<NamespaceId>>(&self, id: I) -> Container {
        let id = id.into();
        if let Some(container) = self.read().get(&id) {
            return container.clone();
        }

        let mut namespaces = self.write();
        namespaces
            .entry(id)
            .or_insert_with_key(|id| Container::bound(id.clone()))
            .clone()
    }

    /// True when `id` has already been initialized in this registry.
    pub fn contains<I: Into<NamespaceId>>(&self, id: I) -> bool {
        self.read().contains_key(&id.into())
    }

    /// The identities initialized so far, in no particular order.
    pub fn names(&self) -> Vec<NamespaceId> {
        self.read().keys().cloned().collect()
    }

    /// How many namespaces have been initialized.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<NamespaceId, Container>> {
        self.namespaces.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<NamespaceId, Container>> {
        self.namespaces.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
