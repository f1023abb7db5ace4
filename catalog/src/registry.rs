//! Tool registry: immutable id → widget mapping.
//!
//! DESIGN
//! ======
//! The registry is built once by the application's composition root and
//! passed down explicitly (Leptos context on the client). It is never
//! mutated after [`Registry::build`]; clones share the same map through an
//! `Arc`, so handing it to many views costs a pointer copy.
//!
//! The widget type is generic. The UI plugs in `fn() -> AnyView`; tests use
//! plain values.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of looking up a tool id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<W> {
    /// The id has a registered widget.
    Known(W),
    /// No widget is registered under the id. A normal condition.
    Unknown,
}

impl<W> Resolution<W> {
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Convert into an `Option`, dropping the distinction's name.
    pub fn known(self) -> Option<W> {
        match self {
            Self::Known(widget) => Some(widget),
            Self::Unknown => None,
        }
    }
}

/// Immutable mapping from tool id to widget.
#[derive(Debug)]
pub struct Registry<W> {
    entries: Arc<HashMap<&'static str, W>>,
}

impl<W> Clone for Registry<W> {
    fn clone(&self) -> Self {
        Self { entries: Arc::clone(&self.entries) }
    }
}

impl<W> Registry<W> {
    /// Construct the registry from a fixed list of `(id, widget)` pairs.
    ///
    /// If an id appears more than once, the later pair wins.
    pub fn build<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, W)>,
    {
        Self { entries: Arc::new(pairs.into_iter().collect()) }
    }

    /// Widget registered under `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&W> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl<W: Clone> Registry<W> {
    /// Resolve `id` into a [`Resolution`].
    #[must_use]
    pub fn resolve(&self, id: &str) -> Resolution<W> {
        self.get(id).cloned().map_or(Resolution::Unknown, Resolution::Known)
    }
}
