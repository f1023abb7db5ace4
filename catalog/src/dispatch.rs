//! Tool dispatcher: requested id → [`Resolution`], plus unresolved-id events.
//!
//! DESIGN
//! ======
//! Resolution is a pure function of the id and the registry. The only state
//! the dispatcher keeps is the set of ids it has already announced, which
//! makes the "under development" notice fire exactly once per unresolved id
//! for the lifetime of the dispatcher (one session). Detection and display
//! are decoupled: the dispatcher publishes a [`DispatchEvent`] to a
//! [`NoticeSink`] and never touches the notification UI itself.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::collections::HashSet;

use crate::registry::{Registry, Resolution};

/// Event published by the dispatcher's resolution step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchEvent {
    /// A requested tool id has no registered widget.
    Unresolved { id: String },
}

/// Observer of dispatch events.
pub trait NoticeSink {
    fn publish(&self, event: DispatchEvent);
}

impl<F> NoticeSink for F
where
    F: Fn(DispatchEvent),
{
    fn publish(&self, event: DispatchEvent) {
        self(event);
    }
}

/// Resolves tool ids against a [`Registry`] and announces unresolved ones.
#[derive(Debug)]
pub struct Dispatcher<W> {
    registry: Registry<W>,
    announced: HashSet<String>,
}

impl<W: Clone> Dispatcher<W> {
    #[must_use]
    pub fn new(registry: Registry<W>) -> Self {
        Self { registry, announced: HashSet::new() }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry<W> {
        &self.registry
    }

    /// Resolve `id` without announcing anything.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Resolution<W> {
        self.registry.resolve(id)
    }

    /// Resolve `id`; the first time an unresolved id is seen, publish
    /// [`DispatchEvent::Unresolved`] to `sink`.
    ///
    /// Empty and unknown ids are ordinary input and never fail.
    pub fn dispatch(&mut self, id: &str, sink: &impl NoticeSink) -> Resolution<W> {
        let resolution = self.registry.resolve(id);
        if !resolution.is_known() && self.announced.insert(id.to_owned()) {
            sink.publish(DispatchEvent::Unresolved { id: id.to_owned() });
        }
        resolution
    }

    /// Whether an unresolved notice has already been published for `id`.
    #[must_use]
    pub fn was_announced(&self, id: &str) -> bool {
        self.announced.contains(id)
    }
}
