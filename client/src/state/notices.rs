//! Toast notices shown over every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NoticeState` is the display side of the dispatcher's notice channel: the
//! tool page forwards each `DispatchEvent` here, and admin actions push their
//! own success/error toasts. `ToastHost` renders the queue and expires it.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use catalog::{Catalog, DispatchEvent};

/// Upper bound on simultaneously visible toasts; the oldest is dropped first.
pub const MAX_TOASTS: usize = 4;
/// How long a toast stays up before `ToastHost` dismisses it.
pub const TOAST_TTL_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for this kind.
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub seq: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Queue of visible toasts.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub toasts: Vec<Toast>,
    next_seq: u64,
}

impl NoticeState {
    /// Push a toast and return its sequence number.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.toasts.push(Toast { seq, kind, title: title.into(), message: message.into() });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        seq
    }

    /// Remove the toast with `seq`. Unknown sequence numbers are ignored.
    pub fn dismiss(&mut self, seq: u64) {
        self.toasts.retain(|toast| toast.seq != seq);
    }

    /// Turn a dispatcher event into an informational toast.
    pub fn push_dispatch_event(&mut self, event: &DispatchEvent, catalog: &Catalog) -> u64 {
        match event {
            DispatchEvent::Unresolved { id } => {
                self.push(ToastKind::Info, "Coming soon", unresolved_message(id, catalog))
            }
        }
    }
}

/// Message for a tool id that has no widget yet.
pub fn unresolved_message(id: &str, catalog: &Catalog) -> String {
    match catalog.tool(id) {
        Some(tool) => format!("{} is under development. Check back soon!", tool.name),
        None if id.is_empty() => "No tool was requested.".to_owned(),
        None => format!("\"{id}\" is not a tool we know about yet."),
    }
}
