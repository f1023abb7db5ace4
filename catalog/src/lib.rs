//! Shared tool catalog, registry, and dispatch core.
//!
//! This crate owns the data model used by `client`, `server`, and `cli`:
//! the static category/tool catalog and its queries, the id → widget
//! [`Registry`], the [`Dispatcher`] that turns a requested id into a
//! [`Resolution`], and the wire records of the admin tool store.
//!
//! Nothing here touches the DOM or the network. The registry is generic over
//! its widget type so the UI crate can plug in render functions while tests
//! use plain values.

pub mod data;
pub mod dispatch;
pub mod model;
pub mod query;
pub mod record;
pub mod registry;

pub use dispatch::{DispatchEvent, Dispatcher, NoticeSink};
pub use model::{Catalog, CategoryDescriptor, ToolDescriptor};
pub use record::{NewToolRecord, RecordError, ToolPatch, ToolRecord};
pub use registry::{Registry, Resolution};
