//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `notices`, `admin`) so individual
//! components can depend on small focused models. Each model is provided once
//! by `App` as an `RwSignal` context.

pub mod admin;
pub mod notices;
pub mod ui;
