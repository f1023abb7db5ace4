//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `tool` is the dispatcher route; every other page is a
//! catalog listing or the admin screen.

pub mod admin;
pub mod category;
pub mod home;
pub mod not_found;
pub mod tool;
pub mod tools;
