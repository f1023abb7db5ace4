//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's admin REST endpoints. The tool registry and
//! dispatcher never touch the network; only the admin page does.

pub mod api;
