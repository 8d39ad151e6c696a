//! External integrations
//!
//! Adapters wrap everything outside the process boundary. The clinic
//! backend is the only collaborator.

pub mod api;
