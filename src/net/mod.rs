//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend endpoint behind typed async functions and
//! `types` defines the shared wire schema. Nothing else in the crate
//! talks HTTP directly.

pub mod api;
pub mod types;
