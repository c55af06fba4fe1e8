//! # care-portal
//!
//! Leptos + WASM front end for the hospital administration backend.
//! Browser-only: routing, session cookies, and every REST call run
//! client-side against the deployed backend.
//!
//! This crate contains pages, components, the shared session state, and
//! the typed REST client for patient records and portal accounts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
