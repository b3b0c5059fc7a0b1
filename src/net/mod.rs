//! Networking modules for the Mission Control REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles authenticated HTTP calls and failure normalization, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
