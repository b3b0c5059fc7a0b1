//! Authentication gating layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `key` decides whether the identity provider is enabled at all, `provider`
//! mounts it once at the application root, and `facade` gives every page a
//! uniform capability surface that works identically whether or not the
//! provider is mounted.

pub mod facade;
pub mod key;
pub mod provider;
