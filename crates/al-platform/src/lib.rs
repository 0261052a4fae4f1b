//! # al-platform
//!
//! Host-facing implementations for the Air launcher.
//!
//! This crate resolves application directories and bridges the launcher's
//! surface, deeplink and widget ports onto the host runtime.

pub mod adapters;
pub mod app_dirs;
pub mod ipc;
