//! Air launcher
//!
//! Host-side composition of the launcher crates: configuration, tracing,
//! wiring and the headless run loop.

pub mod bootstrap;
pub mod cli;
