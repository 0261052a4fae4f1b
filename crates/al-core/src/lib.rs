//! # al-core
//!
//! Core domain models and port contracts for the Air launcher.
//!
//! This crate contains pure launch-mode logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod launch;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use launch::{
    Deeplink, LaunchIntent, LaunchMode, PendingTask, ReadinessState, CONFIGURATION_REQUEST,
};
