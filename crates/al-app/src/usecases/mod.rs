//! Launch use cases
//!
//! Entry point (cold start / Classic request / widget host)
//!         ↓
//! LaunchOrchestrator ── StorageReadinessGate ── PendingTaskSlot
//!         ↓
//! SurfacePort / LaunchModeFlag / caches / DeeplinkRouter
//!
//! Classic settings bridge → BaseSettingsPort, then a widget reload

pub mod launch;
pub mod settings;
pub mod widgets;
