//! Air launcher application layer
//!
//! This crate contains the launch use cases: the readiness gate, the
//! orchestrator and the entry-point flows built on top of them.

pub mod app_paths;
pub mod usecases;

pub use usecases::launch::{
    Admission, DeeplinkRouter, Delivery, EntryDecision, LaunchEntry, LaunchModeFlag,
    LaunchOrchestrator, LaunchOrchestratorDeps, LauncherFactory, LauncherRegistry,
    PendingTaskSlot, ReadyTransition, StorageReadinessGate, SwitchOutcome, TaskReport,
};
pub use usecases::settings::UpdateBaseSettings;
pub use usecases::widgets::{
    ConfigurationSurfaceResult, WidgetConfigurationFlow, WidgetConfigurationOutcome,
    WidgetConfigurationResult,
};
