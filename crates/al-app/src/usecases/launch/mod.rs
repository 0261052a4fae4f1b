mod deeplink_router;
mod entry;
mod mode_flag;
mod orchestrator;
mod pending_slot;
mod readiness_gate;
mod registry;

pub use deeplink_router::{DeeplinkRouter, Delivery};
pub use entry::{EntryDecision, LaunchEntry};
pub use mode_flag::LaunchModeFlag;
pub use orchestrator::{LaunchOrchestrator, LaunchOrchestratorDeps, SwitchOutcome, TaskReport};
pub use pending_slot::PendingTaskSlot;
pub use readiness_gate::{Admission, ReadyTransition, StorageReadinessGate};
pub use registry::{LauncherFactory, LauncherRegistry};
