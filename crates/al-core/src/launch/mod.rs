//! Launch domain module.
//!
//! Defines the launch mode, readiness state, deferred task and deeplink types.

pub mod deeplink;
pub mod intent;
pub mod mode;
pub mod readiness;
pub mod task;

pub use deeplink::Deeplink;
pub use intent::LaunchIntent;
pub use mode::LaunchMode;
pub use readiness::ReadinessState;
pub use task::{PendingTask, CONFIGURATION_REQUEST};
