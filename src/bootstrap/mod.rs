pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::{run_launcher, LaunchRequest, RunReport};
pub use wiring::{wire_launcher, WiredLauncher, WiringError};
