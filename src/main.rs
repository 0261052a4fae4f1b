use std::path::PathBuf;
use std::time::Duration;

use airlaunch_lib::bootstrap::config::CONFIG_ENV;
use airlaunch_lib::bootstrap::tracing::init_tracing_subscriber;
use airlaunch_lib::bootstrap::wiring::resolve_app_paths;
use airlaunch_lib::bootstrap::{resolve_config, run_launcher, wire_launcher};
use airlaunch_lib::cli::Cli;
use al_core::ports::AppDirsPort;
use al_platform::app_dirs::DirsAppDirsAdapter;
use anyhow::Context;
use clap::Parser;
use tracing::info;

const STORAGE_READY_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let request = Cli::parse().into_request();

    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let explicit_config = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = resolve_config(explicit_config, &app_dirs)?;

    let logs_dir = config
        .file_logging
        .then(|| resolve_app_paths(&config, &app_dirs).logs_dir);
    init_tracing_subscriber(logs_dir.as_deref())?;

    let wired = wire_launcher(&config, &app_dirs)?;
    let report = run_launcher(wired, request, STORAGE_READY_TIMEOUT).await;
    info!(
        mode = ?report.mode,
        storage_ready = report.storage_ready,
        commands = report.host_commands.len(),
        "Launch finished"
    );

    Ok(())
}
