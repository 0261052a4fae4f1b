//! Headless run loop.
//!
//! Drives one launch request through the entry flows, waits for storage to
//! settle and then plays the queued host commands back in order.

use std::time::Duration;

use al_app::{
    ConfigurationSurfaceResult, EntryDecision, WidgetConfigurationOutcome,
    WidgetConfigurationResult,
};
use al_core::ports::DeeplinkNavigator;
use al_core::{LaunchIntent, LaunchMode};
use al_platform::ipc::HostCommand;
use tracing::{info, info_span, warn, Instrument};

use super::wiring::WiredLauncher;

/// What the host asked the launcher to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRequest {
    /// Cold start through the main entry point.
    Main(LaunchIntent),
    /// The Classic surface asked to move to Air.
    SwitchFromClassic,
    /// A freshly placed widget needs configuring.
    ConfigureWidget { widget_id: i32 },
    /// The Classic surface changed the display language.
    SetLanguage { lang_code: String },
    /// The Classic surface changed the base currency.
    SetBaseCurrency { currency: String },
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub mode: LaunchMode,
    pub storage_ready: bool,
    pub widget_outcome: Option<WidgetConfigurationOutcome>,
    pub widget_result: Option<WidgetConfigurationResult>,
    pub host_commands: Vec<HostCommand>,
}

pub async fn run_launcher(
    mut wired: WiredLauncher,
    request: LaunchRequest,
    ready_timeout: Duration,
) -> RunReport {
    let span = info_span!("bootstrap.run", ?request);

    async move {
        let mut report = RunReport::default();

        match request {
            LaunchRequest::Main(intent) => {
                if let EntryDecision::AwaitingSplash(_) = wired.entry.on_launch(&intent).await {
                    // No splash screen without a display.
                    wired.entry.on_splash_finished().await;
                }
            }
            LaunchRequest::SwitchFromClassic => {
                wired.entry.switch_from_classic().await;
            }
            LaunchRequest::ConfigureWidget { widget_id } => {
                report.widget_outcome = Some(wired.widget_flow.begin(widget_id).await);
            }
            LaunchRequest::SetLanguage { lang_code } => {
                wired.settings.set_language(&lang_code).await;
            }
            LaunchRequest::SetBaseCurrency { currency } => {
                wired.settings.set_base_currency(&currency).await;
            }
        }

        if let Some(orchestrator) = wired.registry.current() {
            if tokio::time::timeout(ready_timeout, orchestrator.wait_storage_ready())
                .await
                .is_err()
            {
                warn!(
                    timeout_ms = ready_timeout.as_millis() as u64,
                    "Storage not ready in time, pending task stays parked"
                );
            }
        }

        while let Ok(command) = wired.host_rx.try_recv() {
            apply_host_command(&wired, &command, &mut report);
            report.host_commands.push(command);
        }

        report.mode = wired
            .registry
            .current()
            .map(|orchestrator| orchestrator.mode())
            .unwrap_or_default();
        report.storage_ready = *wired.storage_ready.borrow();

        report
    }
    .instrument(span)
    .await
}

fn apply_host_command(wired: &WiredLauncher, command: &HostCommand, report: &mut RunReport) {
    match command {
        HostCommand::OpenAir => {
            info!("Air surface presented");
            if let Some(orchestrator) = wired.registry.current() {
                if let Some(buffered) = orchestrator
                    .router()
                    .register_navigator(wired.navigator.clone())
                {
                    wired.navigator.handle(buffered);
                }
                orchestrator.schedule_widget_updates();
            }
        }
        HostCommand::OpenClassic(intent) => {
            info!(data = ?intent.data, "Classic surface presented");
        }
        HostCommand::PresentWidgetConfiguration {
            widget_id,
            request_code,
        } => {
            // A headless host accepts the configuration as presented.
            let result = wired.widget_flow.finish(
                *widget_id,
                *request_code,
                ConfigurationSurfaceResult::Completed { ok: true },
            );
            if let WidgetConfigurationResult::Confirmed { widget_id } = result {
                wired.widgets.mark_configured(widget_id);
                if let Some(orchestrator) = wired.registry.current() {
                    orchestrator.reload_widgets();
                }
            }
            info!(widget_id, ?result, "Widget configuration finished");
            report.widget_result = Some(result);
        }
        HostCommand::DismissEntry => {
            info!("Entry surface dismissed");
        }
        HostCommand::Navigate(deeplink) => {
            info!(%deeplink, "Deeplink delivered");
        }
    }
}
