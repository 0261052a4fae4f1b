//! Cold-start entry flow.
//!
//! Decides between the Classic and Air surfaces when the host launches the
//! application, and forwards launch data to whichever surface is live.

use std::sync::{Arc, OnceLock};

use al_core::ports::SurfacePort;
use al_core::{LaunchIntent, LaunchMode};
use tracing::{error, info, info_span, Instrument};

use super::mode_flag::LaunchModeFlag;
use super::orchestrator::{LaunchOrchestrator, SwitchOutcome};
use super::registry::{LauncherFactory, LauncherRegistry};

/// What the entry point did with a launch.
#[derive(Clone)]
pub enum EntryDecision {
    /// Classic surface opened with the launch intent.
    Classic,
    /// Air was already live; the intent's deeplink was forwarded and the entry dismissed.
    ForwardedToAir,
    /// A fresh orchestrator was installed; call [`LaunchEntry::on_splash_finished`] next.
    AwaitingSplash(Arc<LaunchOrchestrator>),
}

impl std::fmt::Debug for EntryDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryDecision::Classic => f.write_str("Classic"),
            EntryDecision::ForwardedToAir => f.write_str("ForwardedToAir"),
            EntryDecision::AwaitingSplash(_) => f.write_str("AwaitingSplash"),
        }
    }
}

pub struct LaunchEntry {
    registry: Arc<LauncherRegistry>,
    factory: LauncherFactory,
    mode_flag: Arc<LaunchModeFlag>,
    surface: Arc<dyn SurfacePort>,
    start_on_air_override: Option<bool>,
    // Built on the first Classic request and reinstalled on every later one.
    classic_bridge: OnceLock<Arc<LaunchOrchestrator>>,
}

impl LaunchEntry {
    pub fn new(
        registry: Arc<LauncherRegistry>,
        factory: LauncherFactory,
        mode_flag: Arc<LaunchModeFlag>,
        surface: Arc<dyn SurfacePort>,
    ) -> Self {
        Self {
            registry,
            factory,
            mode_flag,
            surface,
            start_on_air_override: None,
            classic_bridge: OnceLock::new(),
        }
    }

    /// Ignore the persisted flag and always start in the given mode.
    pub fn with_start_on_air_override(mut self, start_on_air: Option<bool>) -> Self {
        self.start_on_air_override = start_on_air;
        self
    }

    pub async fn on_launch(&self, intent: &LaunchIntent) -> EntryDecision {
        let span = info_span!("usecase.launch.entry.on_launch");

        async {
            let mode = match self.start_on_air_override {
                Some(flag) => LaunchMode::from_flag(flag),
                None => self.mode_flag.load().await,
            };
            let existing = self.registry.current();
            info!(?mode, has_orchestrator = existing.is_some(), "Entry point launched");

            if !mode.is_air() {
                if let Some(orchestrator) = existing {
                    orchestrator.switching_to_classic();
                }
                if let Err(err) = self.surface.open_classic(intent).await {
                    error!(error = %err, "Failed to open Classic surface");
                }
                return EntryDecision::Classic;
            }

            if let Some(orchestrator) = existing.filter(|o| o.is_on_the_air()) {
                orchestrator.handle_intent(intent);
                if let Err(err) = self.surface.dismiss_entry().await {
                    error!(error = %err, "Failed to dismiss entry surface");
                }
                return EntryDecision::ForwardedToAir;
            }

            let orchestrator = (self.factory)();
            self.registry.install(orchestrator.clone());
            orchestrator.handle_intent(intent);
            EntryDecision::AwaitingSplash(orchestrator)
        }
        .instrument(span)
        .await
    }

    /// Splash phase is over: enter Air through the shared orchestrator.
    pub async fn on_splash_finished(&self) -> Option<SwitchOutcome> {
        let orchestrator = self.registry.current()?;
        Some(orchestrator.switch_to_air(false).await)
    }

    /// The Classic surface asked to move to Air.
    ///
    /// The Classic bridge owns its orchestrator and installs it as the shared
    /// instance, replacing whatever an entry point installed before.
    pub async fn switch_from_classic(&self) -> SwitchOutcome {
        let orchestrator = self
            .classic_bridge
            .get_or_init(|| (self.factory)())
            .clone();
        self.registry.install(orchestrator.clone());
        orchestrator.switch_to_air(true).await
    }
}
