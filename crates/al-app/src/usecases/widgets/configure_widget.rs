//! Widget configuration entry flow.
//!
//! Runs when the host asks the application to configure a freshly placed
//! widget. Cheap checks that need no storage short-circuit before the
//! readiness gate is involved.

use std::sync::Arc;

use al_core::CONFIGURATION_REQUEST;
use tracing::{info, info_span, warn, Instrument};

use crate::usecases::launch::{Admission, LauncherFactory, LauncherRegistry, TaskReport};

/// Immediate outcome of [`WidgetConfigurationFlow::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetConfigurationOutcome {
    /// Widget already has a configuration: report success right away.
    AlreadyConfigured,
    /// Host passed no usable widget id: report failure right away.
    InvalidWidget,
    /// Configuration surface requested through the readiness gate.
    Requested(Admission<TaskReport>),
}

/// What the configuration surface reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationSurfaceResult {
    Completed { ok: bool },
    Canceled,
}

/// Final answer for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetConfigurationResult {
    Confirmed { widget_id: i32 },
    Canceled,
}

pub struct WidgetConfigurationFlow {
    registry: Arc<LauncherRegistry>,
    factory: LauncherFactory,
}

impl WidgetConfigurationFlow {
    pub fn new(registry: Arc<LauncherRegistry>, factory: LauncherFactory) -> Self {
        Self { registry, factory }
    }

    pub async fn begin(&self, widget_id: i32) -> WidgetConfigurationOutcome {
        let span = info_span!("usecase.widgets.configure.begin", widget_id);

        async {
            let orchestrator = self.registry.get_or_install_with(&self.factory);

            if orchestrator.is_widget_configured(widget_id) {
                info!("Widget already configured");
                return WidgetConfigurationOutcome::AlreadyConfigured;
            }

            if !orchestrator.is_valid_widget_id(widget_id) {
                warn!("Invalid widget id, aborting configuration");
                return WidgetConfigurationOutcome::InvalidWidget;
            }

            WidgetConfigurationOutcome::Requested(
                orchestrator
                    .present_widget_configuration(CONFIGURATION_REQUEST, widget_id)
                    .await,
            )
        }
        .instrument(span)
        .await
    }

    /// Map the configuration surface's answer back to the host.
    pub fn finish(
        &self,
        widget_id: i32,
        request_code: i32,
        result: ConfigurationSurfaceResult,
    ) -> WidgetConfigurationResult {
        match result {
            ConfigurationSurfaceResult::Completed { ok: true }
                if request_code == CONFIGURATION_REQUEST =>
            {
                WidgetConfigurationResult::Confirmed { widget_id }
            }
            _ => WidgetConfigurationResult::Canceled,
        }
    }
}
