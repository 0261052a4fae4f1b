//! Base settings written by the Classic surface.
//!
//! Widgets render with the active language and base currency, so every
//! change is followed by a widget reload.

use std::sync::Arc;

use al_core::ports::{BaseSettingsPort, WidgetCatalogPort};
use tracing::{error, info, info_span, warn, Instrument};

pub struct UpdateBaseSettings {
    settings: Arc<dyn BaseSettingsPort>,
    widgets: Arc<dyn WidgetCatalogPort>,
}

impl UpdateBaseSettings {
    pub fn new(settings: Arc<dyn BaseSettingsPort>, widgets: Arc<dyn WidgetCatalogPort>) -> Self {
        Self { settings, widgets }
    }

    pub async fn set_language(&self, lang_code: &str) {
        let span = info_span!("usecase.settings.set_language", lang_code);
        async {
            match self.settings.set_active_language(lang_code).await {
                Ok(()) => info!("Active language stored"),
                Err(err) => error!(error = %err, "Failed to store active language"),
            }
            self.reload_widgets();
        }
        .instrument(span)
        .await
    }

    pub async fn set_base_currency(&self, currency: &str) {
        let span = info_span!("usecase.settings.set_base_currency", currency);
        async {
            match self.settings.set_base_currency(currency).await {
                Ok(()) => info!("Base currency stored"),
                Err(err) => error!(error = %err, "Failed to store base currency"),
            }
            self.reload_widgets();
        }
        .instrument(span)
        .await
    }

    fn reload_widgets(&self) {
        if let Err(err) = self.widgets.reload_widgets() {
            warn!(error = %err, "Failed to reload widgets");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, Sequence};

    mock! {
        Settings {}

        #[async_trait]
        impl BaseSettingsPort for Settings {
            async fn set_active_language(&self, lang_code: &str) -> anyhow::Result<()>;
            async fn set_base_currency(&self, currency: &str) -> anyhow::Result<()>;
        }
    }

    mock! {
        Widgets {}

        impl WidgetCatalogPort for Widgets {
            fn is_widget_configured(&self, widget_id: i32) -> bool;
            fn schedule_updates(&self) -> anyhow::Result<()>;
            fn reload_widgets(&self) -> anyhow::Result<()>;
        }
    }

    #[tokio::test]
    async fn language_is_stored_before_widgets_reload() {
        let mut seq = Sequence::new();
        let mut settings = MockSettings::new();
        let mut widgets = MockWidgets::new();
        settings
            .expect_set_active_language()
            .withf(|code| code == "de")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        widgets
            .expect_reload_widgets()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        UpdateBaseSettings::new(Arc::new(settings), Arc::new(widgets))
            .set_language("de")
            .await;
    }

    #[tokio::test]
    async fn currency_is_stored_before_widgets_reload() {
        let mut seq = Sequence::new();
        let mut settings = MockSettings::new();
        let mut widgets = MockWidgets::new();
        settings
            .expect_set_base_currency()
            .withf(|currency| currency == "EUR")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        widgets
            .expect_reload_widgets()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        UpdateBaseSettings::new(Arc::new(settings), Arc::new(widgets))
            .set_base_currency("EUR")
            .await;
    }

    #[tokio::test]
    async fn widgets_reload_even_when_store_fails() {
        let mut settings = MockSettings::new();
        let mut widgets = MockWidgets::new();
        settings
            .expect_set_base_currency()
            .returning(|_| Err(anyhow::anyhow!("disk full")));
        widgets.expect_reload_widgets().times(1).returning(|| Ok(()));

        UpdateBaseSettings::new(Arc::new(settings), Arc::new(widgets))
            .set_base_currency("USD")
            .await;
    }
}
