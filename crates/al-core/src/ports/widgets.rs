use anyhow::Result;

/// Widget id reported by the host when none was supplied.
pub const INVALID_WIDGET_ID: i32 = 0;

/// Home-screen widget subsystem.
pub trait WidgetCatalogPort: Send + Sync {
    /// Whether `widget_id` already has a stored configuration.
    fn is_widget_configured(&self, widget_id: i32) -> bool;

    fn is_valid_widget_id(&self, widget_id: i32) -> bool {
        widget_id != INVALID_WIDGET_ID
    }

    /// Register periodic refresh of every placed widget.
    fn schedule_updates(&self) -> Result<()>;

    /// Re-render every placed widget.
    fn reload_widgets(&self) -> Result<()>;
}

#[cfg(test)]
mockall::mock! {
    pub WidgetCatalog {}

    impl WidgetCatalogPort for WidgetCatalog {
        fn is_widget_configured(&self, widget_id: i32) -> bool;
        fn schedule_updates(&self) -> Result<()>;
        fn reload_widgets(&self) -> Result<()>;
    }
}
