mod configure_widget;

pub use configure_widget::{
    ConfigurationSurfaceResult, WidgetConfigurationFlow, WidgetConfigurationOutcome,
    WidgetConfigurationResult,
};
