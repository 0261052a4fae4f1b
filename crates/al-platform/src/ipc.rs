use al_core::{Deeplink, LaunchIntent};

/// Requests handed from the launcher to the host runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    OpenAir,
    OpenClassic(LaunchIntent),
    PresentWidgetConfiguration { widget_id: i32, request_code: i32 },
    DismissEntry,
    Navigate(Deeplink),
}
