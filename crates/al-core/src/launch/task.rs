use serde::Serialize;

/// Request code attached to widget configuration presentations.
pub const CONFIGURATION_REQUEST: i32 = 12;

/// A request captured while storage is not ready yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PendingTask {
    /// Enter Air mode.
    ///
    /// `from_legacy` is set when the request comes from the Classic surface,
    /// which makes the switch invalidate Classic-era caches and persist the mode.
    ToAir { from_legacy: bool },

    /// Present the configuration surface for one widget instance.
    ToWidgetConfiguration { request_code: i32, widget_id: i32 },
}
