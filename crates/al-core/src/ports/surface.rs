use anyhow::Result;

use crate::launch::LaunchIntent;

/// Host surface control.
///
/// Every method hands work to the host lifecycle framework and returns once
/// the request has been queued. Implementations must not call back into the
/// launcher synchronously.
#[async_trait::async_trait]
pub trait SurfacePort: Send + Sync {
    /// Present the Air surface and finish the surface that requested it.
    async fn open_air(&self) -> Result<()>;

    /// Present the Classic surface, forwarding the launch intent to it.
    async fn open_classic(&self, intent: &LaunchIntent) -> Result<()>;

    /// Present the configuration surface for `widget_id`, tagged with `request_code`.
    async fn present_widget_configuration(&self, widget_id: i32, request_code: i32) -> Result<()>;

    /// Finish the entry surface without presenting anything.
    async fn dismiss_entry(&self) -> Result<()>;
}
