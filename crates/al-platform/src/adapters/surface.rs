use al_core::ports::SurfacePort;
use al_core::LaunchIntent;
use anyhow::Result;
use tokio::sync::mpsc;

use crate::ipc::HostCommand;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("host runtime channel closed")]
    ChannelClosed,
}

/// Surface control backed by the host command channel.
///
/// Each request is queued for the host runtime loop; nothing is presented
/// synchronously.
#[derive(Clone)]
pub struct ChannelSurface {
    cmd_tx: mpsc::Sender<HostCommand>,
}

impl ChannelSurface {
    pub fn new(cmd_tx: mpsc::Sender<HostCommand>) -> Self {
        Self { cmd_tx }
    }

    async fn send(&self, command: HostCommand) -> Result<()> {
        self.cmd_tx
            .send(command)
            .await
            .map_err(|_| SurfaceError::ChannelClosed)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl SurfacePort for ChannelSurface {
    async fn open_air(&self) -> Result<()> {
        self.send(HostCommand::OpenAir).await
    }

    async fn open_classic(&self, intent: &LaunchIntent) -> Result<()> {
        self.send(HostCommand::OpenClassic(intent.clone())).await
    }

    async fn present_widget_configuration(&self, widget_id: i32, request_code: i32) -> Result<()> {
        self.send(HostCommand::PresentWidgetConfiguration {
            widget_id,
            request_code,
        })
        .await
    }

    async fn dismiss_entry(&self) -> Result<()> {
        self.send(HostCommand::DismissEntry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn requests_are_queued_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let surface = ChannelSurface::new(tx);

        surface.present_widget_configuration(4, 12).await.unwrap();
        surface.open_air().await.unwrap();

        assert_eq!(
            rx.recv().await,
            Some(HostCommand::PresentWidgetConfiguration {
                widget_id: 4,
                request_code: 12
            })
        );
        assert_eq!(rx.recv().await, Some(HostCommand::OpenAir));
    }

    #[tokio::test]
    async fn closed_channel_is_reported() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let surface = ChannelSurface::new(tx);

        let err = surface.dismiss_entry().await.unwrap_err();

        assert!(err.downcast_ref::<SurfaceError>().is_some());
    }
}
