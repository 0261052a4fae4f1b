use al_core::ports::{DeeplinkNavigator, DeeplinkParserPort};
use al_core::{Deeplink, LaunchIntent};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use crate::ipc::HostCommand;

/// Extracts the deeplink from an intent's data URI.
///
/// With an empty scheme list every non-blank URI is accepted.
#[derive(Debug, Default, Clone)]
pub struct IntentDeeplinkParser {
    schemes: Vec<String>,
}

impl IntentDeeplinkParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schemes<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schemes: schemes
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
        }
    }

    fn accepts(&self, uri: &str) -> bool {
        if self.schemes.is_empty() {
            return true;
        }
        match uri.split_once(':') {
            Some((scheme, _)) => self
                .schemes
                .iter()
                .any(|s| s.eq_ignore_ascii_case(scheme)),
            None => false,
        }
    }
}

impl DeeplinkParserPort for IntentDeeplinkParser {
    fn parse(&self, intent: &LaunchIntent) -> Option<Deeplink> {
        let uri = intent.data.as_deref()?.trim();
        if uri.is_empty() {
            return None;
        }
        if !self.accepts(uri) {
            debug!(uri, "Ignoring intent data with unsupported scheme");
            return None;
        }
        Some(Deeplink::new(uri))
    }
}

/// Navigator that forwards deeplinks to the host runtime loop.
///
/// A full queue defers the send to a task instead of dropping the deeplink,
/// so `handle` must run inside a Tokio runtime.
pub struct ChannelNavigator {
    cmd_tx: mpsc::Sender<HostCommand>,
}

impl ChannelNavigator {
    pub fn new(cmd_tx: mpsc::Sender<HostCommand>) -> Self {
        Self { cmd_tx }
    }
}

impl DeeplinkNavigator for ChannelNavigator {
    fn handle(&self, deeplink: Deeplink) {
        match self.cmd_tx.try_send(HostCommand::Navigate(deeplink)) {
            Ok(()) => {}
            Err(TrySendError::Full(command)) => {
                debug!("Host queue full, forwarding deeplink once it drains");
                let cmd_tx = self.cmd_tx.clone();
                tokio::spawn(async move {
                    if cmd_tx.send(command).await.is_err() {
                        warn!("Host loop gone before deeplink could be forwarded");
                    }
                });
            }
            Err(TrySendError::Closed(_)) => {
                warn!("Host loop gone, deeplink not forwarded");
            }
        }
    }
}
