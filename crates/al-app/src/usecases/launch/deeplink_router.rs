use std::sync::{Arc, Mutex, MutexGuard};

use al_core::ports::DeeplinkNavigator;
use al_core::Deeplink;
use tracing::{debug, info, warn};

use super::pending_slot::PendingTaskSlot;

/// What happened to a routed deeplink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Buffered,
}

struct RouterInner {
    navigator: Option<Arc<dyn DeeplinkNavigator>>,
    pending: PendingTaskSlot<Deeplink>,
}

/// Hands deeplinks to the live navigator, or keeps the latest one until a
/// navigator shows up.
pub struct DeeplinkRouter {
    inner: Mutex<RouterInner>,
}

impl Default for DeeplinkRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeeplinkRouter {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RouterInner {
                navigator: None,
                pending: PendingTaskSlot::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RouterInner> {
        // Poisoning only means a navigator panicked elsewhere; the slot is still consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn handle(&self, deeplink: Deeplink) -> Delivery {
        let navigator = {
            let mut inner = self.lock();
            match inner.navigator.clone() {
                Some(navigator) => navigator,
                None => {
                    info!(%deeplink, "No active navigator, buffering deeplink");
                    if let Some(dropped) = inner.pending.replace(deeplink) {
                        warn!(%dropped, "Buffered deeplink replaced before delivery");
                    }
                    return Delivery::Buffered;
                }
            }
        };

        debug!(%deeplink, "Delivering deeplink to active navigator");
        navigator.handle(deeplink);
        Delivery::Delivered
    }

    /// Install `navigator` as the live one and hand back the buffered deeplink.
    ///
    /// The returned deeplink is removed from the buffer; the navigator is
    /// responsible for acting on it as part of its activation.
    pub fn register_navigator(&self, navigator: Arc<dyn DeeplinkNavigator>) -> Option<Deeplink> {
        let mut inner = self.lock();
        inner.navigator = Some(navigator);
        inner.pending.take()
    }

    pub fn pending(&self) -> Option<Deeplink> {
        self.lock().pending.peek().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        handled: Mutex<Vec<Deeplink>>,
    }

    impl DeeplinkNavigator for RecordingNavigator {
        fn handle(&self, deeplink: Deeplink) {
            self.handled.lock().unwrap().push(deeplink);
        }
    }

    #[test]
    fn delivers_directly_to_registered_navigator() {
        let router = DeeplinkRouter::new();
        let navigator = Arc::new(RecordingNavigator::default());
        assert_eq!(router.register_navigator(navigator.clone()), None);

        let delivery = router.handle(Deeplink::new("ton://transfer/abc"));

        assert_eq!(delivery, Delivery::Delivered);
        assert_eq!(
            navigator.handled.lock().unwrap().as_slice(),
            [Deeplink::new("ton://transfer/abc")]
        );
        assert_eq!(router.pending(), None);
    }

    #[test]
    fn buffers_latest_deeplink_without_navigator() {
        let router = DeeplinkRouter::new();

        assert_eq!(router.handle(Deeplink::new("first")), Delivery::Buffered);
        assert_eq!(router.handle(Deeplink::new("second")), Delivery::Buffered);

        assert_eq!(router.pending(), Some(Deeplink::new("second")));
    }

    #[test]
    fn registration_hands_over_buffer_exactly_once() {
        let router = DeeplinkRouter::new();
        router.handle(Deeplink::new("tc://connect"));

        let navigator = Arc::new(RecordingNavigator::default());
        let buffered = router.register_navigator(navigator.clone());

        assert_eq!(buffered, Some(Deeplink::new("tc://connect")));
        assert_eq!(router.pending(), None);
        assert_eq!(router.handle(Deeplink::new("x")), Delivery::Delivered);
        assert_eq!(navigator.handled.lock().unwrap().len(), 1);
    }
}
