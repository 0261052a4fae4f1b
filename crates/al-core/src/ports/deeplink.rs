use crate::launch::{Deeplink, LaunchIntent};

/// A live navigator able to act on a deeplink.
///
/// On activation a navigator must pull any buffered deeplink from the router.
pub trait DeeplinkNavigator: Send + Sync {
    fn handle(&self, deeplink: Deeplink);
}

/// Turns a raw launch intent into a deeplink, if it carries one.
pub trait DeeplinkParserPort: Send + Sync {
    fn parse(&self, intent: &LaunchIntent) -> Option<Deeplink>;
}
