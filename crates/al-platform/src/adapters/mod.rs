//! # Host adapters
//!
//! - `surface` - Surface requests forwarded to the host runtime loop
//! - `deeplink` - Intent parsing and channel-backed navigation
//! - `widgets` - In-memory widget catalog

pub mod deeplink;
pub mod surface;
pub mod widgets;

pub use deeplink::{ChannelNavigator, IntentDeeplinkParser};
pub use surface::{ChannelSurface, SurfaceError};
pub use widgets::InMemoryWidgetCatalog;
