//! Port interfaces for the launcher
//!
//! Ports define the contract between the launch use cases and the host,
//! storage and widget collaborators. Implementations live in `al-infra`
//! (file-backed state) and `al-platform` (host/OS adapters).

pub mod app_dirs;
pub mod base_settings;
pub mod deeplink;
pub mod errors;
pub mod global_storage;
pub mod launch_flag;
pub mod secure_storage;
pub mod storage_init;
pub mod surface;
pub mod widgets;

pub use app_dirs::AppDirsPort;
pub use base_settings::BaseSettingsPort;
pub use deeplink::{DeeplinkNavigator, DeeplinkParserPort};
pub use errors::{AppDirsError, StorageInitError};
pub use global_storage::{GlobalStoragePort, PersistPolicy, PRICE_HISTORY_KEY};
pub use launch_flag::LaunchFlagPort;
pub use secure_storage::SecureStorageCachePort;
pub use storage_init::StorageInitPort;
pub use surface::SurfacePort;
pub use widgets::{WidgetCatalogPort, INVALID_WIDGET_ID};
