pub mod base_settings;
pub mod global_storage;
pub mod launch_flag;
pub mod secure_storage;

pub use base_settings::FileBaseSettings;
pub use global_storage::FileGlobalStorage;
pub use launch_flag::FileLaunchFlagRepository;
pub use secure_storage::InMemorySecureStorageCache;
