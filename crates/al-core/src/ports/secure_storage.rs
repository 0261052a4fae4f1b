/// Secure storage cache control.
///
/// Only cache invalidation is consumed by the launcher; reading and writing
/// secrets stays with the storage subsystem.
pub trait SecureStorageCachePort: Send + Sync {
    fn clear_cache(&self);
}
