//! In-process cache in front of secure storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use al_core::ports::SecureStorageCachePort;
use tracing::debug;

/// Secrets the host keeps decrypted in memory. The launcher only ever empties it.
#[derive(Default)]
pub struct InMemorySecureStorageCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemorySecureStorageCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SecureStorageCachePort for InMemorySecureStorageCache {
    fn clear_cache(&self) {
        let mut entries = self.lock();
        debug!(entries = entries.len(), "Clearing secure storage cache");
        entries.clear();
    }
}
