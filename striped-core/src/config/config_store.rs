//! Generic snapshot store with change notification.
//!
//! `ConfigStore<T>` holds the current value as an immutable `Arc<T>`
//! snapshot. Readers clone the `Arc` and keep a consistent view for as long
//! as they need it; writers publish a whole new snapshot, so nobody ever
//! observes a half-updated value. A watch-based notification lets
//! consumers react to changes without polling.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, watch};

/// A shared, versioned configuration store with change notification.
///
/// Subscribers receive a [`ConfigWatcher`] that can `await` the next
/// change.
pub struct ConfigStore<T> {
    inner: Arc<ConfigStoreInner<T>>,
}

struct ConfigStoreInner<T> {
    data: RwLock<Arc<T>>,
    version: AtomicU64,
    version_tx: watch::Sender<u64>,
}

/// Receives notifications when a [`ConfigStore`] is updated.
///
/// Call [`changed()`](ConfigWatcher::changed) to wait for the next update.
pub struct ConfigWatcher {
    version_rx: watch::Receiver<u64>,
}

// -- ConfigStore --------------------------------------------------------

impl<T> ConfigStore<T> {
    /// Create a new `ConfigStore` with the given initial value.
    pub fn new(initial: T) -> Self {
        let (version_tx, _) = watch::channel(0u64);
        Self {
            inner: Arc::new(ConfigStoreInner {
                data: RwLock::new(Arc::new(initial)),
                version: AtomicU64::new(0),
                version_tx,
            }),
        }
    }

    /// Publish a new snapshot and notify all watchers.
    ///
    /// Returns the new version number.
    pub async fn update(&self, value: T) -> u64 {
        let snapshot = Arc::new(value);
        let mut guard = self.inner.data.write().await;
        *guard = snapshot;
        let new_version = self.inner.version.fetch_add(1, Ordering::Relaxed) + 1;
        // Drop the write guard before notifying so subscribers can
        // immediately acquire a read lock.
        drop(guard);
        let _ = self.inner.version_tx.send(new_version);
        new_version
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<T> {
        Arc::clone(&*self.inner.data.read().await)
    }

    /// Number of updates published so far.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Relaxed)
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> ConfigWatcher {
        ConfigWatcher {
            version_rx: self.inner.version_tx.subscribe(),
        }
    }
}

impl<T> Clone for ConfigStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// -- ConfigWatcher ------------------------------------------------------

impl ConfigWatcher {
    /// Wait until the config store is updated.
    ///
    /// Returns `Ok(())` when a new version is available, or `Err` if the
    /// [`ConfigStore`] has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.version_rx.changed().await
    }

    /// The most recently published version number.
    pub fn version(&self) -> u64 {
        *self.version_rx.borrow()
    }
}
