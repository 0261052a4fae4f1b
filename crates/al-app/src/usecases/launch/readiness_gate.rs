//! Storage readiness gate.
//!
//! Requests that need storage either run immediately (storage ready) or are
//! parked in a single pending slot and replayed by [`StorageReadinessGate::mark_ready`].
//!
//! The readiness flag and the pending slot live behind one mutex. Deciding
//! "run or defer", running the request, and the `mark_ready` flip-and-drain
//! all happen while that mutex is held, so a request can never be parked
//! after readiness fired, and never runs twice.

use std::fmt;
use std::future::Future;

use al_core::ReadinessState;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use super::pending_slot::PendingTaskSlot;

/// Result of [`StorageReadinessGate::run_or_defer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission<R> {
    /// Storage was ready; the request ran and produced `R`.
    Executed(R),
    /// Storage was not ready; the request now occupies the pending slot.
    Deferred,
}

impl<R> Admission<R> {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Admission::Deferred)
    }
}

/// Result of [`StorageReadinessGate::mark_ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyTransition<R> {
    /// First signal. Carries the result of the replayed request, if one was pending.
    Opened(Option<R>),
    /// The gate was already open; nothing happened.
    AlreadyReady,
}

struct GateInner<T> {
    state: ReadinessState,
    pending: PendingTaskSlot<T>,
}

pub struct StorageReadinessGate<T> {
    inner: Mutex<GateInner<T>>,
    published: watch::Sender<ReadinessState>,
}

impl<T> Default for StorageReadinessGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StorageReadinessGate<T> {
    pub fn new() -> Self {
        let (published, _) = watch::channel(ReadinessState::NotReady);
        Self {
            inner: Mutex::new(GateInner {
                state: ReadinessState::NotReady,
                pending: PendingTaskSlot::new(),
            }),
            published,
        }
    }

    /// Readiness as last published.
    ///
    /// Turns `true` once `mark_ready` has replayed the pending request.
    pub fn is_ready(&self) -> bool {
        self.published.borrow().is_ready()
    }

    /// Resolve once the gate has opened and any pending request has been replayed.
    pub async fn wait_ready(&self) {
        if self.is_ready() {
            return;
        }
        let mut rx = self.published.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|state| state.is_ready()).await;
    }
}

impl<T: fmt::Debug> StorageReadinessGate<T> {
    /// Run `task` now if storage is ready, otherwise park it.
    ///
    /// A parked task replaces whatever was parked before.
    pub async fn run_or_defer<F, Fut, R>(&self, task: T, run: F) -> Admission<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        let mut inner = self.inner.lock().await;

        if inner.state.is_ready() {
            return Admission::Executed(run(task).await);
        }

        debug!(?task, "Storage not ready, deferring task");
        if let Some(superseded) = inner.pending.replace(task) {
            warn!(?superseded, "Pending task superseded before storage became ready");
        }
        Admission::Deferred
    }

    /// Open the gate and replay the pending task, if any.
    ///
    /// Only the first call has an effect; later calls return
    /// [`ReadyTransition::AlreadyReady`].
    pub async fn mark_ready<F, Fut, R>(&self, run: F) -> ReadyTransition<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        let mut inner = self.inner.lock().await;

        if inner.state.is_ready() {
            debug!("Storage readiness signalled again, ignoring");
            return ReadyTransition::AlreadyReady;
        }

        inner.state = ReadinessState::Ready;
        let report = match inner.pending.take() {
            Some(task) => {
                info!(?task, "Storage ready, replaying pending task");
                Some(run(task).await)
            }
            None => {
                info!("Storage ready, nothing pending");
                None
            }
        };

        self.published.send_replace(ReadinessState::Ready);

        ReadyTransition::Opened(report)
    }
}

impl<T: Clone> StorageReadinessGate<T> {
    /// Copy of the parked task.
    pub async fn pending(&self) -> Option<T> {
        self.inner.lock().await.pending.peek().cloned()
    }
}
