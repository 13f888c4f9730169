//! Sequenced, cancellable fetches.
//!
//! Every fetch started through a [`FetchCoordinator`] gets a monotonically
//! increasing sequence number. Starting a fetch aborts the one in flight,
//! and a result whose sequence is no longer the latest is dropped, so a slow
//! earlier response can never overwrite a newer one. A failed fetch keeps
//! the previous data visible next to the error.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::{AbortHandle, JoinHandle};

use crate::error::StoreError;

/// What a view shows: the last good data, plus the latest error, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
    /// Sequence of the fetch that last settled this state; 0 before any.
    pub settled: u64,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            settled: 0,
        }
    }
}

impl<T> LoadState<T> {
    /// Data from an earlier fetch is shown next to a newer error.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.data.is_some() && self.error.is_some()
    }
}

/// How a fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// The fetch failed; previous data was kept.
    Failed,
    /// A newer fetch had started; the result was dropped.
    Stale,
    /// Aborted by a newer fetch before it resolved.
    Cancelled,
}

struct Shared<T> {
    latest: AtomicU64,
    state: Mutex<LoadState<T>>,
    in_flight: Mutex<Option<AbortHandle>>,
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T> Shared<T> {
    fn settle(&self, sequence: u64, result: Result<T, StoreError>) -> FetchOutcome {
        let mut state = lock(&self.state);
        if sequence != self.latest.load(Ordering::SeqCst) || sequence <= state.settled {
            tracing::warn!(sequence, "discarding stale fetch result");
            return FetchOutcome::Stale;
        }
        state.loading = false;
        state.settled = sequence;
        match result {
            Ok(data) => {
                state.data = Some(data);
                state.error = None;
                FetchOutcome::Applied
            }
            Err(error) => {
                tracing::warn!(sequence, %error, "fetch failed, keeping previous data");
                state.error = Some(error.to_string());
                FetchOutcome::Failed
            }
        }
    }
}

/// Handle to one started fetch.
#[derive(Debug)]
pub struct FetchHandle {
    pub sequence: u64,
    handle: JoinHandle<FetchOutcome>,
}

impl FetchHandle {
    /// Wait for the fetch to end.
    pub async fn outcome(self) -> FetchOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(error) if error.is_cancelled() => FetchOutcome::Cancelled,
            Err(error) => {
                tracing::warn!(sequence = self.sequence, %error, "fetch task panicked");
                FetchOutcome::Failed
            }
        }
    }
}

/// Runs fetches for one view and keeps its [`LoadState`].
pub struct FetchCoordinator<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Default for FetchCoordinator<T> {
    fn default() -> Self {
        Self {
            shared: Arc::new(Shared {
                latest: AtomicU64::new(0),
                state: Mutex::new(LoadState::default()),
                in_flight: Mutex::new(None),
            }),
        }
    }
}

impl<T> FetchCoordinator<T>
where
    T: Clone + Send + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `fetch` on a new task, aborting the fetch in flight.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start<F>(&self, fetch: F) -> FetchHandle
    where
        F: Future<Output = Result<T, StoreError>> + Send + 'static,
    {
        let sequence = self.shared.latest.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = lock(&self.shared.in_flight).take() {
            previous.abort();
            tracing::debug!(sequence, "aborted previous fetch");
        }
        lock(&self.shared.state).loading = true;

        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let result = fetch.await;
            shared.settle(sequence, result)
        });
        *lock(&self.shared.in_flight) = Some(handle.abort_handle());
        tracing::debug!(sequence, "started fetch");

        FetchHandle { sequence, handle }
    }

    /// Copy of the current view state.
    #[must_use]
    pub fn state(&self) -> LoadState<T> {
        lock(&self.shared.state).clone()
    }

    #[must_use]
    pub fn latest_sequence(&self) -> u64 {
        self.shared.latest.load(Ordering::SeqCst)
    }
}
