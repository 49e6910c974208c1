//! Async fetch harness with loading and error states.
//!
//! Wraps an arbitrary zero-argument producer and tracks it through an
//! idle → loading → success/error lifecycle for a presentation layer to
//! bind against. An artificial delay and a configurable synthetic failure
//! rate are built in for exercising loading and error views without a
//! flaky backend.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a wrapped fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    Idle,
    Loading,
    Success,
    Error,
}

/// Failure taxonomy for a fetch.
///
/// Display strings are the exact messages surfaced through
/// [`AsyncData::error`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// Injected per the configured error rate, independent of the producer.
    #[error("Failed to fetch data. Please try again.")]
    Synthetic,
    /// A failure raised by the producer, message passed through verbatim.
    #[error("{0}")]
    Producer(String),
    /// A failure with no usable message.
    #[error("An unexpected error occurred")]
    Unlabeled,
}

impl FetchError {
    /// Build a producer failure, falling back to the generic variant when
    /// no message is available.
    pub fn from_message(message: Option<String>) -> Self {
        match message {
            Some(msg) if !msg.is_empty() => FetchError::Producer(msg),
            _ => FetchError::Unlabeled,
        }
    }
}

/// Construction-time options for [`AsyncData`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Run the producer once at construction without an explicit trigger.
    pub immediate: bool,
    /// Artificial latency before the producer runs, simulating a network
    /// round trip.
    pub delay: Duration,
    /// Probability in [0, 1] that an invocation fails synthetically,
    /// regardless of the producer's real outcome.
    pub error_rate: f64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            immediate: true,
            delay: Duration::from_millis(800),
            error_rate: 0.0,
        }
    }
}

#[derive(Debug)]
struct Snapshot<T> {
    data: Option<T>,
    state: LoadingState,
    error: Option<String>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            state: LoadingState::Idle,
            error: None,
        }
    }
}

#[derive(Debug)]
struct Shared<T> {
    snapshot: Mutex<Snapshot<T>>,
    /// Monotonic token per invocation; completions carrying a stale token
    /// are discarded so overlapping executes cannot clobber a newer result.
    generation: AtomicU64,
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self {
            snapshot: Mutex::new(Snapshot::default()),
            generation: AtomicU64::new(0),
        }
    }
}

/// A producer wrapped with loading-state tracking and error capture.
///
/// Cloning is cheap and clones observe the same state, so one instance can
/// be shared between the view reading it and the action handler refetching.
pub struct AsyncData<T, F> {
    producer: Arc<F>,
    options: FetchOptions,
    shared: Arc<Shared<T>>,
}

impl<T, F> Clone for AsyncData<T, F> {
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
            options: self.options.clone(),
            shared: self.shared.clone(),
        }
    }
}

impl<T, F, Fut> AsyncData<T, F>
where
    T: Clone + Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
{
    /// Wrap a producer. With `options.immediate` set, one execution is
    /// spawned onto the current runtime right away.
    pub fn new(producer: F, options: FetchOptions) -> Self {
        let data = Self {
            producer: Arc::new(producer),
            options,
            shared: Arc::new(Shared::default()),
        };

        if data.options.immediate {
            let task = data.clone();
            tokio::spawn(async move {
                task.execute().await;
            });
        }

        data
    }

    /// Run the producer once: enter `Loading`, wait the configured delay,
    /// then settle into `Success` or `Error`.
    ///
    /// All failures — synthetic, producer-raised, or unlabeled — are
    /// captured into [`error`](Self::error); this never propagates one.
    /// A failure leaves the previous successful data in place.
    pub async fn execute(&self) {
        let token = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut snapshot = self.shared.snapshot.lock().unwrap();
            snapshot.state = LoadingState::Loading;
            snapshot.error = None;
        }

        tokio::time::sleep(self.options.delay).await;

        let result = if self.options.error_rate > 0.0
            && rand::random::<f64>() < self.options.error_rate
        {
            Err(FetchError::Synthetic)
        } else {
            (self.producer.as_ref())().await
        };

        let mut snapshot = self.shared.snapshot.lock().unwrap();
        if self.shared.generation.load(Ordering::SeqCst) != token {
            tracing::debug!("discarding stale fetch completion (token {})", token);
            return;
        }

        match result {
            Ok(value) => {
                snapshot.data = Some(value);
                snapshot.state = LoadingState::Success;
            }
            Err(err) => {
                snapshot.error = Some(err.to_string());
                snapshot.state = LoadingState::Error;
            }
        }
    }

    /// Named alias for [`execute`](Self::execute), for manual-retry UI
    /// actions.
    pub async fn refetch(&self) {
        self.execute().await;
    }

    /// Last successful result, if any. Survives later failures.
    pub fn data(&self) -> Option<T> {
        self.shared.snapshot.lock().unwrap().data.clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadingState {
        self.shared.snapshot.lock().unwrap().state
    }

    /// Message of the last failure, cleared when a new execution starts.
    pub fn error(&self) -> Option<String> {
        self.shared.snapshot.lock().unwrap().error.clone()
    }
}
