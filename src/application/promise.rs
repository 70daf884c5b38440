/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Deferred result of a single background operation
//!
//! A [`Promise`] starts its operation as soon as it is created and lets callers
//! attach continuations without blocking:
//!
//! - [`Promise::then`] runs only when the operation succeeded
//! - [`Promise::cache`] runs only when the operation failed
//! - [`Promise::on_settled`] always runs, with the whole outcome
//!
//! The outcome is published once through a `watch` channel. Observers that
//! subscribe after completion still see the stored outcome, each registration
//! is invoked at most once, and nothing runs before the operation completes.
//!
//! # Example
//! ```ignore
//! let promise = client.promise(move |client| async move { account.create(&client).await });
//!
//! promise.then(|resource| info!("created {}", resource.id()));
//! promise.cache(|err| error!("creation failed: {err}"));
//! ```

use crate::error::AppError;
use crate::presentation::resource::Resource;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Final outcome of a promise; the error is shared between every observer
pub type Outcome<T> = Result<T, Arc<AppError>>;

/// Promise whose operation produces a [`Resource`]
pub type ResourcePromise = Promise<Resource>;

/// Handle to the eventual outcome of a spawned operation
///
/// The runtime entered at construction is kept, so continuations can be
/// registered from any thread afterwards, including threads outside the
/// runtime. Operations cannot be cancelled once started.
#[derive(Debug, Clone)]
pub struct Promise<T> {
    state: watch::Receiver<Option<Outcome<T>>>,
    handle: Handle,
}

impl<T> Promise<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Spawns `operation` on the runtime and returns immediately
    ///
    /// # Arguments
    /// * `operation` - Future producing the result of the operation
    ///
    /// # Panics
    /// When called outside the context of a tokio runtime
    pub fn new<F>(operation: F) -> Self
    where
        F: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        Self::new_in(&Handle::current(), operation)
    }

    /// Spawns `operation` on the runtime behind `handle`
    ///
    /// Usable from threads that have not entered the runtime.
    pub fn new_in<F>(handle: &Handle, operation: F) -> Self
    where
        F: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        let (sender, state) = watch::channel(None);
        handle.spawn(async move {
            let outcome = operation.await.map_err(Arc::new);
            publish(&sender, outcome);
        });
        Self {
            state,
            handle: handle.clone(),
        }
    }

    /// Runs a blocking closure on the blocking thread pool and returns immediately
    ///
    /// # Arguments
    /// * `operation` - Closure performing the blocking call
    ///
    /// # Panics
    /// When called outside the context of a tokio runtime
    pub fn from_blocking<F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<T, AppError> + Send + 'static,
    {
        let handle = Handle::current();
        let (sender, state) = watch::channel(None);
        handle.spawn_blocking(move || {
            let outcome = operation().map_err(Arc::new);
            publish(&sender, outcome);
        });
        Self { state, handle }
    }

    /// Creates a promise that is already settled with `outcome`
    ///
    /// Continuations registered on it run on the runtime behind `handle`.
    pub fn settled(handle: &Handle, outcome: Result<T, AppError>) -> Self {
        let (_, state) = watch::channel(Some(outcome.map_err(Arc::new)));
        Self {
            state,
            handle: handle.clone(),
        }
    }

    /// Registers a success continuation
    ///
    /// The continuation runs on its own task once the operation completed, and
    /// only if it completed without error.
    ///
    /// # Returns
    /// Handle of the observer task; dropping it detaches the observer
    pub fn then<F>(&self, on_success: F) -> JoinHandle<()>
    where
        F: FnOnce(T) + Send + 'static,
    {
        self.on_settled(move |outcome| {
            if let Ok(value) = outcome {
                on_success(value);
            }
        })
    }

    /// Registers a failure continuation
    ///
    /// The continuation runs on its own task once the operation completed, and
    /// only if it failed.
    ///
    /// # Returns
    /// Handle of the observer task; dropping it detaches the observer
    #[doc(alias = "catch")]
    pub fn cache<F>(&self, on_failure: F) -> JoinHandle<()>
    where
        F: FnOnce(Arc<AppError>) + Send + 'static,
    {
        self.on_settled(move |outcome| {
            if let Err(err) = outcome {
                on_failure(err);
            }
        })
    }

    /// Registers a continuation receiving the whole outcome
    ///
    /// Exactly one call happens per registration, after completion. Prefer this
    /// over a `then`/`cache` pair when the caller must proceed deterministically
    /// on either branch.
    pub fn on_settled<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Outcome<T>) + Send + 'static,
    {
        let promise = self.clone();
        self.handle.spawn(async move {
            let outcome = promise.wait().await;
            callback(outcome);
        })
    }

    /// Waits for completion and returns a copy of the outcome
    pub async fn wait(&self) -> Outcome<T> {
        let mut state = self.state.clone();
        match state.wait_for(Option::is_some).await {
            Ok(settled) => match settled.as_ref() {
                Some(outcome) => outcome.clone(),
                None => Err(interrupted()),
            },
            Err(_) => {
                warn!("Promise producer ended without publishing an outcome");
                Err(interrupted())
            }
        }
    }

    /// Returns `true` once the outcome is available
    pub fn is_settled(&self) -> bool {
        self.state.borrow().is_some()
    }
}

fn publish<T>(sender: &watch::Sender<Option<Outcome<T>>>, outcome: Outcome<T>) {
    debug!(
        "Promise settled with {}",
        if outcome.is_ok() { "success" } else { "failure" }
    );
    sender.send_replace(Some(outcome));
}

fn interrupted() -> Arc<AppError> {
    Arc::new(AppError::Interrupted(
        "operation ended without producing a result".to_string(),
    ))
}
