use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::error::LoadError;
use crate::request::FetchRequest;
use crate::sink::StateSink;
use crate::state::FetchState;
use crate::transport::Transport;

/// Fetches a target through a [`Transport`] and publishes the lifecycle of
/// each fetch to a [`StateSink`].
///
/// Every call to [`load`](Self::load) publishes `Pending` and then one
/// terminal state. When a load starts for a different target than the one
/// currently in flight, the older load is superseded: its transport call
/// still completes, but its result is dropped instead of published.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() {
/// use loader::{FetchState, HttpTransport, ResourceLoader};
///
/// #[derive(serde::Deserialize)]
/// struct User {
///     name: String,
/// }
///
/// let transport = HttpTransport::new("http://127.0.0.1:8000/api");
/// let loader: ResourceLoader<_, _, User> =
///     ResourceLoader::new(transport, |state: FetchState<User>| {
///         if let Some(user) = state.payload() {
///             println!("loaded {}", user.name);
///         }
///     });
/// loader.load("/users/42").await;
/// # }
/// ```
pub struct ResourceLoader<Tr, S, T> {
    transport: Tr,
    sink: S,
    tracker: Mutex<Tracker>,
    _payload: PhantomData<fn() -> T>,
}

/// Bookkeeping for which target is current.
#[derive(Debug, Default)]
struct Tracker {
    /// Bumped whenever a load starts for a target other than `target`.
    generation: u64,
    /// Target of the loads in flight for `generation`, cleared once they
    /// have all settled.
    target: Option<String>,
    in_flight: usize,
    /// Most recently requested target, kept for refetching.
    last_target: Option<String>,
}

impl<Tr, S, T> ResourceLoader<Tr, S, T> {
    pub fn new(transport: Tr, sink: S) -> Self {
        Self {
            transport,
            sink,
            tracker: Mutex::new(Tracker::default()),
            _payload: PhantomData,
        }
    }

    pub fn transport(&self) -> &Tr {
        &self.transport
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Target of the loads currently in flight, if any.
    pub fn current_target(&self) -> Option<String> {
        self.tracker().target.clone()
    }

    fn tracker(&self) -> MutexGuard<'_, Tracker> {
        // The tracker holds no invariants a panicking sink could break
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<Tr, S, T> ResourceLoader<Tr, S, T>
where
    Tr: Transport,
    S: StateSink<T>,
    T: DeserializeOwned,
{
    /// Fetch `target` and publish `Pending` followed by its outcome.
    ///
    /// Never fails: transport, status and decoding errors all end up as
    /// `Failure` in the sink.
    #[tracing::instrument(skip_all, fields(request = target))]
    pub async fn load(&self, target: &str) {
        let ticket = self.begin(target);

        let result = match FetchRequest::new(target) {
            Ok(request) => self.fetch(&request).await,
            Err(e) => Err(e.into()),
        };

        let state = match result {
            Ok(payload) => FetchState::Success { payload },
            Err(e) => {
                tracing::warn!("load failed: {e}");
                FetchState::Failure {
                    message: e.to_string(),
                }
            }
        };
        ticket.settle(state);
    }

    /// Load the most recently requested target again.
    ///
    /// Returns false without publishing anything if nothing has been loaded
    /// yet.
    pub async fn refetch(&self) -> bool {
        let Some(target) = self.tracker().last_target.clone() else {
            return false;
        };
        self.load(&target).await;
        true
    }

    /// Run [`load`](Self::load) as a tokio task.
    pub fn spawn_load(
        self: &Arc<Self>,
        target: impl Into<String>,
    ) -> JoinHandle<()>
    where
        Tr: Send + Sync + 'static,
        S: Send + Sync + 'static,
        T: Send + 'static,
    {
        let loader = Arc::clone(self);
        let target = target.into();
        tokio::spawn(async move { loader.load(&target).await })
    }

    async fn fetch(&self, request: &FetchRequest) -> Result<T, LoadError> {
        let response = self.transport.fetch(request.target()).await?;
        if !response.ok() {
            return Err(LoadError::HttpStatus {
                status: response.status,
            });
        }
        Ok(response.json()?)
    }

    /// Register a new load and publish `Pending` for it.
    fn begin(&self, target: &str) -> Ticket<'_, Tr, S, T> {
        // Declared before the guard so that on unwind the guard is released
        // before the ticket's drop takes the lock again.
        let ticket;
        let mut tracker = self.tracker();
        if tracker.target.as_deref() != Some(target) {
            if tracker.in_flight > 0 {
                tracing::debug!(
                    superseded = ?tracker.target,
                    "superseding in-flight load"
                );
            }
            tracker.generation += 1;
            tracker.target = Some(target.to_string());
            tracker.in_flight = 0;
        }
        tracker.in_flight += 1;
        tracker.last_target = Some(target.to_string());
        ticket = Ticket {
            loader: self,
            generation: tracker.generation,
        };
        // A panicking sink still releases the claim through the ticket
        self.sink.publish(FetchState::Pending);
        drop(tracker);
        ticket
    }
}

/// One in-flight load. Dropping it releases the load's claim on the current
/// target, whether or not it settled.
struct Ticket<'a, Tr, S, T> {
    loader: &'a ResourceLoader<Tr, S, T>,
    generation: u64,
}

impl<Tr, S, T> Ticket<'_, Tr, S, T>
where
    S: StateSink<T>,
{
    /// Publish the terminal state unless a newer target took over.
    fn settle(self, state: FetchState<T>) {
        let tracker = self.loader.tracker();
        if tracker.generation == self.generation {
            self.loader.sink.publish(state);
        } else {
            tracing::debug!(
                current = ?tracker.target,
                "dropping superseded result"
            );
        }
    }
}

impl<Tr, S, T> Drop for Ticket<'_, Tr, S, T> {
    fn drop(&mut self) {
        let mut tracker = self.loader.tracker();
        if tracker.generation != self.generation {
            return;
        }
        tracker.in_flight = tracker.in_flight.saturating_sub(1);
        if tracker.in_flight == 0 {
            tracker.target = None;
        }
    }
}
