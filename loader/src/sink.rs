use std::sync::Arc;

use tokio::sync::watch;

use crate::state::FetchState;

/// Receives every state transition a loader publishes.
///
/// `publish` is called synchronously from the loader while it holds its
/// bookkeeping lock, so implementations must not call back into the same
/// loader.
pub trait StateSink<T> {
    fn publish(&self, state: FetchState<T>);
}

impl<T, F> StateSink<T> for F
where
    F: Fn(FetchState<T>),
{
    fn publish(&self, state: FetchState<T>) {
        self(state)
    }
}

/// A sink backed by a tokio `watch` channel.
///
/// Observers `subscribe()` and await `changed()`; only the latest state is
/// retained. `None` means nothing has been loaded yet.
pub struct WatchSink<T> {
    sender: Arc<watch::Sender<Option<FetchState<T>>>>,
}

impl<T> WatchSink<T> {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<FetchState<T>>> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> Option<FetchState<T>>
    where
        T: Clone,
    {
        self.sender.borrow().clone()
    }
}

impl<T> Default for WatchSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for WatchSink<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> StateSink<T> for WatchSink<T> {
    fn publish(&self, state: FetchState<T>) {
        self.sender.send_replace(Some(state));
    }
}
