//! Screen-bound fetches
//!
//! A [`ScreenScope`] owns the async work started for one mounted screen.
//! Each fetch runs as a spawned task whose result is delivered through a
//! [`ScreenData`] handle. Cancelling or dropping the scope aborts every task
//! it owns, so a screen never receives data after it unmounts.

use app_core::logistics::{FetchError, LogisticsSnapshot, LogisticsSource};
use app_core::domain::Load;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Delivery state of a screen fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Still in flight
    Loading,
    /// Delivered
    Ready(T),
    /// The source failed
    Failed(FetchError),
    /// The owning screen went away first
    Cancelled,
}

impl<T> LoadState<T> {
    /// Whether the fetch is still in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Delivered data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Receiving end of one screen fetch
#[derive(Debug)]
pub struct ScreenData<T> {
    rx: watch::Receiver<LoadState<T>>,
}

impl<T: Clone> ScreenData<T> {
    /// Current state without waiting
    ///
    /// Reports [`LoadState::Cancelled`] once the task is gone without
    /// having delivered.
    pub fn state(&self) -> LoadState<T> {
        let state = self.rx.borrow().clone();
        if state.is_loading() && self.rx.has_changed().is_err() {
            LoadState::Cancelled
        } else {
            state
        }
    }

    /// Wait until the fetch settles
    pub async fn settled(&mut self) -> LoadState<T> {
        loop {
            {
                let state = self.rx.borrow_and_update();
                if !state.is_loading() {
                    return (*state).clone();
                }
            }
            if self.rx.changed().await.is_err() {
                return match &*self.rx.borrow() {
                    LoadState::Loading => LoadState::Cancelled,
                    other => other.clone(),
                };
            }
        }
    }
}

/// Owner of one screen's pending fetches
#[derive(Debug)]
pub struct ScreenScope {
    name: String,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl ScreenScope {
    /// Scope for the screen called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Screen name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tasks still running
    pub fn pending(&self) -> usize {
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.len()
    }

    /// Spawn `fetch` on behalf of this screen
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, F>(&self, fetch: F) -> ScreenData<T>
    where
        T: Send + Sync + 'static,
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let handle = tokio::spawn(async move {
            let state = match fetch.await {
                Ok(data) => LoadState::Ready(data),
                Err(e) => LoadState::Failed(e),
            };
            let _ = tx.send(state);
        });

        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);

        ScreenData { rx }
    }

    /// Fetch the dashboard snapshot
    pub fn fetch_all(&self, source: Arc<dyn LogisticsSource>) -> ScreenData<LogisticsSnapshot> {
        self.spawn(async move { source.fetch_all().await })
    }

    /// Fetch the load board
    pub fn fetch_loads(&self, source: Arc<dyn LogisticsSource>) -> ScreenData<Vec<Load>> {
        self.spawn(async move { source.fetch_loads().await })
    }

    /// Abort every pending fetch
    pub fn cancel(&self) {
        let tasks: Vec<_> = self.tasks.lock().drain(..).collect();
        let aborted = tasks.iter().filter(|task| !task.is_finished()).count();
        for task in tasks {
            task.abort();
        }
        if aborted > 0 {
            tracing::debug!(screen = %self.name, aborted, "cancelled screen fetches");
        }
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::logistics::MockLogistics;
    use std::time::Duration;

    fn source() -> Arc<dyn LogisticsSource> {
        Arc::new(MockLogistics::new(Duration::from_millis(500)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_delivers_after_delay() {
        let scope = ScreenScope::new("home");
        let mut data = scope.fetch_all(source());
        assert!(data.state().is_loading());

        let state = data.settled().await;
        let snapshot = state.data().unwrap();
        assert_eq!(snapshot.drivers.len(), 3);
        assert_eq!(snapshot.trucks.len(), 3);
        assert_eq!(snapshot.trips.len(), 3);
        assert_eq!(snapshot.bids.len(), 2);
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_scope_never_delivers() {
        let scope = ScreenScope::new("trips");
        let mut data = scope.fetch_all(source());

        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(scope);
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(data.settled().await, LoadState::Cancelled);
        assert_eq!(data.state(), LoadState::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_all_tasks() {
        let scope = ScreenScope::new("loads");
        let mut loads = scope.fetch_loads(source());
        let mut all = scope.fetch_all(source());
        assert_eq!(scope.pending(), 2);

        scope.cancel();
        assert_eq!(scope.pending(), 0);
        assert_eq!(loads.settled().await, LoadState::Cancelled);
        assert_eq!(all.settled().await, LoadState::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_delivery_keeps_data() {
        let scope = ScreenScope::new("loads");
        let mut loads = scope.fetch_loads(source());
        assert_eq!(loads.settled().await.data().map(Vec::len), Some(4));

        scope.cancel();
        assert_eq!(loads.state().data().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn test_failures_are_delivered() {
        let scope = ScreenScope::new("home");
        let mut data = scope.spawn(async { Err::<u8, _>(FetchError::Unavailable("offline".to_string())) });

        assert_eq!(
            data.settled().await,
            LoadState::Failed(FetchError::Unavailable("offline".to_string()))
        );
    }
}
