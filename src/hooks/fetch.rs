//! # Fetch Hook
//!
//! Async data loading with `loading` / `error` / `data` state, re-run whenever the dependency
//! value changes.
//!
//! ```text
//! idle ──mount──▶ loading ──Ok──▶ success ─┐
//!                   ▲     └─Err─▶ error  ──┤
//!                   └── deps change / refetch
//! ```
//!
//! Each fetch runs in its own Tokio task. A task only writes its result if it is still the
//! latest fetch and the hook has not been dropped; the check happens under the state channel's
//! lock, so a superseded or orphaned result can never land. The underlying future is not
//! aborted; its result is discarded.
//!
//! ```rust
//! use facility_desk::hooks::{FetchHook, View};
//!
//! #[tokio::main]
//! async fn main() {
//!     let hook = FetchHook::new(
//!         |unit: String| async move { Ok::<_, String>(format!("profile for {unit}")) },
//!         "4B".to_string(),
//!     );
//!
//!     let mut updates = hook.subscribe();
//!     let state = updates.wait_for(|s| !s.loading).await.unwrap().clone();
//!     assert!(matches!(state.view(), View::Render(text) if text == "profile for 4B"));
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

type FetchFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;
type Fetcher<D, T, E> = Arc<dyn Fn(D) -> FetchFuture<T, E> + Send + Sync>;

/// Snapshot of a hook. After settling at most one of `data` / `error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T, E> {
    pub data: Option<T>,
    pub error: Option<E>,
    pub loading: bool,
}

impl<T, E> Default for FetchState<T, E> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }
}

/// What a consumer should show for a given state.
#[derive(Debug, PartialEq)]
pub enum View<'a, T, E> {
    /// Nothing fetched yet.
    Idle,
    Spinner,
    Failure(&'a E),
    Render(&'a T),
}

impl<T, E> FetchState<T, E> {
    /// Data wins over everything, so a refetch keeps showing the previous data.
    pub fn view(&self) -> View<'_, T, E> {
        match (&self.data, &self.error) {
            (Some(data), _) => View::Render(data),
            (None, Some(error)) => View::Failure(error),
            (None, None) if self.loading => View::Spinner,
            (None, None) => View::Idle,
        }
    }
}

/// A running fetch hook. Dropping it suppresses every later state write.
pub struct FetchHook<D, T, E> {
    fetcher: Fetcher<D, T, E>,
    deps: D,
    state: Arc<watch::Sender<FetchState<T, E>>>,
    generation: Arc<AtomicU64>,
}

impl<D, T, E> FetchHook<D, T, E>
where
    D: Clone + PartialEq + Send + 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Mounts the hook and starts the first fetch with `deps`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new<F, Fut>(fetcher: F, deps: D) -> Self
    where
        F: Fn(D) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (state, _) = watch::channel(FetchState::default());
        let hook = Self {
            fetcher: Arc::new(move |deps| Box::pin(fetcher(deps)) as FetchFuture<T, E>),
            deps,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
        };
        hook.start();
        hook
    }

    pub fn state(&self) -> FetchState<T, E> {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T, E>> {
        self.state.subscribe()
    }

    pub fn deps(&self) -> &D {
        &self.deps
    }

    /// Stores new dependencies and refetches if they differ from the current ones. Returns
    /// whether a fetch was started.
    pub fn set_deps(&mut self, deps: D) -> bool {
        if deps == self.deps {
            return false;
        }
        self.deps = deps;
        self.start();
        true
    }

    /// Fetches again with the current dependencies.
    pub fn refetch(&self) {
        self.start();
    }

    fn start(&self) {
        let mut current = 0;
        self.state.send_modify(|s| {
            current = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            s.loading = true;
            s.error = None;
        });
        debug!(generation = current, "Fetch started");

        let fetch = (self.fetcher)(self.deps.clone());
        let state = self.state.clone();
        let generation = self.generation.clone();

        tokio::spawn(async move {
            let result = fetch.await;
            let applied = state.send_if_modified(|s| {
                if generation.load(Ordering::SeqCst) != current {
                    return false;
                }
                match result {
                    Ok(data) => {
                        s.data = Some(data);
                        s.error = None;
                    }
                    Err(error) => {
                        s.error = Some(error);
                        s.data = None;
                    }
                }
                s.loading = false;
                true
            });
            if !applied {
                debug!(generation = current, "Discarded stale fetch result");
            }
        });
    }
}

impl<D, T, E> Drop for FetchHook<D, T, E> {
    fn drop(&mut self) {
        // Bump under the lock so an in-flight task sees a stale generation
        let generation = &self.generation;
        self.state.send_if_modified(|_| {
            generation.fetch_add(1, Ordering::SeqCst);
            false
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_prefers_data_then_error_then_loading() {
        let mut state = FetchState::<u32, String>::default();
        assert_eq!(state.view(), View::Idle);

        state.loading = true;
        assert_eq!(state.view(), View::Spinner);

        state.error = Some("boom".into());
        assert_eq!(state.view(), View::Failure(&"boom".to_string()));

        state.data = Some(7);
        assert_eq!(state.view(), View::Render(&7));
    }
}
