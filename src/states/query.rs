//! Query State
//!
//! Load state for data fetched from a repository, with manual retry.
//! Previously loaded data is kept while a reload is in flight.

use crate::error::Result;
use std::future::Future;
use std::sync::Arc;

/// Loading state of a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Never fetched
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Last fetch succeeded
    Loaded,
    /// Last fetch failed
    Error(Arc<str>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetched data plus its load state
#[derive(Debug, Default)]
pub struct Query<T> {
    data: T,
    state: LoadState,
    generation: u64,
}

impl<T: Default> Query<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Local edits by the owner after a successful mutation
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn can_retry(&self) -> bool {
        matches!(self.state, LoadState::Error(_))
    }

    // ==================== Transitions ====================

    /// Enter `Loading`; returns the generation the result must carry
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Apply a fetch result. Results of superseded fetches are ignored.
    pub fn settle(&mut self, generation: u64, result: Result<T>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Ignoring superseded fetch result");
            return false;
        }
        match result {
            Ok(data) => {
                self.data = data;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                self.state = LoadState::Error(e.to_string().into());
            }
        }
        true
    }

    /// Fetch through `fetcher` and settle
    pub async fn fetch<F, Fut>(&mut self, fetcher: F) -> &LoadState
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let generation = self.begin();
        let result = fetcher().await;
        self.settle(generation, result);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchSnafu;

    #[tokio::test]
    async fn fetch_moves_to_loaded() {
        let mut query = Query::<Vec<i32>>::new();
        assert_eq!(query.state(), &LoadState::Idle);

        let state = query.fetch(|| async { Ok(vec![1, 2, 3]) }).await;
        assert!(state.is_loaded());
        assert_eq!(query.data(), &vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_data_and_allows_retry() {
        let mut query = Query::<Vec<i32>>::new();
        query.fetch(|| async { Ok(vec![7]) }).await;

        query
            .fetch(|| async { FetchSnafu { message: "timeout" }.fail() })
            .await;
        assert_eq!(query.state().error(), Some("Fetch error: timeout"));
        assert!(query.can_retry());
        assert_eq!(query.data(), &vec![7]);

        query.fetch(|| async { Ok(vec![7, 8]) }).await;
        assert!(!query.can_retry());
        assert_eq!(query.data().len(), 2);
    }

    #[test]
    fn superseded_results_are_ignored() {
        let mut query = Query::<Vec<i32>>::new();
        let first = query.begin();
        let second = query.begin();

        assert!(!query.settle(first, Ok(vec![1])));
        assert!(query.is_loading());
        assert!(query.settle(second, Ok(vec![2])));
        assert_eq!(query.data(), &vec![2]);
    }
}
