//! Bounded fan-out/fan-in over a batch of URLs
//!
//! Each URL becomes its own task; a semaphore caps how many fetch at once.
//! The call returns after every task has finished, with results placed at the
//! index of the URL that produced them.

use crate::fetcher::{FetchError, FetchResult, Fetcher};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinError;

/// Default number of concurrent fetches per batch
pub const DEFAULT_WORKERS: usize = 10;

/// Fixed-size pool of fetch workers
#[derive(Debug, Clone)]
pub struct FetchPool {
    fetcher: Fetcher,
    workers: usize,
}

impl FetchPool {
    /// Creates a pool running at most `workers` fetches at a time
    ///
    /// A `workers` value of zero is treated as one.
    pub fn new(fetcher: Fetcher, workers: usize) -> Self {
        Self {
            fetcher,
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Fetches every URL and returns the results in input order
    ///
    /// - Output length equals input length; `result[i]` belongs to `urls[i]`
    /// - One failing unit never cancels its siblings
    /// - A unit that panics yields a [`FetchError::WorkerPanicked`] at its index
    pub async fn fetch_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<FetchResult> {
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut handles = Vec::with_capacity(urls.len());

        for url in urls {
            let url = url.as_ref().to_string();
            let fetcher = self.fetcher.clone();
            let semaphore = Arc::clone(&semaphore);

            handles.push(tokio::spawn(async move {
                // The semaphore is never closed, so acquiring cannot fail
                let _permit = semaphore.acquire_owned().await.ok();
                fetcher.fetch(&url).await
            }));
        }

        tracing::debug!(
            "Dispatched {} fetches over {} workers",
            handles.len(),
            self.workers
        );

        let mut results = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            let result = join_outcome(urls[index].as_ref(), handle.await);
            results.push(result);
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        tracing::info!(
            "Fetched {} URLs ({} succeeded, {} failed)",
            results.len(),
            results.len() - failed,
            failed
        );

        results
    }
}

/// Turns a finished worker into its result; a worker that panicked or was
/// aborted becomes a [`FetchError::WorkerPanicked`] failure for `url`
fn join_outcome(url: &str, joined: Result<FetchResult, JoinError>) -> FetchResult {
    match joined {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Fetch worker for {} failed: {}", url, e);
            FetchResult::failure(
                url,
                FetchError::WorkerPanicked {
                    url: url.to_string(),
                },
            )
        }
    }
}
