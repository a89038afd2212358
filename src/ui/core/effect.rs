use log::{debug, warn};
use std::future::Future;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Runs a background job once per key.
///
/// Launching again with the same key is a no-op. A new key cancels the
/// previous job first. Dropping the guard aborts whatever is still running.
pub struct LaunchedEffect<K> {
    key: Option<K>,
    job: Option<JoinHandle<()>>,
}

impl<K: PartialEq> Default for LaunchedEffect<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> LaunchedEffect<K> {
    pub fn new() -> Self {
        Self { key: None, job: None }
    }

    /// Spawn `future` unless it already ran for `key`. Returns whether it was spawned.
    pub fn launch<F>(&mut self, key: K, future: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.key.as_ref() == Some(&key) {
            return false;
        }

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Effect not launched, no async runtime: {e}");
                return false;
            }
        };

        self.cancel();
        self.job = Some(handle.spawn(future));
        self.key = Some(key);
        debug!("Effect launched");
        true
    }

    pub fn has_run(&self) -> bool {
        self.key.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.job.as_ref().is_some_and(|job| !job.is_finished())
    }

    /// Abort the running job. The key is kept so the effect does not rerun.
    pub fn cancel(&mut self) {
        if let Some(job) = self.job.take() {
            job.abort();
        }
    }
}

impl<K> Drop for LaunchedEffect<K> {
    fn drop(&mut self) {
        if let Some(job) = self.job.take() {
            job.abort();
        }
    }
}
