use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::{Condvar, Mutex};

use crate::foundation::{
    config::WorkerPoolOpts,
    error::{CanvasError, CanvasResult},
};

#[derive(Debug, Default)]
struct InFlight {
    count: Mutex<usize>,
    idle: Condvar,
}

struct InFlightGuard(Arc<InFlight>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut count = self.0.count.lock();
        *count -= 1;
        if *count == 0 {
            self.0.idle.notify_all();
        }
    }
}

/// Worker threads that run asset decode, encode and fetch jobs.
///
/// The pool is created by the host and shared (via `Arc`) by every bridge that should use it.
///
/// The thread count is fixed. A blocking job holds its thread: a slow URL fetch can take up to
/// [`FetchOpts::timeout_ms`](crate::FetchOpts::timeout_ms), and once every thread is busy, later
/// path or bytes loads queue behind it. Give fetches their own pool and bridge when that matters.
///
/// Dropping the last reference lets queued jobs finish, then stops the threads; call
/// [`WorkerPool::shutdown`] to block until that point.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    in_flight: Arc<InFlight>,
}

impl WorkerPool {
    /// Build the worker threads.
    pub fn new(opts: &WorkerPoolOpts) -> CanvasResult<Self> {
        let pool = build_thread_pool(opts)?;
        tracing::debug!(threads = pool.current_num_threads(), "asset worker pool started");
        Ok(Self {
            pool,
            in_flight: Arc::new(InFlight::default()),
        })
    }

    /// Queue `job`. It runs on a worker thread, never the caller's.
    pub fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        *self.in_flight.count.lock() += 1;
        let guard = InFlightGuard(Arc::clone(&self.in_flight));
        self.pool.spawn(move || {
            let _guard = guard;
            job();
        });
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Jobs queued or running.
    pub fn in_flight(&self) -> usize {
        *self.in_flight.count.lock()
    }

    /// Block until no job is queued or running.
    pub fn wait_idle(&self) {
        let mut count = self.in_flight.count.lock();
        while *count > 0 {
            self.in_flight.idle.wait(&mut count);
        }
    }

    /// Like [`WorkerPool::wait_idle`] with a deadline. Returns `false` on timeout.
    pub fn wait_idle_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut count = self.in_flight.count.lock();
        while *count > 0 {
            if self.in_flight.idle.wait_until(&mut count, deadline).timed_out() {
                return *count == 0;
            }
        }
        true
    }

    /// Drain queued work and stop the threads.
    pub fn shutdown(self) {
        self.wait_idle();
        tracing::debug!("asset worker pool stopped");
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("threads", &self.threads())
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

fn build_thread_pool(opts: &WorkerPoolOpts) -> CanvasResult<rayon::ThreadPool> {
    if let Some(n) = opts.threads
        && n == 0
    {
        return Err(CanvasError::pool("'threads' must be >= 1 when set"));
    }
    let prefix = opts.thread_name.clone();
    let mut builder = rayon::ThreadPoolBuilder::new()
        .thread_name(move |i| format!("{prefix}-{i}"))
        .panic_handler(|payload| {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%msg, "asset job panicked");
        });
    if let Some(n) = opts.threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CanvasError::pool(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/pool.rs"]
mod tests;
