use std::{fs::File, io::BufReader, path::Path, time::Duration};

use serde::Deserialize;

use crate::foundation::{
    core::Platform,
    error::{CanvasError, CanvasResult},
};

/// Asset worker pool sizing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkerPoolOpts {
    /// Worker count. `None` uses one thread per available core.
    pub threads: Option<usize>,
    /// Prefix for worker thread names; workers are named `{prefix}-{index}`.
    pub thread_name: String,
}

impl Default for WorkerPoolOpts {
    fn default() -> Self {
        Self {
            threads: None,
            thread_name: "canvas-asset".to_string(),
        }
    }
}

/// URL loading.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchOpts {
    /// Whole-request timeout in milliseconds.
    ///
    /// A fetch occupies one worker thread for up to this long; with every thread fetching, other
    /// queued loads wait behind them.
    pub timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl FetchOpts {
    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for FetchOpts {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            user_agent: concat!("canvas-bridge/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Surface construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SurfaceOpts {
    /// Host OS and version, used for extension gating.
    pub platform: Platform,
}

/// Aggregate configuration, usually loaded from a JSON file shipped with the host app.
///
/// Missing sections and fields fall back to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Worker pool used by the asset bridge.
    pub pool: WorkerPoolOpts,
    /// URL loading.
    pub fetch: FetchOpts,
    /// GPU surface construction.
    pub surface: SurfaceOpts,
}

impl BridgeConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CanvasResult<Self> {
        let cfg: BridgeConfig = serde_json::from_reader(r)
            .map_err(|e| CanvasError::config(format!("parse bridge config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CanvasError::config(format!("open bridge config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values no component can run with.
    pub fn validate(&self) -> CanvasResult<()> {
        if self.pool.threads == Some(0) {
            return Err(CanvasError::config("pool.threads must be >= 1"));
        }
        if self.pool.thread_name.is_empty() {
            return Err(CanvasError::config("pool.thread_name must not be empty"));
        }
        if self.fetch.timeout_ms == 0 {
            return Err(CanvasError::config("fetch.timeout_ms must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
