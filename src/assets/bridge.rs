use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
};

use image::RgbaImage;
use parking_lot::{Condvar, Mutex};

use crate::{
    assets::{
        arena::{AssetArena, AssetCell, AssetHandle, ImageAsset},
        bitmap::{ImageBitmapOptions, create_image_bitmap},
        codec::{self, Fetcher, OutputFormat},
        pool::WorkerPool,
        source::{AssetSource, Bitmap, ResourceResolver, rasterize},
    },
    foundation::{
        config::{BridgeConfig, FetchOpts},
        error::{CanvasError, CanvasResult},
    },
    surface::context::SurfaceLiveness,
};

/// Lifecycle of one asynchronous request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpState {
    /// Waiting for a worker.
    Queued,
    /// A worker is executing it.
    Running,
    /// Finished; the callback received `true`.
    CompletedSuccess,
    /// Finished; the callback received `false`.
    CompletedError,
}

impl OpState {
    /// `true` for both completed states.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::CompletedSuccess | Self::CompletedError)
    }
}

#[derive(Debug)]
struct OpShared {
    handle: AssetHandle,
    kind: &'static str,
    state: Mutex<(OpState, Option<String>)>,
    done: Condvar,
}

/// Caller-side view of an asynchronous request.
///
/// The state turns terminal only after the callback has returned.
#[derive(Clone, Debug)]
pub struct PendingOp {
    shared: Arc<OpShared>,
}

impl PendingOp {
    fn queued(handle: AssetHandle, kind: &'static str) -> Self {
        Self {
            shared: Arc::new(OpShared {
                handle,
                kind,
                state: Mutex::new((OpState::Queued, None)),
                done: Condvar::new(),
            }),
        }
    }

    fn set_running(&self) {
        self.shared.state.lock().0 = OpState::Running;
    }

    fn finish(&self, result: &CanvasResult<()>) {
        let mut state = self.shared.state.lock();
        *state = match result {
            Ok(()) => (OpState::CompletedSuccess, None),
            Err(e) => (OpState::CompletedError, Some(format!("{e:#}"))),
        };
        self.shared.done.notify_all();
    }

    /// Asset the request targets.
    pub fn handle(&self) -> AssetHandle {
        self.shared.handle
    }

    /// Request kind, e.g. `"path"` or `"save"`.
    pub fn kind(&self) -> &'static str {
        self.shared.kind
    }

    /// Current state.
    pub fn state(&self) -> OpState {
        self.shared.state.lock().0
    }

    /// Failure detail once completed with an error.
    pub fn error(&self) -> Option<String> {
        self.shared.state.lock().1.clone()
    }

    /// Block until completion; returns the value passed to the callback.
    pub fn wait(&self) -> bool {
        let mut state = self.shared.state.lock();
        while !state.0.is_terminal() {
            self.shared.done.wait(&mut state);
        }
        state.0 == OpState::CompletedSuccess
    }

    /// Like [`PendingOp::wait`] with a deadline; `None` on timeout.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<bool> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock();
        while !state.0.is_terminal() {
            if self.shared.done.wait_until(&mut state, deadline).timed_out() {
                break;
            }
        }
        state
            .0
            .is_terminal()
            .then_some(state.0 == OpState::CompletedSuccess)
    }
}

#[derive(Debug)]
enum Op {
    Load(AssetSource),
    Save { path: PathBuf, format: OutputFormat },
}

impl Op {
    fn kind(&self) -> &'static str {
        match self {
            Self::Load(source) => source.kind(),
            Self::Save { .. } => "save",
        }
    }
}

struct BridgeInner {
    arena: AssetArena,
    pool: Arc<WorkerPool>,
    fetcher: Fetcher,
    resources: Option<Arc<dyn ResourceResolver>>,
    surface: Option<SurfaceLiveness>,
}

/// Loads pixels into, and saves pixels out of, arena assets.
///
/// Every operation comes in a blocking form returning [`CanvasResult`] and, for the I/O-bound
/// ones, an `_async` form that queues the same work on the shared [`WorkerPool`] and reports
/// through a callback invoked exactly once, on a worker thread, with `true` on success.
///
/// Any failure is also recorded as the asset's error string; a later successful load clears it.
///
/// Requests against a handle that was released before the job ran complete with `false`.
/// Requests issued concurrently against the same handle are not ordered: the last one to finish
/// determines the pixels and the recorded error.
#[derive(Clone)]
pub struct AssetBridge {
    inner: Arc<BridgeInner>,
}

impl AssetBridge {
    /// Bridge over `arena` that runs async work on `pool`.
    pub fn new(arena: AssetArena, pool: Arc<WorkerPool>) -> Self {
        Self::build(arena, pool, FetchOpts::default(), None, None)
    }

    /// Bridge with its own arena and pool built from `config`.
    pub fn from_config(config: &BridgeConfig) -> CanvasResult<Self> {
        config.validate()?;
        let pool = Arc::new(WorkerPool::new(&config.pool)?);
        Ok(Self::build(
            AssetArena::new(),
            pool,
            config.fetch.clone(),
            None,
            None,
        ))
    }

    fn build(
        arena: AssetArena,
        pool: Arc<WorkerPool>,
        fetch: FetchOpts,
        resources: Option<Arc<dyn ResourceResolver>>,
        surface: Option<SurfaceLiveness>,
    ) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                arena,
                pool,
                fetcher: Fetcher::new(fetch),
                resources,
                surface,
            }),
        }
    }

    fn rebuild(
        &self,
        fetch: Option<FetchOpts>,
        resources: Option<Arc<dyn ResourceResolver>>,
        surface: Option<SurfaceLiveness>,
    ) -> Self {
        let inner = &self.inner;
        Self::build(
            inner.arena.clone(),
            Arc::clone(&inner.pool),
            fetch.unwrap_or_else(|| inner.fetcher_opts()),
            resources.or_else(|| inner.resources.clone()),
            surface.or_else(|| inner.surface.clone()),
        )
    }

    /// Use `opts` for URL loads.
    pub fn with_fetch_opts(self, opts: FetchOpts) -> Self {
        self.rebuild(Some(opts), None, None)
    }

    /// Resolve resource ids through `resolver`.
    pub fn with_resources(self, resolver: Arc<dyn ResourceResolver>) -> Self {
        self.rebuild(None, Some(resolver), None)
    }

    /// Fail every later operation once the surface behind `liveness` is destroyed.
    pub fn bind_surface(self, liveness: SurfaceLiveness) -> Self {
        self.rebuild(None, None, Some(liveness))
    }

    /// Arena holding the assets.
    pub fn arena(&self) -> &AssetArena {
        &self.inner.arena
    }

    /// Worker pool running async requests.
    pub fn pool(&self) -> &Arc<WorkerPool> {
        &self.inner.pool
    }

    /// Allocate an empty asset.
    pub fn create_asset(&self) -> AssetHandle {
        self.inner.arena.create()
    }

    /// Free an asset.
    pub fn release(&self, handle: AssetHandle) -> CanvasResult<()> {
        self.inner.arena.release(handle)
    }

    /// Copy of an asset's pixels and error.
    pub fn asset(&self, handle: AssetHandle) -> CanvasResult<ImageAsset> {
        self.inner.arena.snapshot(handle)
    }

    /// Record an error string against an asset.
    pub fn set_error(&self, handle: AssetHandle, msg: impl Into<String>) -> CanvasResult<()> {
        self.inner.arena.set_error(handle, msg)
    }

    /// Last error recorded against an asset.
    pub fn error(&self, handle: AssetHandle) -> CanvasResult<Option<String>> {
        self.inner.arena.error(handle)
    }

    /// Load from any source, blocking the caller.
    pub fn load(&self, handle: AssetHandle, source: AssetSource) -> CanvasResult<()> {
        self.inner.run(handle, &Op::Load(source))
    }

    /// Take decoded pixels.
    pub fn load_from_bitmap(&self, handle: AssetHandle, bitmap: &Bitmap) -> CanvasResult<()> {
        self.load(handle, AssetSource::Bitmap(bitmap.clone()))
    }

    /// Resolve a host resource and rasterize it if it is not a plain bitmap.
    pub fn load_from_resource(&self, handle: AssetHandle, id: u32) -> CanvasResult<()> {
        self.load(handle, AssetSource::Resource(id))
    }

    /// Decode a file.
    pub fn load_from_path(&self, handle: AssetHandle, path: impl AsRef<Path>) -> CanvasResult<()> {
        self.load(handle, AssetSource::Path(path.as_ref().to_path_buf()))
    }

    /// Decode encoded bytes.
    pub fn load_from_bytes(&self, handle: AssetHandle, bytes: &[u8]) -> CanvasResult<()> {
        self.load(handle, AssetSource::Bytes(bytes.to_vec()))
    }

    /// Decode a shared encoded buffer.
    pub fn load_from_buffer(&self, handle: AssetHandle, buffer: Arc<[u8]>) -> CanvasResult<()> {
        self.load(handle, AssetSource::Buffer(buffer))
    }

    /// Fetch and decode a URL.
    pub fn load_from_url(&self, handle: AssetHandle, url: &str) -> CanvasResult<()> {
        self.load(handle, AssetSource::Url(url.to_string()))
    }

    /// Encode the asset's pixels and write them to `path`.
    pub fn save(
        &self,
        handle: AssetHandle,
        path: impl AsRef<Path>,
        format: OutputFormat,
    ) -> CanvasResult<()> {
        self.inner.run(
            handle,
            &Op::Save {
                path: path.as_ref().to_path_buf(),
                format,
            },
        )
    }

    /// Queue a load from any source.
    pub fn load_async<F>(&self, handle: AssetHandle, source: AssetSource, callback: F) -> PendingOp
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.submit(handle, Op::Load(source), callback)
    }

    /// Async [`AssetBridge::load_from_url`].
    pub fn load_from_url_async<F>(&self, handle: AssetHandle, url: &str, callback: F) -> PendingOp
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.load_async(handle, AssetSource::Url(url.to_string()), callback)
    }

    /// Async [`AssetBridge::load_from_path`].
    pub fn load_from_path_async<F>(
        &self,
        handle: AssetHandle,
        path: impl AsRef<Path>,
        callback: F,
    ) -> PendingOp
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.load_async(
            handle,
            AssetSource::Path(path.as_ref().to_path_buf()),
            callback,
        )
    }

    /// Async [`AssetBridge::load_from_bytes`]; takes ownership of the bytes.
    pub fn load_from_bytes_async<F>(
        &self,
        handle: AssetHandle,
        bytes: Vec<u8>,
        callback: F,
    ) -> PendingOp
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.load_async(handle, AssetSource::Bytes(bytes), callback)
    }

    /// Async [`AssetBridge::load_from_buffer`].
    pub fn load_from_buffer_async<F>(
        &self,
        handle: AssetHandle,
        buffer: Arc<[u8]>,
        callback: F,
    ) -> PendingOp
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.load_async(handle, AssetSource::Buffer(buffer), callback)
    }

    /// Async [`AssetBridge::load_from_bitmap`].
    pub fn load_from_bitmap_async<F>(
        &self,
        handle: AssetHandle,
        bitmap: Bitmap,
        callback: F,
    ) -> PendingOp
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.load_async(handle, AssetSource::Bitmap(bitmap), callback)
    }

    /// Async [`AssetBridge::save`].
    pub fn save_async<F>(
        &self,
        handle: AssetHandle,
        path: impl AsRef<Path>,
        format: OutputFormat,
        callback: F,
    ) -> PendingOp
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.submit(
            handle,
            Op::Save {
                path: path.as_ref().to_path_buf(),
                format,
            },
            callback,
        )
    }

    /// `createImageBitmap`: derive a new asset from an existing one.
    #[tracing::instrument(skip(self, opts))]
    pub fn create_image_bitmap(
        &self,
        handle: AssetHandle,
        opts: &ImageBitmapOptions,
    ) -> CanvasResult<AssetHandle> {
        let (src, premultiplied) = {
            let cell = self.inner.arena.cell(handle)?;
            let asset = cell.lock();
            (asset.to_image()?, asset.is_premultiplied())
        };
        let out = create_image_bitmap(&src, premultiplied, opts)?;
        let mut asset = ImageAsset::default();
        asset.set_pixels(out.image, out.premultiplied);
        Ok(self.inner.arena.insert(asset))
    }

    fn submit<F>(&self, handle: AssetHandle, op: Op, callback: F) -> PendingOp
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let pending = PendingOp::queued(handle, op.kind());
        tracing::debug!(?handle, kind = op.kind(), "asset op queued");

        let inner = Arc::clone(&self.inner);
        let job = pending.clone();
        self.inner.pool.spawn(move || {
            job.set_running();
            let result = inner.run(handle, &op);
            let ok = result.is_ok();
            if catch_unwind(AssertUnwindSafe(|| callback(ok))).is_err() {
                tracing::error!(?handle, "asset completion callback panicked");
            }
            job.finish(&result);
        });
        pending
    }
}

impl std::fmt::Debug for AssetBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetBridge")
            .field("arena", &self.inner.arena)
            .field("pool", &self.inner.pool)
            .field("surface", &self.inner.surface)
            .finish_non_exhaustive()
    }
}

impl BridgeInner {
    fn fetcher_opts(&self) -> FetchOpts {
        self.fetcher.opts().clone()
    }

    #[tracing::instrument(skip(self, op), fields(kind = op.kind()))]
    fn run(&self, handle: AssetHandle, op: &Op) -> CanvasResult<()> {
        let cell = self.inner_cell(handle)?;
        let result = self.check_surface().and_then(|()| match op {
            Op::Load(source) => {
                let image = self.load_pixels(source)?;
                tracing::debug!(width = image.width(), height = image.height(), "asset loaded");
                cell.lock().set_pixels(image, false);
                Ok(())
            }
            Op::Save { path, format } => {
                let image = cell.lock().to_straight_image()?;
                codec::encode_to_path(&image, path, *format)?;
                tracing::debug!(path = %path.display(), %format, "asset saved");
                Ok(())
            }
        });
        if let Err(e) = &result {
            let msg = format!("{e:#}");
            tracing::warn!(error = %msg, "asset op failed");
            cell.lock().set_error(msg);
        }
        result
    }

    fn inner_cell(&self, handle: AssetHandle) -> CanvasResult<AssetCell> {
        self.arena.cell(handle).inspect_err(|_| {
            tracing::warn!(?handle, "asset op on released handle");
        })
    }

    fn check_surface(&self) -> CanvasResult<()> {
        match &self.surface {
            Some(live) if !live.is_alive() => Err(CanvasError::SurfaceDestroyed),
            _ => Ok(()),
        }
    }

    fn load_pixels(&self, source: &AssetSource) -> CanvasResult<RgbaImage> {
        match source {
            AssetSource::Path(path) => codec::decode(&codec::read_path(path)?),
            AssetSource::Bytes(bytes) => codec::decode(bytes),
            AssetSource::Buffer(buffer) => codec::decode(buffer),
            AssetSource::Url(url) => codec::decode(&self.fetcher.fetch(url)?),
            AssetSource::Bitmap(bitmap) => Ok(bitmap.image().clone()),
            AssetSource::Resource(id) => self.load_resource(*id),
        }
    }

    fn load_resource(&self, id: u32) -> CanvasResult<RgbaImage> {
        let resolver = self
            .resources
            .as_ref()
            .ok_or_else(|| CanvasError::resource("no resource resolver configured"))?;
        // Host drawables are foreign code; a panic in them becomes a recorded error.
        catch_unwind(AssertUnwindSafe(|| {
            let drawable = resolver.resolve(id)?;
            rasterize(drawable.as_ref())
        }))
        .unwrap_or_else(|payload| {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(CanvasError::resource(format!(
                "resource {id:#x} failed: {detail}"
            )))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/bridge.rs"]
mod tests;
