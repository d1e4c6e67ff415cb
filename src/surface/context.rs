use std::{
    cell::RefCell,
    collections::BTreeSet,
    fmt,
    rc::{Rc, Weak},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use crate::{
    caps::registry::Capability,
    ext::{Extension, ExtensionObject, name::ExtensionName, vend},
    foundation::{
        config::SurfaceOpts,
        core::Token,
        error::{CanvasError, CanvasResult},
    },
    gl::backend::{GlBackend, GlError},
    surface::caps::SurfaceCaps,
};

/// Opaque identity of a surface, stable for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value, suitable for handing across a host boundary.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Thread-safe view of whether a surface is still alive.
///
/// Asset operations bound to a surface check this before running and fail once the host has
/// torn the surface down.
#[derive(Clone, Debug)]
pub struct SurfaceLiveness {
    id: SurfaceId,
    alive: Arc<AtomicBool>,
}

impl SurfaceLiveness {
    /// Surface this flag belongs to.
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// `false` once the surface was destroyed.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

#[derive(Debug, Default)]
struct SurfaceState {
    enabled: BTreeSet<ExtensionName>,
    enabled_tokens: BTreeSet<Token>,
    draw_buffers: Vec<Token>,
}

pub(crate) struct SurfaceShared {
    id: SurfaceId,
    caps: SurfaceCaps,
    gl: RefCell<Box<dyn GlBackend>>,
    state: RefCell<SurfaceState>,
    alive: Arc<AtomicBool>,
}

impl SurfaceShared {
    #[tracing::instrument(skip(self), fields(surface = %self.id))]
    pub(crate) fn draw_buffers(&self, buffers: &[Token]) {
        let mut gl = self.gl.borrow_mut();
        gl.draw_buffers(buffers);
        if !self.driver_applied(&mut **gl, buffers) {
            // rejected: the driver kept its previous list, and so do we
            tracing::debug!(count = buffers.len(), "draw buffers rejected by driver");
            return;
        }
        let mut state = self.state.borrow_mut();
        state.draw_buffers.clear();
        state.draw_buffers.extend_from_slice(buffers);
        tracing::debug!(count = buffers.len(), "draw buffers configured");
    }

    /// Whether the driver's `DRAW_BUFFERi` slots now hold `buffers` followed by `NONE`.
    fn driver_applied(&self, gl: &mut dyn GlBackend, buffers: &[Token]) -> bool {
        let slots = self.caps.max_draw_buffers().max(0) as usize;
        buffers.len() <= slots
            && (0..slots).all(|i| {
                let want = buffers.get(i).copied().unwrap_or(Token::NONE);
                Capability::draw_buffer(i as u32)
                    .is_some_and(|pname| gl.get_integer(pname.token()) as u32 == want.get())
            })
    }

    pub(crate) fn get_parameter(&self, pname: Token) -> i32 {
        self.gl.borrow_mut().get_integer(pname)
    }
}

/// Weak link from an extension object back to the surface that vended it.
#[derive(Clone)]
pub(crate) struct SurfaceLink(Weak<SurfaceShared>);

impl SurfaceLink {
    pub(crate) fn upgrade(&self) -> CanvasResult<Rc<SurfaceShared>> {
        self.0.upgrade().ok_or(CanvasError::SurfaceDestroyed)
    }
}

impl fmt::Debug for SurfaceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.upgrade() {
            Some(shared) => write!(f, "SurfaceLink({})", shared.id),
            None => f.write_str("SurfaceLink(destroyed)"),
        }
    }
}

/// A live GPU rendering context and the extension state layered on top of it.
///
/// The surface is bound to the thread that owns the native context: it is neither `Send` nor
/// `Sync`, and neither are the extension objects that call back into it. Dropping the surface
/// (or calling [`GpuSurface::destroy`]) invalidates every extension object it vended and flips
/// its [`SurfaceLiveness`] flag.
pub struct GpuSurface {
    shared: Rc<SurfaceShared>,
}

impl GpuSurface {
    /// Wrap a native context. Capabilities are detected here, once.
    #[tracing::instrument(skip(gl), fields(platform = ?opts.platform))]
    pub fn new(opts: SurfaceOpts, mut gl: Box<dyn GlBackend>) -> Self {
        let caps = SurfaceCaps::detect(opts.platform, gl.as_mut());
        let mut state = SurfaceState::default();
        state.draw_buffers.push(
            Capability::GL_COLOR_ATTACHMENT0_EXT.token(),
        );
        let id = SurfaceId::next();
        tracing::debug!(surface = %id, "surface created");
        Self {
            shared: Rc::new(SurfaceShared {
                id,
                caps,
                gl: RefCell::new(gl),
                state: RefCell::new(state),
                alive: Arc::new(AtomicBool::new(true)),
            }),
        }
    }

    /// Convenience for `new` with a backend value.
    pub fn with_backend(opts: SurfaceOpts, gl: impl GlBackend + 'static) -> Self {
        Self::new(opts, Box::new(gl))
    }

    /// Surface identity.
    pub fn id(&self) -> SurfaceId {
        self.shared.id
    }

    /// Capability snapshot taken at construction.
    pub fn caps(&self) -> &SurfaceCaps {
        &self.shared.caps
    }

    /// `getExtension(name)`: the extension object, or `None` when the device does not support it.
    ///
    /// Unknown names are treated like unsupported ones.
    #[tracing::instrument(skip(self), fields(surface = %self.shared.id))]
    pub fn get_extension(&self, name: &str) -> Option<ExtensionObject> {
        let ext = ExtensionName::parse(name)?;
        self.vend(ext)
    }

    /// Typed variant of [`GpuSurface::get_extension`].
    pub fn extension<E: Extension>(&self) -> Option<E> {
        self.vend(E::NAME).and_then(E::from_object)
    }

    fn vend(&self, ext: ExtensionName) -> Option<ExtensionObject> {
        if !self.shared.caps.supports(ext) {
            tracing::debug!(extension = %ext, "extension unsupported");
            return None;
        }
        let object = vend(ext, SurfaceLink(Rc::downgrade(&self.shared)));
        let mut state = self.shared.state.borrow_mut();
        if state.enabled.insert(ext) {
            tracing::debug!(extension = %ext, "extension enabled");
        }
        state.enabled_tokens.extend(object.tokens());
        Some(object)
    }

    /// `getSupportedExtensions()`: names this surface would vend.
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        self.shared.caps.supported().map(ExtensionName::as_str).collect()
    }

    /// Extensions vended at least once.
    pub fn enabled_extensions(&self) -> Vec<ExtensionName> {
        self.shared.state.borrow().enabled.iter().copied().collect()
    }

    /// Union of the tokens of every vended extension object.
    pub fn enabled_tokens(&self) -> BTreeSet<Token> {
        self.shared.state.borrow().enabled_tokens.clone()
    }

    /// `configureDrawBuffers`: forward `buffers` to the driver in order, with no retry.
    ///
    /// Driver rejections are reported through [`GpuSurface::get_error`], as in GL.
    pub fn draw_buffers(&self, buffers: &[Token]) {
        self.shared.draw_buffers(buffers);
    }

    /// Last draw-buffer list forwarded to the driver.
    pub fn draw_buffer_config(&self) -> Vec<Token> {
        self.shared.state.borrow().draw_buffers.clone()
    }

    /// Number of entries in the current draw-buffer list that are not `GL_NONE`.
    pub fn active_draw_targets(&self) -> usize {
        self.shared
            .state
            .borrow()
            .draw_buffers
            .iter()
            .filter(|t| **t != Token::NONE)
            .count()
    }

    /// Cached `MAX_DRAW_BUFFERS`.
    pub fn max_draw_buffers(&self) -> i32 {
        self.shared.caps.max_draw_buffers()
    }

    /// Cached `MAX_COLOR_ATTACHMENTS`.
    pub fn max_color_attachments(&self) -> i32 {
        self.shared.caps.max_color_attachments()
    }

    /// Integer `getParameter` forwarded to the driver.
    pub fn get_parameter(&self, pname: Token) -> i32 {
        self.shared.get_parameter(pname)
    }

    /// Driver error query; clears the recorded error.
    pub fn get_error(&self) -> GlError {
        self.shared.gl.borrow_mut().get_error()
    }

    /// Liveness flag to hand to asset bridges and other threads.
    pub fn liveness(&self) -> SurfaceLiveness {
        SurfaceLiveness {
            id: self.shared.id,
            alive: Arc::clone(&self.shared.alive),
        }
    }

    /// Tear the surface down. Equivalent to dropping it.
    pub fn destroy(self) {}
}

impl Drop for GpuSurface {
    fn drop(&mut self) {
        self.shared.alive.store(false, Ordering::Release);
        tracing::debug!(surface = %self.shared.id, "surface destroyed");
    }
}

impl fmt::Debug for GpuSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GpuSurface")
            .field("id", &self.shared.id)
            .field("caps", &self.shared.caps)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/context.rs"]
mod tests;
