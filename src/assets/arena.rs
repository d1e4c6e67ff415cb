use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use image::RgbaImage;
use parking_lot::{Mutex, RwLock};
use slotmap::SlotMap;

use crate::{
    assets::bitmap::unpremultiply_rgba8_in_place,
    foundation::error::{CanvasError, CanvasResult},
};

slotmap::new_key_type! {
    struct AssetKey;
}

/// Opaque reference to one pixel buffer in an [`AssetArena`].
///
/// Handles carry a generation, so a handle kept after [`AssetArena::release`] is detected as
/// stale instead of aliasing a newer asset in the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    key: AssetKey,
    arena: u64,
}

/// Decoded pixels owned by the arena, plus the last recorded error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageAsset {
    width: u32,
    height: u32,
    /// Row-major, tightly packed RGBA8.
    rgba8: Vec<u8>,
    premultiplied: bool,
    error: Option<String>,
}

impl ImageAsset {
    /// Width in pixels, 0 before the first successful load.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels, 0 before the first successful load.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes.
    pub fn rgba8(&self) -> &[u8] {
        &self.rgba8
    }

    /// `true` when color channels are premultiplied by alpha.
    pub fn is_premultiplied(&self) -> bool {
        self.premultiplied
    }

    /// `true` once pixels have been loaded.
    pub fn has_pixels(&self) -> bool {
        !self.rgba8.is_empty()
    }

    /// Last recorded error.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Copy the pixels into an `image` buffer.
    pub fn to_image(&self) -> CanvasResult<RgbaImage> {
        if !self.has_pixels() {
            return Err(CanvasError::encode("asset has no pixels"));
        }
        RgbaImage::from_raw(self.width, self.height, self.rgba8.clone())
            .ok_or_else(|| CanvasError::validation("asset pixel buffer does not match its size"))
    }

    /// Copy the pixels with straight alpha, undoing premultiplication if present.
    ///
    /// Encoders expect straight alpha; this is what gets written to disk.
    pub fn to_straight_image(&self) -> CanvasResult<RgbaImage> {
        let mut image = self.to_image()?;
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut image);
        }
        Ok(image)
    }

    /// Replace the content and clear any prior error.
    pub(crate) fn set_pixels(&mut self, image: RgbaImage, premultiplied: bool) {
        self.width = image.width();
        self.height = image.height();
        self.rgba8 = image.into_raw();
        self.premultiplied = premultiplied;
        self.error = None;
    }

    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }
}

pub(crate) type AssetCell = Arc<Mutex<ImageAsset>>;

/// Owner of every live pixel buffer.
///
/// Cloning the arena shares it; worker threads see the same slots. Each asset has its own lock,
/// held only while pixels are copied in or out, never across decode or encode.
#[derive(Clone, Debug)]
pub struct AssetArena {
    id: u64,
    slots: Arc<RwLock<SlotMap<AssetKey, AssetCell>>>,
}

impl AssetArena {
    /// Empty arena.
    pub fn new() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT.fetch_add(1, Ordering::Relaxed),
            slots: Arc::new(RwLock::new(SlotMap::with_key())),
        }
    }

    /// Allocate an empty asset.
    pub fn create(&self) -> AssetHandle {
        self.insert(ImageAsset::default())
    }

    pub(crate) fn insert(&self, asset: ImageAsset) -> AssetHandle {
        let key = self.slots.write().insert(Arc::new(Mutex::new(asset)));
        tracing::debug!(?key, "asset created");
        AssetHandle { key, arena: self.id }
    }

    /// Free the asset. Work already running on it finishes against the detached buffer.
    pub fn release(&self, handle: AssetHandle) -> CanvasResult<()> {
        self.check_owner(handle)?;
        match self.slots.write().remove(handle.key) {
            Some(_) => {
                tracing::debug!(key = ?handle.key, "asset released");
                Ok(())
            }
            None => Err(CanvasError::StaleHandle),
        }
    }

    /// `true` while `handle` refers to a live asset of this arena.
    pub fn contains(&self, handle: AssetHandle) -> bool {
        handle.arena == self.id && self.slots.read().contains_key(handle.key)
    }

    /// Live asset count.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// `true` when no asset is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the asset's current state.
    pub fn snapshot(&self, handle: AssetHandle) -> CanvasResult<ImageAsset> {
        Ok(self.cell(handle)?.lock().clone())
    }

    /// Record an error string against the asset.
    pub fn set_error(&self, handle: AssetHandle, msg: impl Into<String>) -> CanvasResult<()> {
        self.cell(handle)?.lock().set_error(msg);
        Ok(())
    }

    /// Last error recorded against the asset.
    pub fn error(&self, handle: AssetHandle) -> CanvasResult<Option<String>> {
        Ok(self.cell(handle)?.lock().error.clone())
    }

    pub(crate) fn cell(&self, handle: AssetHandle) -> CanvasResult<AssetCell> {
        self.check_owner(handle)?;
        self.slots
            .read()
            .get(handle.key)
            .cloned()
            .ok_or(CanvasError::StaleHandle)
    }

    fn check_owner(&self, handle: AssetHandle) -> CanvasResult<()> {
        if handle.arena == self.id {
            Ok(())
        } else {
            Err(CanvasError::StaleHandle)
        }
    }
}

impl Default for AssetArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/arena.rs"]
mod tests;
