use std::{collections::HashMap, fmt, path::PathBuf, sync::Arc};

use image::{Rgba, RgbaImage};

use crate::foundation::{
    core::Size,
    error::{CanvasError, CanvasResult},
};

/// Already-decoded RGBA8 pixels handed over by the host.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    /// Wrap tightly packed RGBA8 rows.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> CanvasResult<Self> {
        let size = Size::new(width, height)?;
        if rgba8.len() != size.rgba8_len() {
            return Err(CanvasError::validation(format!(
                "bitmap {width}x{height} needs {} bytes, got {}",
                size.rgba8_len(),
                rgba8.len()
            )));
        }
        let image = RgbaImage::from_raw(width, height, rgba8)
            .ok_or_else(|| CanvasError::validation("bitmap buffer does not match its size"))?;
        Ok(Self { image })
    }

    /// Wrap an `image` buffer.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Borrow the pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the pixels.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "Bitmap({w}x{h})")
    }
}

/// Something the host can paint, looked up by resource id.
pub trait Drawable: Send + Sync {
    /// The backing bitmap when the drawable is nothing more than one.
    fn as_bitmap(&self) -> Option<Bitmap> {
        None
    }

    /// Natural size, `None` for drawables that only fill whatever bounds they get.
    fn intrinsic_size(&self) -> Option<Size>;

    /// Paint into `canvas`, which is transparent and sized to [`Drawable::intrinsic_size`].
    fn draw(&self, canvas: &mut RgbaImage) -> CanvasResult<()>;
}

impl Drawable for Bitmap {
    fn as_bitmap(&self) -> Option<Bitmap> {
        Some(self.clone())
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let (w, h) = self.dimensions();
        Size::new(w, h).ok()
    }

    fn draw(&self, canvas: &mut RgbaImage) -> CanvasResult<()> {
        image::imageops::overlay(canvas, &self.image, 0, 0);
        Ok(())
    }
}

/// Flat color fill with an optional natural size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorDrawable {
    /// Straight-alpha RGBA.
    pub rgba: [u8; 4],
    /// Natural size.
    pub size: Option<Size>,
}

impl Drawable for ColorDrawable {
    fn intrinsic_size(&self) -> Option<Size> {
        self.size
    }

    fn draw(&self, canvas: &mut RgbaImage) -> CanvasResult<()> {
        for px in canvas.pixels_mut() {
            *px = Rgba(self.rgba);
        }
        Ok(())
    }
}

/// Resolves host resource ids to drawables.
pub trait ResourceResolver: Send + Sync {
    /// Look up `id`.
    fn resolve(&self, id: u32) -> CanvasResult<Arc<dyn Drawable>>;
}

/// In-memory [`ResourceResolver`].
#[derive(Clone, Default)]
pub struct ResourceTable {
    entries: HashMap<u32, Arc<dyn Drawable>>,
}

impl ResourceTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `drawable` under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: u32, drawable: impl Drawable + 'static) -> &mut Self {
        self.entries.insert(id, Arc::new(drawable));
        self
    }
}

impl ResourceResolver for ResourceTable {
    fn resolve(&self, id: u32) -> CanvasResult<Arc<dyn Drawable>> {
        self.entries
            .get(&id)
            .cloned()
            .ok_or_else(|| CanvasError::resource(format!("resource {id:#x} not found")))
    }
}

impl fmt::Debug for ResourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&u32> = self.entries.keys().collect();
        ids.sort();
        f.debug_struct("ResourceTable").field("ids", &ids).finish()
    }
}

/// Paint a drawable into fresh pixels.
///
/// Bitmap-backed drawables hand their pixels over directly; everything else is drawn onto a
/// transparent RGBA8 canvas of its intrinsic size.
pub(crate) fn rasterize(drawable: &dyn Drawable) -> CanvasResult<RgbaImage> {
    if let Some(bitmap) = drawable.as_bitmap() {
        return Ok(bitmap.into_image());
    }
    let size = drawable
        .intrinsic_size()
        .ok_or_else(|| CanvasError::resource("drawable has no intrinsic size"))?;
    let mut canvas = RgbaImage::new(size.width, size.height);
    drawable.draw(&mut canvas)?;
    Ok(canvas)
}

/// Where an asset load takes its pixels from.
#[derive(Clone, Debug)]
pub enum AssetSource {
    /// Encoded file on disk.
    Path(PathBuf),
    /// Encoded bytes owned by the request.
    Bytes(Vec<u8>),
    /// Encoded bytes shared with the host without copying.
    Buffer(Arc<[u8]>),
    /// `http(s)://` or `file://` URL of an encoded image.
    Url(String),
    /// Decoded pixels.
    Bitmap(Bitmap),
    /// Host resource id, resolved through a [`ResourceResolver`].
    Resource(u32),
}

impl AssetSource {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Path(_) => "path",
            Self::Bytes(_) => "bytes",
            Self::Buffer(_) => "buffer",
            Self::Url(_) => "url",
            Self::Bitmap(_) => "bitmap",
            Self::Resource(_) => "resource",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
