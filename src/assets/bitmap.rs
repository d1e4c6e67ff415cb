use image::{RgbaImage, imageops::FilterType};

use crate::foundation::error::{CanvasError, CanvasResult};

/// Source rectangle in pixels. Parts outside the image are clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SrcRect {
    /// Left edge; may be negative.
    pub x: i64,
    /// Top edge; may be negative.
    pub y: i64,
    /// Width, must be non-zero.
    pub width: u32,
    /// Height, must be non-zero.
    pub height: u32,
}

/// `premultiplyAlpha` option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PremultiplyAlpha {
    /// Keep the source representation.
    #[default]
    Default,
    /// Premultiply color channels by alpha.
    Premultiply,
    /// Keep straight alpha.
    None,
}

/// `resizeQuality` option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeQuality {
    /// Nearest neighbour.
    Pixelated,
    /// Bilinear.
    #[default]
    Low,
    /// Bicubic.
    Medium,
    /// Lanczos.
    High,
}

impl ResizeQuality {
    fn filter(self) -> FilterType {
        match self {
            Self::Pixelated => FilterType::Nearest,
            Self::Low => FilterType::Triangle,
            Self::Medium => FilterType::CatmullRom,
            Self::High => FilterType::Lanczos3,
        }
    }
}

/// `createImageBitmap` options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageBitmapOptions {
    /// Crop applied before everything else.
    pub src_rect: Option<SrcRect>,
    /// Flip rows after cropping.
    pub flip_y: bool,
    /// Alpha representation of the result.
    pub premultiply_alpha: PremultiplyAlpha,
    /// Output width. With only one of width/height set, the other keeps the aspect ratio.
    pub resize_width: Option<u32>,
    /// Output height.
    pub resize_height: Option<u32>,
    /// Filter used when resizing.
    pub resize_quality: ResizeQuality,
}

/// Bitmap pixels plus the alpha representation they ended up in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapPixels {
    /// RGBA8 pixels.
    pub image: RgbaImage,
    /// `true` when color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

/// Apply crop, flip, resize and alpha handling to `src`, in that order.
///
/// `src_premultiplied` describes the input; the output keeps it under
/// [`PremultiplyAlpha::Default`].
pub fn create_image_bitmap(
    src: &RgbaImage,
    src_premultiplied: bool,
    opts: &ImageBitmapOptions,
) -> CanvasResult<BitmapPixels> {
    let (sw, sh) = src.dimensions();
    if sw == 0 || sh == 0 {
        return Err(CanvasError::validation("source image is empty"));
    }

    let mut out = match opts.src_rect {
        Some(rect) => crop(src, rect)?,
        None => src.clone(),
    };

    if opts.flip_y {
        image::imageops::flip_vertical_in_place(&mut out);
    }

    if let Some((w, h)) = resize_target(out.dimensions(), opts)? {
        out = image::imageops::resize(&out, w, h, opts.resize_quality.filter());
    }

    let premultiplied = match opts.premultiply_alpha {
        PremultiplyAlpha::Default => src_premultiplied,
        PremultiplyAlpha::Premultiply => {
            if !src_premultiplied {
                premultiply_rgba8_in_place(&mut out);
            }
            true
        }
        PremultiplyAlpha::None => {
            if src_premultiplied {
                unpremultiply_rgba8_in_place(&mut out);
            }
            false
        }
    };

    Ok(BitmapPixels {
        image: out,
        premultiplied,
    })
}

fn crop(src: &RgbaImage, rect: SrcRect) -> CanvasResult<RgbaImage> {
    if rect.width == 0 || rect.height == 0 {
        return Err(CanvasError::validation("source rectangle must be non-empty"));
    }
    // Pixels outside the source stay transparent.
    let mut out = RgbaImage::new(rect.width, rect.height);
    let (sw, sh) = src.dimensions();
    for y in 0..rect.height {
        let sy = rect.y + i64::from(y);
        if sy < 0 || sy >= i64::from(sh) {
            continue;
        }
        for x in 0..rect.width {
            let sx = rect.x + i64::from(x);
            if sx < 0 || sx >= i64::from(sw) {
                continue;
            }
            out.put_pixel(x, y, *src.get_pixel(sx as u32, sy as u32));
        }
    }
    Ok(out)
}

fn resize_target(
    (w, h): (u32, u32),
    opts: &ImageBitmapOptions,
) -> CanvasResult<Option<(u32, u32)>> {
    let scaled = |num: u32, den: u32, other: u32| -> u32 {
        ((u64::from(other) * u64::from(num) + u64::from(den) / 2) / u64::from(den)).max(1) as u32
    };
    let target = match (opts.resize_width, opts.resize_height) {
        (None, None) => return Ok(None),
        (Some(rw), Some(rh)) => (rw, rh),
        (Some(rw), None) => (rw, scaled(rw, w, h)),
        (None, Some(rh)) => (scaled(rh, h, w), rh),
    };
    if target.0 == 0 || target.1 == 0 {
        return Err(CanvasError::validation("resize dimensions must be non-zero"));
    }
    Ok((target != (w, h)).then_some(target))
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/bitmap.rs"]
mod tests;
