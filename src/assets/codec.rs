use std::{fmt, io::Cursor, path::Path, str::FromStr, sync::OnceLock};

use anyhow::Context;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::foundation::{
    config::FetchOpts,
    error::{CanvasError, CanvasResult},
};

/// Encoded output format, keyed by the integer codes hosts pass across the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Code 0. Alpha is dropped.
    Jpg = 0,
    /// Code 1.
    Png = 1,
    /// Code 2. At most 256x256.
    Ico = 2,
    /// Code 3.
    Bmp = 3,
    /// Code 4.
    Tiff = 4,
}

impl OutputFormat {
    /// Every format in code order.
    pub const ALL: [OutputFormat; 5] = [Self::Jpg, Self::Png, Self::Ico, Self::Bmp, Self::Tiff];

    /// Map a host format code.
    pub fn from_code(code: i32) -> CanvasResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.code() == code)
            .ok_or_else(|| CanvasError::validation(format!("unknown output format code {code}")))
    }

    /// Host format code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Usual file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Ico => "ico",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Ico => ImageFormat::Ico,
            Self::Bmp => ImageFormat::Bmp,
            Self::Tiff => ImageFormat::Tiff,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "png" => Ok(Self::Png),
            "ico" => Ok(Self::Ico),
            "bmp" => Ok(Self::Bmp),
            "tif" | "tiff" => Ok(Self::Tiff),
            other => Err(CanvasError::validation(format!("unknown output format '{other}'"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Decode any supported container into straight-alpha RGBA8.
pub fn decode(bytes: &[u8]) -> CanvasResult<RgbaImage> {
    if bytes.is_empty() {
        return Err(CanvasError::decode("empty input"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| CanvasError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.into_rgba8())
}

/// Encode `image` in memory.
pub fn encode(image: &RgbaImage, format: OutputFormat) -> CanvasResult<Vec<u8>> {
    let mut buf = Vec::new();
    prepare(image, format)
        .write_to(&mut Cursor::new(&mut buf), format.image_format())
        .map_err(|e| CanvasError::encode(format!("encode {format}: {e}")))?;
    Ok(buf)
}

/// Encode `image` and write it to `path`, replacing any existing file.
pub fn encode_to_path(
    image: &RgbaImage,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> CanvasResult<()> {
    let path = path.as_ref();
    prepare(image, format)
        .save_with_format(path, format.image_format())
        .map_err(|e| CanvasError::encode(format!("write {format} '{}': {e}", path.display())))
}

fn prepare(image: &RgbaImage, format: OutputFormat) -> DynamicImage {
    let img = DynamicImage::ImageRgba8(image.clone());
    match format {
        OutputFormat::Jpg => DynamicImage::ImageRgb8(img.into_rgb8()),
        _ => img,
    }
}

pub(crate) fn read_path(path: &Path) -> CanvasResult<Vec<u8>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    Ok(bytes)
}

/// Blocking loader for `http(s)://` and `file://` URLs.
///
/// The HTTP client is built on first use and reused by every later fetch.
#[derive(Debug)]
pub(crate) struct Fetcher {
    opts: FetchOpts,
    client: OnceLock<reqwest::blocking::Client>,
}

impl Fetcher {
    pub(crate) fn new(opts: FetchOpts) -> Self {
        Self {
            opts,
            client: OnceLock::new(),
        }
    }

    pub(crate) fn opts(&self) -> &FetchOpts {
        &self.opts
    }

    fn client(&self) -> CanvasResult<&reqwest::blocking::Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.opts.user_agent.as_str())
            .timeout(self.opts.timeout())
            .build()
            .map_err(|e| CanvasError::fetch(format!("build HTTP client: {e}")))?;
        Ok(self.client.get_or_init(|| client))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn fetch(&self, url: &str) -> CanvasResult<Vec<u8>> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| CanvasError::fetch(format!("invalid URL '{url}': {e}")))?;
        match parsed.scheme() {
            "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|()| CanvasError::fetch(format!("invalid file URL '{url}'")))?;
                read_path(&path)
            }
            "http" | "https" => {
                let response = self
                    .client()?
                    .get(parsed)
                    .send()
                    .map_err(|e| CanvasError::fetch(format!("GET {url}: {e}")))?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CanvasError::fetch(format!(
                        "GET {url}: HTTP {}",
                        status.as_u16()
                    )));
                }
                let body = response
                    .bytes()
                    .map_err(|e| CanvasError::fetch(format!("read body of {url}: {e}")))?;
                tracing::debug!(bytes = body.len(), "fetched");
                Ok(body.to_vec())
            }
            other => Err(CanvasError::fetch(format!(
                "unsupported URL scheme '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
