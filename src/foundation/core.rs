use std::fmt;

use crate::foundation::error::{CanvasError, CanvasResult};

/// Platform-defined numeric identifier for an enum-like GPU constant.
///
/// Tokens are plain values; the numeric value is what the driver sees, so equality is exact.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Token(pub u32);

impl Token {
    /// `GL_NONE`.
    pub const NONE: Token = Token(0);
    /// `GL_BACK`, valid as the single draw buffer of the default framebuffer.
    pub const BACK: Token = Token(0x0405);

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Operating system hosting the rendering surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "os", rename_all = "lowercase")]
pub enum Platform {
    /// Android with its SDK API level (`Build.VERSION.SDK_INT`).
    Android {
        /// SDK API level.
        api_level: u32,
    },
    /// iOS with its major/minor system version.
    Ios {
        /// Major version.
        major: u32,
        /// Minor version.
        minor: u32,
    },
    /// Desktop host (tests, tooling). Never version-gated.
    #[default]
    Desktop,
}

impl Platform {
    /// Android `JELLY_BEAN_MR2`, the first level exposing GLES 3.0 entry points.
    pub const ANDROID_JELLY_BEAN_MR2: u32 = 18;

    /// Parse `android:<level>`, `ios:<major>.<minor>` or `desktop`.
    pub fn parse(s: &str) -> CanvasResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("desktop") {
            return Ok(Self::Desktop);
        }
        let Some((os, ver)) = s.split_once(':') else {
            return Err(CanvasError::validation(format!(
                "platform '{s}' must look like 'android:18', 'ios:13.0' or 'desktop'"
            )));
        };
        match os.to_ascii_lowercase().as_str() {
            "android" => {
                let api_level = ver.parse::<u32>().map_err(|e| {
                    CanvasError::validation(format!("invalid android api level '{ver}': {e}"))
                })?;
                Ok(Self::Android { api_level })
            }
            "ios" => {
                let (major, minor) = ver.split_once('.').unwrap_or((ver, "0"));
                let major = major.parse::<u32>().map_err(|e| {
                    CanvasError::validation(format!("invalid ios major version '{major}': {e}"))
                })?;
                let minor = minor.parse::<u32>().map_err(|e| {
                    CanvasError::validation(format!("invalid ios minor version '{minor}': {e}"))
                })?;
                Ok(Self::Ios { major, minor })
            }
            other => Err(CanvasError::validation(format!(
                "unknown platform os '{other}'"
            ))),
        }
    }
}

/// OpenGL / OpenGL ES context version reported by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct GlVersion {
    /// `true` for OpenGL ES.
    pub es: bool,
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl GlVersion {
    /// OpenGL ES 2.0 (WebGL 1 baseline).
    pub const ES_2_0: GlVersion = GlVersion::es(2, 0);
    /// OpenGL ES 3.0 (WebGL 2 baseline, core `glDrawBuffers`).
    pub const ES_3_0: GlVersion = GlVersion::es(3, 0);

    /// Build an OpenGL ES version.
    pub const fn es(major: u32, minor: u32) -> Self {
        Self {
            es: true,
            major,
            minor,
        }
    }

    /// `true` when this is an ES context of at least `major.minor`.
    pub fn es_at_least(self, major: u32, minor: u32) -> bool {
        self.es && (self.major, self.minor) >= (major, minor)
    }

    /// `true` when this is a desktop OpenGL context of at least `major.minor`.
    pub fn desktop_at_least(self, major: u32, minor: u32) -> bool {
        !self.es && (self.major, self.minor) >= (major, minor)
    }

    /// Parse `"3.0"` or `"es3.0"` style strings (desktop GL is written `"gl4.1"`).
    pub fn parse(s: &str) -> CanvasResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        let (es, rest) = if let Some(r) = s.strip_prefix("gl") {
            (false, r)
        } else {
            (true, s.strip_prefix("es").unwrap_or(s.as_str()))
        };
        let (major, minor) = rest.split_once('.').unwrap_or((rest, "0"));
        let major = major
            .parse::<u32>()
            .map_err(|e| CanvasError::validation(format!("invalid GL major version: {e}")))?;
        let minor = minor
            .parse::<u32>()
            .map_err(|e| CanvasError::validation(format!("invalid GL minor version: {e}")))?;
        Ok(Self { es, major, minor })
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api = if self.es { "OpenGL ES" } else { "OpenGL" };
        write!(f, "{api} {}.{}", self.major, self.minor)
    }
}

/// Pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Build a size, rejecting zero-area dimensions.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::validation(format!(
                "size must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of bytes for tightly packed RGBA8 pixels of this size.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
