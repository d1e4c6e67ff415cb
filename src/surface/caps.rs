use std::collections::BTreeSet;

use crate::{
    caps::registry::Capability,
    ext::name::ExtensionName,
    foundation::core::{GlVersion, Platform},
    gl::backend::GlBackend,
};

/// Platform and driver support detected once when a surface is created.
///
/// Vending consults this snapshot only; nothing re-queries the driver afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceCaps {
    platform: Platform,
    version: GlVersion,
    driver_extensions: Vec<String>,
    supported: BTreeSet<ExtensionName>,
    max_draw_buffers: i32,
    max_color_attachments: i32,
}

impl SurfaceCaps {
    /// Probe `gl` and evaluate every extension requirement against `platform`.
    #[tracing::instrument(skip(gl))]
    pub fn detect(platform: Platform, gl: &mut dyn GlBackend) -> Self {
        let version = gl.version();
        let driver_extensions = gl.extensions();

        let supported: BTreeSet<ExtensionName> = ExtensionName::ALL
            .iter()
            .copied()
            .filter(|ext| {
                let req = ext.requirement();
                req.platform_ok(platform) && req.driver_ok(version, &driver_extensions)
            })
            .collect();

        // Without MRT support the limit queries are not valid enums on the driver.
        let (max_draw_buffers, max_color_attachments) =
            if supported.contains(&ExtensionName::WebglDrawBuffers) {
                (
                    gl.get_integer(Capability::GL_MAX_DRAW_BUFFERS_EXT.token()).max(1),
                    gl.get_integer(Capability::GL_MAX_COLOR_ATTACHMENTS_EXT.token())
                        .max(1),
                )
            } else {
                (1, 1)
            };

        tracing::debug!(
            %version,
            supported = supported.len(),
            max_draw_buffers,
            max_color_attachments,
            "surface capabilities detected"
        );

        Self {
            platform,
            version,
            driver_extensions,
            supported,
            max_draw_buffers,
            max_color_attachments,
        }
    }

    /// Host platform the snapshot was taken for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Context version reported by the driver.
    pub fn version(&self) -> GlVersion {
        self.version
    }

    /// Raw driver extension strings.
    pub fn driver_extensions(&self) -> &[String] {
        &self.driver_extensions
    }

    /// `true` when `ext` may be vended.
    pub fn supports(&self, ext: ExtensionName) -> bool {
        self.supported.contains(&ext)
    }

    /// Vendable extensions in name order.
    pub fn supported(&self) -> impl Iterator<Item = ExtensionName> + '_ {
        self.supported.iter().copied()
    }

    /// `MAX_DRAW_BUFFERS`, 1 when multiple render targets are unavailable.
    pub fn max_draw_buffers(&self) -> i32 {
        self.max_draw_buffers
    }

    /// `MAX_COLOR_ATTACHMENTS`, 1 when multiple render targets are unavailable.
    pub fn max_color_attachments(&self) -> i32 {
        self.max_color_attachments
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/caps.rs"]
mod tests;
