pub(crate) mod backend;
#[cfg(feature = "glow")]
pub(crate) mod glow_backend;
pub(crate) mod headless;
