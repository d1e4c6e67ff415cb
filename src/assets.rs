pub(crate) mod arena;
pub(crate) mod bitmap;
pub(crate) mod bridge;
pub(crate) mod codec;
pub(crate) mod pool;
pub(crate) mod source;
