pub(crate) mod caps;
pub(crate) mod context;
