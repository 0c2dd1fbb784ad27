//! Per-frame interpolation of matched pixels and the tick scheduling seam.

pub(crate) mod animator;
pub(crate) mod params;
pub(crate) mod scheduler;
