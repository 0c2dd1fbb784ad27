//! Decoded, canvas-sized RGBA rasters and the sources they are loaded from.

pub(crate) mod buffer;
pub(crate) mod decode;
pub(crate) mod source;
