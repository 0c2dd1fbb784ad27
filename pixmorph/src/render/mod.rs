//! The drawing surface pixels are rendered onto, and the frames read back from it.

pub(crate) mod frame;
pub(crate) mod surface;
