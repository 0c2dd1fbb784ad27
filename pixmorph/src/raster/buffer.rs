use crate::foundation::core::Canvas;
use crate::foundation::error::{MorphError, MorphResult};

/// Straight-alpha RGBA8 raster, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap an RGBA8 buffer, checking that it holds exactly `width * height` pixels.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> MorphResult<Self> {
        let canvas = Canvas::new(width, height)?;
        if data.len() != canvas.rgba_len() {
            return Err(MorphError::validation(format!(
                "raster buffer size mismatch: got {} bytes, expected {} for {}x{}",
                data.len(),
                canvas.rgba_len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate `(x, y, [r, g, b, a])` in row-major order (y outer, x inner).
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        let width = self.width;
        self.data.chunks_exact(4).enumerate().map(move |(i, px)| {
            let i = i as u32;
            (i % width, i / width, [px[0], px[1], px[2], px[3]])
        })
    }
}
