use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::math::{mul_div255_u8, round_half_up};
use crate::render::frame::FrameRGBA;

/// Fixed-size premultiplied RGBA8 drawing surface.
///
/// Supports exactly what the morph needs: clearing to transparent and source-over filling of
/// single 1x1 cells.
#[derive(Clone, Debug)]
pub struct Surface {
    canvas: Canvas,
    data: Vec<u8>,
}

impl Surface {
    /// A transparent surface of the given size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            data: vec![0u8; canvas.rgba_len()],
        }
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reset every cell to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Fill the cell at `(round(x), round(y))` with a straight-alpha color, source-over.
    ///
    /// Cells off the surface are clipped.
    pub fn fill_cell(&mut self, x: f64, y: f64, color: [u8; 4]) {
        let cx = round_half_up(x);
        let cy = round_half_up(y);
        if !self.canvas.contains(cx, cy) {
            return;
        }

        let src = Rgba8Premul::from_straight_rgba(color[0], color[1], color[2], color[3]);
        let idx = (cy as usize * self.canvas.width as usize + cx as usize) * 4;
        let dst = &mut self.data[idx..idx + 4];

        if src.a == 255 {
            dst.copy_from_slice(&[src.r, src.g, src.b, src.a]);
            return;
        }

        let inv = 255u16 - u16::from(src.a);
        for (d, s) in dst.iter_mut().zip([src.r, src.g, src.b, src.a]) {
            let v = u16::from(s) + u16::from(mul_div255_u8(u16::from(*d), inv));
            *d = v.min(255) as u8;
        }
    }

    /// Read back the current contents as a premultiplied frame.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.data.clone(),
            premultiplied: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
