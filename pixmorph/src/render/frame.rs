use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::MorphResult;
use crate::foundation::math::flatten_premul_over_bg_to_opaque_rgba8;

/// A rendered frame as RGBA8 pixels.
///
/// Frames read back from a [`crate::Surface`] are premultiplied alpha; the flag makes this
/// explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// 64-bit xxh3 digest of the pixel bytes.
    pub fn digest(&self) -> u64 {
        xxhash_rust::xxh3::xxh3_64(&self.data)
    }

    /// Composite over an opaque background color, producing opaque straight RGBA8 bytes.
    pub fn flatten_over(&self, bg_rgba: [u8; 4]) -> MorphResult<Vec<u8>> {
        let mut out = vec![0u8; self.data.len()];
        if self.premultiplied {
            flatten_premul_over_bg_to_opaque_rgba8(&mut out, &self.data, bg_rgba)?;
        } else {
            let premul: Vec<u8> = self
                .data
                .chunks_exact(4)
                .flat_map(|px| {
                    let p = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
                    [p.r, p.g, p.b, p.a]
                })
                .collect();
            flatten_premul_over_bg_to_opaque_rgba8(&mut out, &premul, bg_rgba)?;
        }
        Ok(out)
    }
}
