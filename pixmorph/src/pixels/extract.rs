use crate::pixels::record::PixelRecord;
use crate::raster::buffer::Raster;

/// Which side of the morph a pixel list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelRole {
    /// Moving pixels; each record keeps its extraction position as origin.
    Source,
    /// Destination coordinates only.
    Target,
}

/// Collect every pixel with alpha > 0, in row-major scan order.
///
/// An all-transparent raster yields an empty list.
pub fn extract_pixels(raster: &Raster, role: PixelRole) -> Vec<PixelRecord> {
    let pixels: Vec<PixelRecord> = raster
        .pixels()
        .filter(|&(_, _, color)| color[3] > 0)
        .map(|(x, y, color)| match role {
            PixelRole::Source => PixelRecord::anchored(x, y, color),
            PixelRole::Target => PixelRecord::new(x, y, color),
        })
        .collect();

    tracing::debug!(
        ?role,
        visible = pixels.len(),
        total = u64::from(raster.width()) * u64::from(raster.height()),
        "extracted visible pixels"
    );
    pixels
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/extract.rs"]
mod tests;
