use image::imageops::FilterType;

use crate::foundation::core::Canvas;
use crate::foundation::error::{MorphError, MorphResult};
use crate::raster::buffer::Raster;
use crate::raster::source::ImageSource;

/// Resampling filter used to stretch an input image onto the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    /// Nearest neighbor.
    Nearest,
    /// Bilinear.
    #[default]
    Triangle,
    /// Catmull-Rom cubic.
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl ResizeFilter {
    fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Decode encoded image bytes and stretch them to exactly `canvas`.
///
/// Images that already match the canvas are passed through unresampled, so their pixels
/// survive bit-exact.
pub fn decode_raster(bytes: &[u8], canvas: Canvas, filter: ResizeFilter) -> MorphResult<Raster> {
    canvas.validate()?;
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| MorphError::decode(format!("decode image from memory: {e}")))?;
    let mut rgba = dyn_img.to_rgba8();

    if rgba.dimensions() != (canvas.width, canvas.height) {
        tracing::debug!(
            from_w = rgba.width(),
            from_h = rgba.height(),
            to_w = canvas.width,
            to_h = canvas.height,
            ?filter,
            "resampling image to canvas"
        );
        rgba = image::imageops::resize(&rgba, canvas.width, canvas.height, filter.filter_type());
    }

    Raster::from_rgba8(canvas.width, canvas.height, rgba.into_raw())
}

/// Read and decode `source` onto `canvas`.
///
/// This is the only suspending step of a morph: file bytes are read, then decoded. Any failure
/// (unreadable file, unsupported or corrupt format) is a [`MorphError::Decode`].
#[tracing::instrument(skip(source), fields(source = %source.label()))]
pub async fn load_raster(
    source: &ImageSource,
    canvas: Canvas,
    filter: ResizeFilter,
) -> MorphResult<Raster> {
    let bytes = source.read().await?;
    decode_raster(&bytes, canvas, filter)
        .map_err(|e| match e {
            MorphError::Decode(msg) => MorphError::decode(format!("{}: {msg}", source.label())),
            other => other,
        })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
