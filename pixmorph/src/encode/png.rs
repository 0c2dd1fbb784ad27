use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MorphError, MorphResult};
use crate::render::frame::FrameRGBA;

/// Write one frame as an opaque PNG, flattened over `bg_rgba`.
pub fn write_png(path: &Path, frame: &FrameRGBA, bg_rgba: [u8; 4]) -> MorphResult<()> {
    crate::encode::ffmpeg::ensure_parent_dir(path)?;
    let flat = frame.flatten_over(bg_rgba)?;
    image::save_buffer_with_format(
        path,
        &flat,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Writes every frame to `<dir>/frame_00000.png`, `<dir>/frame_00001.png`, ...
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    background: [u8; 4],
    written: u64,
}

impl PngSequenceSink {
    /// Create a sink writing into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            background: [0, 0, 0, 255],
            written: 0,
        }
    }

    /// File path used for frame `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }

    /// Number of files written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.background = cfg.background;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MorphResult<()> {
        let path = self.frame_path(idx);
        write_png(&path, frame, self.background)
            .map_err(|e| MorphError::encode(format!("{e:#}")))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        tracing::info!(frames = self.written, dir = %self.dir.display(), "wrote png sequence");
        Ok(())
    }
}
