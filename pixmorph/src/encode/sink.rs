use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::MorphResult;
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a run.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Output dimensions in pixels.
    pub canvas: Canvas,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Opaque color frames are flattened over when the output has no alpha.
    pub background: [u8; 4],
}

/// Sink contract for consuming rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MorphResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> MorphResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MorphResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        Ok(())
    }
}

/// Keeps a single frame: the requested index, or the most recent one when none is requested.
#[derive(Debug, Default)]
pub struct CaptureFrameSink {
    wanted: Option<FrameIndex>,
    captured: Option<(FrameIndex, FrameRGBA)>,
}

impl CaptureFrameSink {
    /// Capture the frame at `idx`.
    pub fn at(idx: FrameIndex) -> Self {
        Self {
            wanted: Some(idx),
            captured: None,
        }
    }

    /// Capture the last frame pushed.
    pub fn last() -> Self {
        Self::default()
    }

    /// The captured frame, if the run reached it.
    pub fn frame(&self) -> Option<&(FrameIndex, FrameRGBA)> {
        self.captured.as_ref()
    }

    /// Take ownership of the captured frame.
    pub fn into_frame(self) -> Option<(FrameIndex, FrameRGBA)> {
        self.captured
    }
}

impl FrameSink for CaptureFrameSink {
    fn begin(&mut self, _cfg: SinkConfig) -> MorphResult<()> {
        self.captured = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MorphResult<()> {
        match self.wanted {
            Some(w) if w != idx => {}
            _ => self.captured = Some((idx, frame.clone())),
        }
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
