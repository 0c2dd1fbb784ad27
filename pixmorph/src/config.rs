use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::params::MorphParams;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{MorphError, MorphResult};
use crate::raster::decode::ResizeFilter;

/// Everything a [`crate::MorphSession`] needs to know up front.
///
/// Every field has a default, so a JSON file only needs the values it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorphConfig {
    /// Display surface size; both images are stretched to it.
    pub canvas: Canvas,
    /// Damping and convergence threshold.
    pub params: MorphParams,
    /// Resampling filter used when stretching inputs.
    pub resize_filter: ResizeFilter,
    /// Opaque color frames are flattened over for PNG/MP4 output.
    pub background: [u8; 4],
    /// Output frame rate.
    pub fps: Fps,
    /// Stop after this many frames even if the morph has not converged.
    pub max_frames: Option<u64>,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            params: MorphParams::default(),
            resize_filter: ResizeFilter::default(),
            background: [0, 0, 0, 255],
            fps: Fps::default(),
            max_frames: None,
        }
    }
}

impl MorphConfig {
    /// Load a config from a JSON file. The result is validated.
    pub fn from_json_path(path: &Path) -> MorphResult<Self> {
        let f = File::open(path).map_err(|e| {
            MorphError::config(format!("open config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            MorphError::config(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON string. The result is validated.
    pub fn from_json_str(json: &str) -> MorphResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| MorphError::config(format!("parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field.
    pub fn validate(&self) -> MorphResult<()> {
        self.canvas.validate()?;
        self.params.validate()?;
        self.fps.validate()?;
        if self.background[3] != 255 {
            return Err(MorphError::validation("background color must be opaque"));
        }
        if self.max_frames == Some(0) {
            return Err(MorphError::validation("max_frames must be > 0 when set"));
        }
        Ok(())
    }
}
