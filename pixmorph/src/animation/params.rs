use crate::foundation::error::{MorphError, MorphResult};

/// Motion tuning for the morph animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MorphParams {
    /// Fraction of the remaining displacement covered each tick, in `(0, 1]`.
    pub damping: f64,
    /// A pixel counts as arrived once both `|dx|` and `|dy|` are at most this distance.
    pub threshold: f64,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            damping: 0.15,
            threshold: 0.2,
        }
    }
}

impl MorphParams {
    /// Reject values for which the animation would never converge.
    pub fn validate(&self) -> MorphResult<()> {
        if !self.damping.is_finite() || self.damping <= 0.0 || self.damping > 1.0 {
            return Err(MorphError::validation(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(MorphError::validation(format!(
                "threshold must be finite and > 0, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
