use crate::animation::params::MorphParams;
use crate::foundation::core::Point;
use crate::pixels::record::PixelRecord;
use crate::render::surface::Surface;

/// Result of a single animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The animator was not running; nothing was rendered.
    Idle,
    /// A frame was rendered and at least one pixel is still travelling.
    Running,
    /// A frame was rendered and every matched pixel was within threshold; the animator is now
    /// idle.
    Converged,
}

/// Moves matched pixels toward their targets, one frame per tick.
///
/// Idle -> Running on [`MorphAnimator::start`]; Running -> Idle on convergence or
/// [`MorphAnimator::stop`].
#[derive(Clone, Debug)]
pub struct MorphAnimator {
    params: MorphParams,
    animating: bool,
    ticks: u64,
}

impl MorphAnimator {
    /// New idle animator.
    pub fn new(params: MorphParams) -> Self {
        Self {
            params,
            animating: false,
            ticks: 0,
        }
    }

    /// Motion parameters in use.
    pub fn params(&self) -> MorphParams {
        self.params
    }

    /// `true` while running.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Frames rendered since the last start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn start(&mut self) {
        self.animating = true;
        self.ticks = 0;
    }

    /// Cancel. The next tick observes this and renders nothing.
    pub fn stop(&mut self) {
        if self.animating {
            tracing::debug!(ticks = self.ticks, "animation stopped");
        }
        self.animating = false;
    }

    /// Render one frame of `pixels` onto `surface`, advancing every matched pixel.
    ///
    /// Pixels are drawn in list order, so later entries cover earlier ones on shared cells.
    /// Convergence is judged on the displacement before this tick's step.
    pub fn tick(&mut self, pixels: &mut [PixelRecord], surface: &mut Surface) -> TickOutcome {
        if !self.animating {
            return TickOutcome::Idle;
        }

        surface.clear();
        let mut done = true;

        for p in pixels.iter_mut() {
            let pos = p.pos();
            let Some(target) = p.target() else {
                surface.fill_cell(pos.x, pos.y, p.color());
                continue;
            };

            let dx = target.x - pos.x;
            let dy = target.y - pos.y;
            if dx.abs() > self.params.threshold || dy.abs() > self.params.threshold {
                done = false;
            }

            let next = Point::new(
                pos.x + dx * self.params.damping,
                pos.y + dy * self.params.damping,
            );
            p.set_pos(next);
            surface.fill_cell(next.x, next.y, p.color());
        }

        self.ticks += 1;
        if done {
            self.animating = false;
            tracing::info!(ticks = self.ticks, "morph converged");
            TickOutcome::Converged
        } else {
            TickOutcome::Running
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
