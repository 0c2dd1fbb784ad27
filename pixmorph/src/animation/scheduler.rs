/// Host capability that paces animation ticks.
///
/// `request_tick` is "run me again before the next repaint": it returns once the host is ready
/// for another frame, or `false` to cancel the animation.
pub trait FrameScheduler {
    /// Wait for the next frame slot. `false` cancels.
    fn request_tick(&mut self) -> bool;
}

/// Grants every tick immediately (offline rendering).
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl FrameScheduler for ImmediateScheduler {
    fn request_tick(&mut self) -> bool {
        true
    }
}

/// Grants a fixed number of follow-up ticks, then cancels.
#[derive(Clone, Copy, Debug)]
pub struct SteppedScheduler {
    remaining: u64,
}

impl SteppedScheduler {
    /// Allow `ticks` more ticks after the first.
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }

    /// Ticks still available.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameScheduler for SteppedScheduler {
    fn request_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
