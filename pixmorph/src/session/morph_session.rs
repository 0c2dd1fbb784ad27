use crate::animation::animator::{MorphAnimator, TickOutcome};
use crate::animation::scheduler::FrameScheduler;
use crate::config::MorphConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{MorphError, MorphResult};
use crate::matching::matcher::{MatchStats, match_by_rank};
use crate::pixels::extract::{PixelRole, extract_pixels};
use crate::pixels::record::PixelRecord;
use crate::raster::decode::{ResizeFilter, load_raster};
use crate::raster::source::ImageSource;
use crate::render::surface::Surface;

/// Statistics for one [`MorphSession::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames rendered and pushed to the sink.
    pub frames: u64,
    /// The run ended because every matched pixel arrived.
    pub converged: bool,
    /// The run ended because the scheduler or the frame cap refused another tick.
    pub cancelled: bool,
}

#[derive(Debug, Default)]
struct Slot {
    selected: Option<ImageSource>,
    pixels: Vec<PixelRecord>,
}

impl Slot {
    /// A selection that has not produced any pixels yet.
    fn pending(&self) -> Option<&ImageSource> {
        self.selected.as_ref().filter(|_| self.pixels.is_empty())
    }
}

/// Orchestrates a morph between a source image (slot A) and a target image (slot B).
///
/// All mutable state of a morph lives here: both pixel lists, the drawing surface and the
/// animator. A new [`MorphSession::start_morph`] always halts the running animation before
/// touching the pixel lists, so at most one animation is ever active.
pub struct MorphSession {
    config: MorphConfig,
    source: Slot,
    target: Slot,
    animator: MorphAnimator,
    surface: Surface,
}

impl MorphSession {
    /// Create an idle session with empty slots.
    pub fn new(config: MorphConfig) -> MorphResult<Self> {
        config.validate()?;
        Ok(Self {
            animator: MorphAnimator::new(config.params),
            surface: Surface::new(config.canvas),
            source: Slot::default(),
            target: Slot::default(),
            config,
        })
    }

    /// Session configuration.
    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Select the source image and extract its pixels right away.
    ///
    /// On failure the previous source list is kept, but the selection is remembered so
    /// [`MorphSession::start_morph`] can retry it if the slot is still empty.
    #[tracing::instrument(skip_all, fields(source = %src.label()))]
    pub async fn select_source(&mut self, src: ImageSource) -> MorphResult<usize> {
        self.source.selected = Some(src.clone());
        let pixels = load_pixels(
            &src,
            self.config.canvas,
            self.config.resize_filter,
            PixelRole::Source,
        )
        .await?;

        // The running animation was moving the list being replaced.
        self.animator.stop();
        self.source.pixels = pixels;
        Ok(self.source.pixels.len())
    }

    /// Select the target image and extract its pixels right away.
    ///
    /// On failure the previous target list is kept.
    #[tracing::instrument(skip_all, fields(target = %src.label()))]
    pub async fn select_target(&mut self, src: ImageSource) -> MorphResult<usize> {
        self.target.selected = Some(src.clone());
        let pixels = load_pixels(
            &src,
            self.config.canvas,
            self.config.resize_filter,
            PixelRole::Target,
        )
        .await?;

        self.target.pixels = pixels;
        Ok(self.target.pixels.len())
    }

    /// Reset, match and start animating.
    ///
    /// Pending selections whose lists are still empty are loaded first; nothing is committed
    /// unless every such load succeeds. Fails with [`MorphError::MissingInput`] when either list
    /// is empty afterwards, leaving any running animation alone.
    #[tracing::instrument(skip_all)]
    pub async fn start_morph(&mut self) -> MorphResult<MatchStats> {
        let canvas = self.config.canvas;
        let filter = self.config.resize_filter;

        let fresh_source = match self.source.pending() {
            Some(src) => Some(load_pixels(src, canvas, filter, PixelRole::Source).await?),
            None => None,
        };
        let fresh_target = match self.target.pending() {
            Some(src) => Some(load_pixels(src, canvas, filter, PixelRole::Target).await?),
            None => None,
        };
        if let Some(pixels) = fresh_source {
            self.animator.stop();
            self.source.pixels = pixels;
        }
        if let Some(pixels) = fresh_target {
            self.target.pixels = pixels;
        }

        if self.source.pixels.is_empty() || self.target.pixels.is_empty() {
            let missing = match (self.source.pixels.is_empty(), self.target.pixels.is_empty()) {
                (true, true) => "source and target images",
                (true, false) => "source image",
                _ => "target image",
            };
            tracing::warn!(missing, "morph requested without both images");
            return Err(MorphError::missing_input(format!(
                "no visible pixels for the {missing}"
            )));
        }

        self.animator.stop();
        self.surface.clear();
        for p in self
            .source
            .pixels
            .iter_mut()
            .chain(self.target.pixels.iter_mut())
        {
            p.reset();
        }

        let stats = match_by_rank(&mut self.source.pixels, &mut self.target.pixels);
        self.animator.start();
        Ok(stats)
    }

    /// Advance the animation by one frame. Renders nothing once idle.
    pub fn tick(&mut self) -> TickOutcome {
        self.animator.tick(&mut self.source.pixels, &mut self.surface)
    }

    /// Cancel the running animation, if any.
    pub fn stop(&mut self) {
        self.animator.stop();
    }

    /// `true` while an animation is running.
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// The drawing surface as of the last tick.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Source pixels in current (post-match) order.
    pub fn source_pixels(&self) -> &[PixelRecord] {
        &self.source.pixels
    }

    /// Target pixels in current (post-match) order.
    pub fn target_pixels(&self) -> &[PixelRecord] {
        &self.target.pixels
    }

    /// Drive a started morph to its end, streaming every rendered frame into `sink`.
    ///
    /// The first tick runs immediately; each further tick is requested from `scheduler`. A
    /// refused request, or reaching `max_frames`, cancels the animation.
    #[tracing::instrument(skip_all)]
    pub fn run(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        sink: &mut dyn FrameSink,
    ) -> MorphResult<RunStats> {
        if !self.is_animating() {
            return Err(MorphError::validation(
                "run requires a started morph (call start_morph first)",
            ));
        }

        sink.begin(SinkConfig {
            canvas: self.config.canvas,
            fps: self.config.fps,
            background: self.config.background,
        })?;

        let stats = match self.drive(scheduler, sink) {
            Ok(stats) => stats,
            Err(e) => {
                self.stop();
                return Err(e);
            }
        };
        sink.end()?;

        tracing::info!(
            frames = stats.frames,
            converged = stats.converged,
            cancelled = stats.cancelled,
            "morph run finished"
        );
        Ok(stats)
    }

    fn drive(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        sink: &mut dyn FrameSink,
    ) -> MorphResult<RunStats> {
        let mut stats = RunStats::default();
        loop {
            let outcome = self.tick();
            if outcome == TickOutcome::Idle {
                break;
            }

            sink.push_frame(FrameIndex(stats.frames), &self.surface.to_frame())?;
            stats.frames += 1;

            if outcome == TickOutcome::Converged {
                stats.converged = true;
                break;
            }
            let capped = self.config.max_frames.is_some_and(|m| stats.frames >= m);
            if capped || !scheduler.request_tick() {
                self.stop();
                stats.cancelled = true;
                break;
            }
        }
        Ok(stats)
    }
}

async fn load_pixels(
    src: &ImageSource,
    canvas: Canvas,
    filter: ResizeFilter,
    role: PixelRole,
) -> MorphResult<Vec<PixelRecord>> {
    let raster = load_raster(src, canvas, filter).await?;
    Ok(extract_pixels(&raster, role))
}

#[cfg(test)]
#[path = "../../tests/unit/session/morph_session.rs"]
mod tests;
