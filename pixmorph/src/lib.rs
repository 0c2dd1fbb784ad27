//! pixmorph renders a pixel-level morph between two images.
//!
//! Every visible pixel of the source image is paired with a pixel of the target image by
//! sorting both sets by hue, saturation and lightness and matching them rank for rank. Each
//! source pixel then glides toward its partner's coordinate, covering a fixed fraction of the
//! remaining distance every frame, until all of them have arrived.
//!
//! - Configure a [`MorphConfig`] and create a [`MorphSession`]
//! - Select the two images ([`ImageSource`]) and call [`MorphSession::start_morph`]
//! - Drive frames with [`MorphSession::tick`], or stream a whole run into a [`FrameSink`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Morph configuration.
pub mod config;
/// Frame sinks.
pub mod encode;
pub(crate) mod matching;
pub(crate) mod pixels;
pub(crate) mod raster;
pub(crate) mod render;
pub(crate) mod session;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Point, Rgba8Premul};
pub use crate::foundation::error::{MorphError, MorphResult};

pub use crate::animation::animator::{MorphAnimator, TickOutcome};
pub use crate::animation::params::MorphParams;
pub use crate::animation::scheduler::{FrameScheduler, ImmediateScheduler, SteppedScheduler};
pub use crate::config::MorphConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{CaptureFrameSink, FrameSink, InMemorySink, SinkConfig};
pub use crate::matching::matcher::{MatchStats, match_by_rank, sort_by_color_key};
pub use crate::pixels::color_key::ColorKey;
pub use crate::pixels::extract::{PixelRole, extract_pixels};
pub use crate::pixels::record::PixelRecord;
pub use crate::raster::buffer::Raster;
pub use crate::raster::decode::{ResizeFilter, decode_raster, load_raster};
pub use crate::raster::source::ImageSource;
pub use crate::render::frame::FrameRGBA;
pub use crate::render::surface::Surface;
pub use crate::session::morph_session::{MorphSession, RunStats};
