//! Frame sinks.
//!
//! Sinks consume rendered frames in tick order and are used by `MorphSession::run`.

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// PNG file output.
pub mod png;
/// Generic frame sink trait and in-memory sinks.
pub mod sink;
