use std::io::Cursor;

use super::*;
use crate::animation::scheduler::{ImmediateScheduler, SteppedScheduler};
use crate::encode::sink::InMemorySink;

fn png(width: u32, height: u32, rgba: &[u8]) -> ImageSource {
    let img = image::RgbaImage::from_raw(width, height, rgba.to_vec()).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    ImageSource::bytes(format!("{width}x{height}.png"), buf)
}

fn session(width: u32, height: u32) -> MorphSession {
    MorphSession::new(MorphConfig {
        canvas: Canvas::new(width, height).unwrap(),
        ..MorphConfig::default()
    })
    .unwrap()
}

fn broken() -> ImageSource {
    ImageSource::bytes("broken.png", b"\x89PNG nope".to_vec())
}

const LINE: [u8; 16] = [
    255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255,
];

#[test]
fn decode_failure_keeps_previous_list() {
    let mut s = session(4, 1);
    pollster::block_on(s.select_source(png(4, 1, &LINE))).unwrap();
    let before = s.source_pixels().to_vec();

    let err = pollster::block_on(s.select_source(broken())).unwrap_err();
    assert!(matches!(err, MorphError::Decode(_)));
    assert_eq!(s.source_pixels(), before.as_slice());
}

#[test]
fn start_morph_loads_pending_selection() {
    let mut s = session(4, 1);
    pollster::block_on(s.select_target(png(4, 1, &LINE))).unwrap();

    // A selection whose first load failed stays pending.
    assert!(pollster::block_on(s.select_source(broken())).is_err());
    assert!(s.source_pixels().is_empty());
    assert!(matches!(
        pollster::block_on(s.start_morph()).unwrap_err(),
        MorphError::Decode(_)
    ));
    assert!(!s.is_animating());

    // Re-selecting a good file makes the slot usable.
    s.source.selected = Some(png(4, 1, &LINE));
    let stats = pollster::block_on(s.start_morph()).unwrap();
    assert_eq!(stats.matched, 4);
    assert!(s.is_animating());
}

#[test]
fn failed_pending_load_commits_nothing() {
    let mut s = session(4, 1);
    s.source.selected = Some(png(4, 1, &LINE));
    s.target.selected = Some(broken());

    assert!(pollster::block_on(s.start_morph()).is_err());
    assert!(s.source_pixels().is_empty());
    assert!(s.target_pixels().is_empty());
}

#[test]
fn missing_input_leaves_running_animation_alone() {
    let mut s = session(4, 1);
    pollster::block_on(s.select_source(png(4, 1, &LINE))).unwrap();
    pollster::block_on(s.select_target(png(4, 1, &LINE))).unwrap();
    pollster::block_on(s.start_morph()).unwrap();
    assert!(s.is_animating());

    s.target.selected = None;
    s.target.pixels.clear();
    let err = pollster::block_on(s.start_morph()).unwrap_err();
    assert!(matches!(err, MorphError::MissingInput(_)));
    assert!(s.is_animating());
}

#[test]
fn restart_mid_animation_resets_positions() {
    let mut s = session(4, 1);
    let reversed: Vec<u8> = LINE.chunks(4).rev().flatten().copied().collect();
    pollster::block_on(s.select_source(png(4, 1, &LINE))).unwrap();
    pollster::block_on(s.select_target(png(4, 1, &reversed))).unwrap();

    pollster::block_on(s.start_morph()).unwrap();
    let first_targets: Vec<_> = s.source_pixels().iter().map(|p| p.target()).collect();
    for _ in 0..3 {
        s.tick();
    }
    assert!(s.source_pixels().iter().any(|p| Some(p.pos()) != p.origin()));

    pollster::block_on(s.start_morph()).unwrap();
    assert!(s.is_animating());
    for p in s.source_pixels() {
        assert_eq!(Some(p.pos()), p.origin());
    }
    let second_targets: Vec<_> = s.source_pixels().iter().map(|p| p.target()).collect();
    assert_eq!(first_targets, second_targets);
}

#[test]
fn replacing_source_stops_animation() {
    let mut s = session(4, 1);
    pollster::block_on(s.select_source(png(4, 1, &LINE))).unwrap();
    pollster::block_on(s.select_target(png(4, 1, &LINE))).unwrap();
    pollster::block_on(s.start_morph()).unwrap();

    pollster::block_on(s.select_source(png(4, 1, &LINE))).unwrap();
    assert!(!s.is_animating());
    assert!(s.source_pixels().iter().all(|p| p.target().is_none()));
}

#[test]
fn run_requires_started_morph() {
    let mut s = session(2, 1);
    let mut sink = InMemorySink::new();
    assert!(s.run(&mut ImmediateScheduler, &mut sink).is_err());
}

#[test]
fn stepped_scheduler_cancels_run() {
    let mut s = session(4, 1);
    let reversed: Vec<u8> = LINE.chunks(4).rev().flatten().copied().collect();
    pollster::block_on(s.select_source(png(4, 1, &LINE))).unwrap();
    pollster::block_on(s.select_target(png(4, 1, &reversed))).unwrap();
    pollster::block_on(s.start_morph()).unwrap();

    let mut sched = SteppedScheduler::new(2);
    let mut sink = InMemorySink::new();
    let stats = s.run(&mut sched, &mut sink).unwrap();

    assert_eq!(
        stats,
        RunStats {
            frames: 3,
            converged: false,
            cancelled: true
        }
    );
    assert_eq!(sched.remaining(), 0);
    assert_eq!(sink.frames().len(), 3);
    assert!(!s.is_animating());
    assert_eq!(s.tick(), TickOutcome::Idle);
}

#[test]
fn max_frames_caps_run() {
    let mut s = MorphSession::new(MorphConfig {
        canvas: Canvas::new(4, 1).unwrap(),
        max_frames: Some(1),
        ..MorphConfig::default()
    })
    .unwrap();
    let reversed: Vec<u8> = LINE.chunks(4).rev().flatten().copied().collect();
    pollster::block_on(s.select_source(png(4, 1, &LINE))).unwrap();
    pollster::block_on(s.select_target(png(4, 1, &reversed))).unwrap();
    pollster::block_on(s.start_morph()).unwrap();

    let mut sink = InMemorySink::new();
    let stats = s.run(&mut ImmediateScheduler, &mut sink).unwrap();
    assert_eq!(stats.frames, 1);
    assert!(stats.cancelled);
}
