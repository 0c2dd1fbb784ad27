use super::*;
use crate::foundation::core::Canvas;

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn surface(w: u32, h: u32) -> Surface {
    Surface::new(Canvas::new(w, h).unwrap())
}

fn cell(s: &Surface, x: usize, y: usize) -> [u8; 4] {
    let i = (y * s.canvas().width as usize + x) * 4;
    [s.data()[i], s.data()[i + 1], s.data()[i + 2], s.data()[i + 3]]
}

fn moving(from: (u32, u32), to: (f64, f64), color: [u8; 4]) -> PixelRecord {
    let mut p = PixelRecord::anchored(from.0, from.1, color);
    p.set_target(Point::new(to.0, to.1));
    p
}

#[test]
fn idle_animator_renders_nothing() {
    let mut anim = MorphAnimator::new(MorphParams::default());
    let mut s = surface(2, 1);
    let mut px = vec![PixelRecord::anchored(0, 0, RED)];

    assert_eq!(anim.tick(&mut px, &mut s), TickOutcome::Idle);
    assert!(s.data().iter().all(|&b| b == 0));
    assert_eq!(anim.ticks(), 0);
}

#[test]
fn unmatched_pixels_stay_put_and_do_not_block_convergence() {
    let mut anim = MorphAnimator::new(MorphParams::default());
    anim.start();
    let mut s = surface(2, 1);
    let mut px = vec![PixelRecord::anchored(1, 0, RED)];

    assert_eq!(anim.tick(&mut px, &mut s), TickOutcome::Converged);
    assert!(!anim.is_animating());
    assert_eq!(px[0].pos(), Point::new(1.0, 0.0));
    assert_eq!(cell(&s, 1, 0), RED);
}

#[test]
fn first_step_covers_damping_fraction() {
    let mut anim = MorphAnimator::new(MorphParams::default());
    anim.start();
    let mut s = surface(12, 1);
    let mut px = vec![moving((0, 0), (10.0, 0.0), RED)];

    assert_eq!(anim.tick(&mut px, &mut s), TickOutcome::Running);
    assert!((px[0].pos().x - 1.5).abs() < 1e-12);
    // 1.5 rounds half up to cell 2
    assert_eq!(cell(&s, 2, 0), RED);
    assert_eq!(cell(&s, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn converges_once_displacement_is_within_threshold() {
    let mut anim = MorphAnimator::new(MorphParams::default());
    anim.start();
    let mut s = surface(12, 1);
    let mut px = vec![moving((0, 0), (10.0, 0.0), RED)];

    let mut outcome = TickOutcome::Running;
    while outcome == TickOutcome::Running {
        outcome = anim.tick(&mut px, &mut s);
        assert!(anim.ticks() < 1_000);
    }

    assert_eq!(outcome, TickOutcome::Converged);
    // 10 * 0.85^24 > 0.2 >= 10 * 0.85^25, so the 26th tick sees the pixel within threshold.
    assert_eq!(anim.ticks(), 26);
    assert!((10.0 - px[0].pos().x).abs() <= 0.2);
    assert_eq!(cell(&s, 10, 0), RED);
    assert_eq!(anim.tick(&mut px, &mut s), TickOutcome::Idle);
}

#[test]
fn later_pixels_cover_earlier_ones() {
    let mut anim = MorphAnimator::new(MorphParams::default());
    anim.start();
    let mut s = surface(2, 1);
    let mut px = vec![moving((0, 0), (0.0, 0.0), RED), moving((0, 0), (0.0, 0.0), BLUE)];

    assert_eq!(anim.tick(&mut px, &mut s), TickOutcome::Converged);
    assert_eq!(cell(&s, 0, 0), BLUE);
}

#[test]
fn stop_cancels_before_next_tick() {
    let mut anim = MorphAnimator::new(MorphParams::default());
    anim.start();
    let mut s = surface(12, 1);
    let mut px = vec![moving((0, 0), (10.0, 0.0), RED)];

    assert_eq!(anim.tick(&mut px, &mut s), TickOutcome::Running);
    anim.stop();
    let before = px[0].pos();
    assert_eq!(anim.tick(&mut px, &mut s), TickOutcome::Idle);
    assert_eq!(px[0].pos(), before);
}

#[test]
fn params_validation() {
    assert!(MorphParams::default().validate().is_ok());
    for damping in [0.0, -0.1, 1.5, f64::NAN] {
        let p = MorphParams {
            damping,
            ..MorphParams::default()
        };
        assert!(p.validate().is_err());
    }
    let p = MorphParams {
        threshold: 0.0,
        ..MorphParams::default()
    };
    assert!(p.validate().is_err());
}
