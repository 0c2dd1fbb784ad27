use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97).abs() < 0.01);
    assert!((fps.frame_duration_secs() - 1001.0 / 30000.0).abs() < 1e-12);
}

#[test]
fn canvas_contains_boundaries() {
    let c = Canvas::new(4, 2).unwrap();
    assert!(c.contains(0, 0));
    assert!(c.contains(3, 1));
    assert!(!c.contains(4, 1));
    assert!(!c.contains(0, 2));
    assert!(!c.contains(-1, 0));
    assert_eq!(c.rgba_len(), 32);
    assert!(Canvas::new(0, 3).is_err());
}

#[test]
fn premul_rounds_to_nearest() {
    assert_eq!(
        Rgba8Premul::from_straight_rgba(255, 100, 0, 128),
        Rgba8Premul {
            r: 128,
            g: 50,
            b: 0,
            a: 128
        }
    );
    assert_eq!(
        Rgba8Premul::from_straight_rgba(9, 9, 9, 0),
        Rgba8Premul::transparent()
    );
}
