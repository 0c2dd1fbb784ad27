use super::*;

fn key(r: u8, g: u8, b: u8) -> ColorKey {
    ColorKey::from_rgba([r, g, b, 255])
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn primaries_land_on_their_sectors() {
    let red = key(255, 0, 0);
    assert_eq!((red.h, red.s, red.l), (0.0, 1.0, 0.5));

    let green = key(0, 255, 0);
    assert_eq!((green.h, green.s, green.l), (120.0, 1.0, 0.5));

    let blue = key(0, 0, 255);
    assert_eq!((blue.h, blue.s, blue.l), (240.0, 1.0, 0.5));
}

#[test]
fn negative_red_sector_wraps_into_range() {
    // magenta-ish red: max == r, g < b
    let k = key(255, 0, 51);
    assert!(approx(k.h, 348.0));
    assert!(k.h >= 0.0 && k.h < 360.0);
}

#[test]
fn achromatic_has_zero_hue_and_saturation() {
    for v in [0u8, 128, 255] {
        let k = key(v, v, v);
        assert_eq!(k.h, 0.0);
        assert_eq!(k.s, 0.0);
        assert!(approx(k.l, f64::from(v) / 255.0));
    }
}

#[test]
fn alpha_does_not_change_key() {
    assert_eq!(
        ColorKey::from_rgba([10, 200, 30, 1]),
        ColorKey::from_rgba([10, 200, 30, 255])
    );
}

#[test]
fn ordering_is_hue_then_saturation_then_lightness() {
    let red = key(255, 0, 0);
    let dull_red = key(191, 64, 64);
    let dim = ColorKey {
        h: 0.0,
        s: 1.0,
        l: 0.25,
    };
    let blue = key(0, 0, 255);

    assert_eq!(red.cmp_hsl(&blue), Ordering::Less);
    // same hue, lower saturation first
    assert_eq!(dull_red.cmp_hsl(&red), Ordering::Less);
    // same hue and saturation, lower lightness first
    assert_eq!(dim.cmp_hsl(&red), Ordering::Less);
    assert_eq!(red.cmp_hsl(&red), Ordering::Equal);
}
