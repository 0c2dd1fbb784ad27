use super::*;
use crate::foundation::core::Point;

fn raster(width: u32, height: u32, alphas: &[u8]) -> Raster {
    let mut data = Vec::new();
    for (i, &a) in alphas.iter().enumerate() {
        data.extend_from_slice(&[i as u8, 10, 20, a]);
    }
    Raster::from_rgba8(width, height, data).unwrap()
}

#[test]
fn drops_transparent_pixels() {
    let r = raster(3, 2, &[255, 0, 1, 0, 0, 128]);
    let px = extract_pixels(&r, PixelRole::Target);

    assert_eq!(px.len(), 3);
    assert!(px.iter().all(|p| p.color()[3] > 0));
}

#[test]
fn visits_rows_then_columns() {
    let r = raster(2, 2, &[255, 255, 255, 255]);
    let coords: Vec<_> = extract_pixels(&r, PixelRole::Target)
        .iter()
        .map(|p| (p.pos().x, p.pos().y))
        .collect();
    assert_eq!(coords, vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
}

#[test]
fn only_source_side_is_anchored() {
    let r = raster(2, 1, &[0, 7]);

    let src = extract_pixels(&r, PixelRole::Source);
    assert_eq!(src.len(), 1);
    assert_eq!(src[0].origin(), Some(Point::new(1.0, 0.0)));
    assert_eq!(src[0].target(), None);

    let dst = extract_pixels(&r, PixelRole::Target);
    assert_eq!(dst[0].origin(), None);
}

#[test]
fn all_transparent_yields_empty_list() {
    let r = raster(2, 2, &[0, 0, 0, 0]);
    assert!(extract_pixels(&r, PixelRole::Source).is_empty());
}

#[test]
fn color_key_is_cached_until_invalidated() {
    let r = raster(1, 1, &[255]);
    let mut px = extract_pixels(&r, PixelRole::Source);
    let p = &mut px[0];

    assert_eq!(p.cached_color_key(), None);
    let k = p.color_key();
    assert_eq!(p.cached_color_key(), Some(k));

    p.reset();
    assert_eq!(p.cached_color_key(), None);
}
