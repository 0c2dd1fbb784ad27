use std::cmp::Ordering;

/// Hue/saturation/lightness triple used only as a sort key.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorKey {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl ColorKey {
    /// Standard RGB -> HSL conversion of an RGBA8 color. Alpha does not participate.
    ///
    /// Achromatic colors (`max == min`) yield `h = 0, s = 0`.
    pub fn from_rgba(color: [u8; 4]) -> Self {
        let r = f64::from(color[0]) / 255.0;
        let g = f64::from(color[1]) / 255.0;
        let b = f64::from(color[2]) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = d / (1.0 - (2.0 * l - 1.0).abs());

        // `%` on f64 keeps the sign of the dividend.
        let sector = if max == r {
            ((g - b) / d) % 6.0
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let mut h = sector * 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        Self { h, s, l }
    }

    /// Ascending order by hue, then saturation, then lightness.
    pub fn cmp_hsl(&self, other: &Self) -> Ordering {
        cmp_f64(self.h, other.h)
            .then_with(|| cmp_f64(self.s, other.s))
            .then_with(|| cmp_f64(self.l, other.l))
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/color_key.rs"]
mod tests;
