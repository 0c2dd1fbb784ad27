use crate::foundation::core::Point;
use crate::pixels::color_key::ColorKey;

/// One visible pixel taking part in a morph.
///
/// Source-side records carry an `origin` so every run can restart from the extracted layout.
/// `target` is set by matching; a source record left without one is drawn where it stands.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelRecord {
    pos: Point,
    color: [u8; 4],
    origin: Option<Point>,
    target: Option<Point>,
    key: Option<ColorKey>,
}

impl PixelRecord {
    /// A record at `(x, y)` with no origin anchor (target side).
    pub fn new(x: u32, y: u32, color: [u8; 4]) -> Self {
        Self {
            pos: Point::new(f64::from(x), f64::from(y)),
            color,
            origin: None,
            target: None,
            key: None,
        }
    }

    /// A record at `(x, y)` whose origin is anchored there (source side).
    pub fn anchored(x: u32, y: u32, color: [u8; 4]) -> Self {
        let mut p = Self::new(x, y, color);
        p.origin = Some(p.pos);
        p
    }

    /// Current position.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Straight-alpha RGBA8 color. Never changes for the lifetime of the record.
    pub fn color(&self) -> [u8; 4] {
        self.color
    }

    /// Extraction position for source-side records.
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Matched target coordinate, if any.
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Memoized color key; computed at most once between invalidations.
    pub fn color_key(&mut self) -> ColorKey {
        let color = self.color;
        *self.key.get_or_insert_with(|| ColorKey::from_rgba(color))
    }

    /// Cached color key without computing it.
    pub fn cached_color_key(&self) -> Option<ColorKey> {
        self.key
    }

    pub(crate) fn invalidate_color_key(&mut self) {
        self.key = None;
    }

    pub(crate) fn set_target(&mut self, target: Point) {
        self.target = Some(target);
    }

    pub(crate) fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    /// Return to the pre-match state: position back at origin, no target, no cached key.
    pub(crate) fn reset(&mut self) {
        if let Some(origin) = self.origin {
            self.pos = origin;
        }
        self.target = None;
        self.key = None;
    }
}
