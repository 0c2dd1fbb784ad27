use crate::pixels::color_key::ColorKey;
use crate::pixels::record::PixelRecord;

/// Outcome of one matching pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MatchStats {
    /// Source pixels that received a target (`min(|source|, |target|)`).
    pub matched: usize,
    /// Source pixels left without a target.
    pub unmatched_source: usize,
    /// Target pixels never referenced.
    pub unused_target: usize,
}

/// Stable sort by `(h, s, l)` ascending. Equal keys keep their current relative order.
///
/// Every key is primed before sorting so the comparator only reads cached values.
pub fn sort_by_color_key(pixels: &mut [PixelRecord]) {
    for p in pixels.iter_mut() {
        p.color_key();
    }
    pixels.sort_by(|a, b| primed_key(a).cmp_hsl(&primed_key(b)));
}

fn primed_key(p: &PixelRecord) -> ColorKey {
    p.cached_color_key()
        .unwrap_or_else(|| ColorKey::from_rgba(p.color()))
}

/// Sort both lists by color key and pair them by rank.
///
/// `source[i]` receives the coordinates (never the color) of `target[i]` for every
/// `i < min(|source|, |target|)`. Remaining source pixels keep no target.
#[tracing::instrument(skip_all, fields(source = source.len(), target = target.len()))]
pub fn match_by_rank(source: &mut [PixelRecord], target: &mut [PixelRecord]) -> MatchStats {
    sort_by_color_key(source);
    sort_by_color_key(target);

    let n = source.len().min(target.len());
    for (s, t) in source.iter_mut().zip(target.iter()) {
        s.set_target(t.pos());
    }

    let stats = MatchStats {
        matched: n,
        unmatched_source: source.len() - n,
        unused_target: target.len() - n,
    };
    tracing::info!(
        matched = stats.matched,
        unmatched_source = stats.unmatched_source,
        unused_target = stats.unused_target,
        "matched pixels by color rank"
    );
    stats
}

#[cfg(test)]
#[path = "../../tests/unit/matching/matcher.rs"]
mod tests;
