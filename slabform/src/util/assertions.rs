use crate::geometry::primitives::{Point, Rect};

/// True when every point lies within `rect` grown by `slack` on all sides.
pub fn points_within_rect(points: &[Point], rect: &Rect, slack: f64) -> bool {
    let envelope = rect.inflate(slack);
    points.iter().all(|p| envelope.contains(*p))
}

/// True when `kept` and `dropped` partition `all`: together they cover every
/// point exactly once and no point appears on both sides.
pub fn is_partition(all: &[Point], kept: &[Point], dropped: &[Point]) -> bool {
    kept.len() + dropped.len() == all.len()
        && all.iter().all(|p| kept.contains(p) != dropped.contains(p))
}
