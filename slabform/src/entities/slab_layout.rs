use crate::geometry::primitives::Point;
use std::collections::BTreeMap;

/// The result of a layout pass: insertion points for every part category.
/// Optional collections are `None` when their category was not enabled.
#[derive(Clone, Debug, Default)]
pub struct SlabLayout {
    /// Cast groups, absent when only the shoring is placed
    pub cast: Option<Vec<Point>>,
    /// Beams
    pub ld: Vec<Point>,
    /// Edge beams
    pub lds: Option<Vec<Point>>,
    /// Start joists, one per joist line
    pub start_lp: Option<Vec<Point>>,
    /// Joists
    pub lp: Vec<Point>,
    /// Head pieces
    pub head: Vec<Point>,
    /// End joist rows keyed by row index, in row order
    pub end_lp: Option<BTreeMap<usize, EndLpRow>>,
}

/// One end joist row: where the row starts and the extreme points of the
/// stretch that is still inside the slab outline, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EndLpRow {
    pub origin: Point,
    pub span: Option<(Point, Point)>,
}

impl SlabLayout {
    /// Total number of placement points over all categories.
    /// End joist rows count the two span extremes when present.
    pub fn total_points(&self) -> usize {
        let opt_len = |points: &Option<Vec<Point>>| points.as_ref().map_or(0, Vec::len);
        let end_lp = self.end_lp.as_ref().map_or(0, |rows| {
            rows.values().filter(|row| row.span.is_some()).count() * 2
        });
        opt_len(&self.cast)
            + self.ld.len()
            + opt_len(&self.lds)
            + opt_len(&self.start_lp)
            + self.lp.len()
            + self.head.len()
            + end_lp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_points_covers_all_categories() {
        let mut layout = SlabLayout {
            ld: vec![Point(0.0, 0.0), Point(1.0, 0.0)],
            lp: vec![Point(0.0, 1.0)],
            head: vec![Point(2.0, 2.0)],
            ..SlabLayout::default()
        };
        assert_eq!(layout.total_points(), 4);

        layout.cast = Some(vec![Point(5.0, 5.0)]);
        let mut rows = BTreeMap::new();
        rows.insert(
            0,
            EndLpRow {
                origin: Point(0.0, 0.0),
                span: Some((Point(0.0, 0.0), Point(9.0, 0.0))),
            },
        );
        rows.insert(
            1,
            EndLpRow {
                origin: Point(0.0, 4.0),
                span: None,
            },
        );
        layout.end_lp = Some(rows);
        assert_eq!(layout.total_points(), 7);
    }
}
