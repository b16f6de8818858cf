use crate::geometry::primitives::{Outline, Point};

/// Walks one row from `origin` in column steps of `step` until the frame
/// maximum and reports the first and last probe point inside the outline.
/// `None` when the entire row misses the outline.
pub fn outline_row_span(
    origin: Point,
    max: Point,
    step: f64,
    outline: &Outline,
) -> Option<(Point, Point)> {
    debug_assert!(step > 0.0);
    let mut first = None;
    let mut last = None;
    let mut x = origin.0;
    while x < max.0 {
        let probe = Point(x, origin.1);
        if outline.contains(probe) {
            if first.is_none() {
                first = Some(probe);
            }
            last = Some(probe);
        }
        x += step;
    }
    first.zip(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Outline;

    fn square() -> Outline {
        Outline::new(vec![
            Point(0.0, 0.0),
            Point(100.0, 0.0),
            Point(100.0, 100.0),
            Point(0.0, 100.0),
        ])
        .unwrap()
    }

    /// L-shape: right half only covered up to y = 50.
    fn l_shape() -> Outline {
        Outline::new(vec![
            Point(0.0, 0.0),
            Point(100.0, 0.0),
            Point(100.0, 50.0),
            Point(50.0, 50.0),
            Point(50.0, 100.0),
            Point(0.0, 100.0),
        ])
        .unwrap()
    }

    #[test]
    fn span_covers_the_interior_columns() {
        let span = outline_row_span(Point(5.0, 50.0), Point(200.0, 200.0), 10.0, &square());
        //columns 5, 15, ..., 195; inside are 5..=95
        assert_eq!(span, Some((Point(5.0, 50.0), Point(95.0, 50.0))));
    }

    #[test]
    fn span_is_none_when_the_row_misses_the_outline() {
        let span = outline_row_span(Point(5.0, 150.0), Point(200.0, 200.0), 10.0, &square());
        assert_eq!(span, None);
    }

    #[test]
    fn span_shortens_in_a_notched_row() {
        //row above the notch only spans the left leg
        let high = outline_row_span(Point(5.0, 75.0), Point(200.0, 200.0), 10.0, &l_shape());
        assert_eq!(high, Some((Point(5.0, 75.0), Point(45.0, 75.0))));
        //row below the notch spans the full width
        let low = outline_row_span(Point(5.0, 25.0), Point(200.0, 200.0), 10.0, &l_shape());
        assert_eq!(low, Some((Point(5.0, 25.0), Point(95.0, 25.0))));
    }

    #[test]
    fn span_respects_the_frame_maximum() {
        //walk stops at x = 60 even though the outline continues
        let span = outline_row_span(Point(5.0, 50.0), Point(60.0, 200.0), 10.0, &square());
        assert_eq!(span, Some((Point(5.0, 50.0), Point(55.0, 50.0))));
    }
}
