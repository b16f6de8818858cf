use crate::geometry::primitives::Point;
use anyhow::{Result, ensure};

/// Geometric primitive representing a directed line segment.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn try_new(start: Point, end: Point) -> Result<Self> {
        ensure!(
            start != end,
            "degenerate edge: start and end are both {start:?}"
        );
        Ok(Edge { start, end })
    }

    pub fn x_min(&self) -> f64 {
        self.start.0.min(self.end.0)
    }

    pub fn x_max(&self) -> f64 {
        self.start.0.max(self.end.0)
    }

    pub fn y_min(&self) -> f64 {
        self.start.1.min(self.end.1)
    }

    pub fn y_max(&self) -> f64 {
        self.start.1.max(self.end.1)
    }

    /// True when the two segments share a point, endpoints included.
    /// Collinear overlap does not count as an intersection.
    pub fn intersects(&self, other: &Edge) -> bool {
        //bounding boxes do not overlap
        if self.x_min() > other.x_max()
            || other.x_min() > self.x_max()
            || self.y_min() > other.y_max()
            || other.y_min() > self.y_max()
        {
            return false;
        }
        let r = (self.end.0 - self.start.0, self.end.1 - self.start.1);
        let s = (other.end.0 - other.start.0, other.end.1 - other.start.1);
        let denom = r.0 * s.1 - r.1 * s.0;
        if denom == 0.0 {
            //parallel
            return false;
        }
        let d = (other.start.0 - self.start.0, other.start.1 - self.start.1);
        let t = (d.0 * s.1 - d.1 * s.0) / denom;
        let u = (d.0 * r.1 - d.1 * r.0) / denom;
        (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments_intersect() {
        let e1 = Edge::try_new(Point(0.0, 0.0), Point(2.0, 2.0)).unwrap();
        let e2 = Edge::try_new(Point(0.0, 2.0), Point(2.0, 0.0)).unwrap();
        assert!(e1.intersects(&e2));
        assert!(e2.intersects(&e1));
    }

    #[test]
    fn distant_segments_do_not_intersect() {
        let e1 = Edge::try_new(Point(0.0, 0.0), Point(1.0, 0.0)).unwrap();
        let e2 = Edge::try_new(Point(0.0, 5.0), Point(1.0, 5.0)).unwrap();
        assert!(!e1.intersects(&e2));
    }

    #[test]
    fn touching_endpoint_counts_as_intersection() {
        let e1 = Edge::try_new(Point(0.0, 0.0), Point(1.0, 1.0)).unwrap();
        let e2 = Edge::try_new(Point(1.0, 1.0), Point(2.0, 0.0)).unwrap();
        assert!(e1.intersects(&e2));
    }

    #[test]
    fn try_new_rejects_zero_length() {
        assert!(Edge::try_new(Point(1.0, 1.0), Point(1.0, 1.0)).is_err());
    }
}
