use crate::geometry::primitives::{Edge, Point, Rect};
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::f64::consts::PI;

/// Geometric primitive representing the outline of a slab: a simple polygon,
/// implicitly closed (the last vertex connects back to the first).
/// Vertex order is preserved as given, containment is orientation-agnostic.
#[derive(Clone, Debug)]
pub struct Outline {
    pub vertices: Vec<Point>,
    /// Bounding box, precomputed at construction
    pub bbox: Rect,
    /// Absolute area of the enclosed region, precomputed at construction
    pub area: f64,
}

impl Outline {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        ensure!(
            vertices.len() >= 3,
            "outline needs at least 3 vertices, got {}",
            vertices.len()
        );
        ensure!(
            vertices.iter().unique().count() == vertices.len(),
            "outline contains duplicate vertices"
        );
        let area = shoelace_area(&vertices).abs();
        ensure!(area > 0.0, "outline encloses no area");

        let n = vertices.len();
        //vertices are unique at this point, so no edge is degenerate
        let edge = |i: usize| Edge::try_new(vertices[i], vertices[(i + 1) % n]).unwrap();
        for i in 0..n {
            for j in (i + 1)..n {
                //edges sharing a vertex are allowed to touch
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if !adjacent {
                    ensure!(
                        !edge(i).intersects(&edge(j)),
                        "outline is self-intersecting (edges {i} and {j} cross)"
                    );
                }
            }
        }

        let bbox = bounding_box(&vertices)?;
        Ok(Outline {
            vertices,
            bbox,
            area,
        })
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge::try_new(self.vertices[i], self.vertices[j]).unwrap()
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    /// True when `point` lies strictly inside the outline, computed by summing
    /// the signed angles subtended by every edge. Points exactly on an edge or
    /// vertex are not reliably classified.
    ///
    /// O(n) in the vertex count per call. Strategies that clip a lattice probe
    /// once per candidate point, making this the dominant cost for large
    /// outlines.
    pub fn contains(&self, point: Point) -> bool {
        if !self.bbox.contains(point) {
            return false;
        }
        let mut total = 0.0;
        for edge in self.edge_iter() {
            total += subtended_angle(point, edge.start, edge.end);
        }
        //the winding angle is a multiple of 2pi inside and 0 outside
        total.abs() >= PI
    }
}

/// Signed angle at `apex` between the directions towards `a` and `b`,
/// normalized into (-pi, pi].
fn subtended_angle(apex: Point, a: Point, b: Point) -> f64 {
    let theta_a = (a.1 - apex.1).atan2(a.0 - apex.0);
    let theta_b = (b.1 - apex.1).atan2(b.0 - apex.0);
    let mut dtheta = theta_b - theta_a;
    while dtheta > PI {
        dtheta -= 2.0 * PI;
    }
    while dtheta < -PI {
        dtheta += 2.0 * PI;
    }
    dtheta
}

fn shoelace_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        let Point(x1, y1) = vertices[i];
        let Point(x2, y2) = vertices[(i + 1) % n];
        sum += x1 * y2 - x2 * y1;
    }
    sum / 2.0
}

fn bounding_box(vertices: &[Point]) -> Result<Rect> {
    let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
    let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);
    for Point(x, y) in vertices {
        x_min = x_min.min(*x);
        y_min = y_min.min(*y);
        x_max = x_max.max(*x);
        y_max = y_max.max(*y);
    }
    Rect::try_new(x_min, y_min, x_max, y_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Outline {
        Outline::new(vec![
            Point(0.0, 0.0),
            Point(10.0, 0.0),
            Point(10.0, 10.0),
            Point(0.0, 10.0),
        ])
        .unwrap()
    }

    /// L-shape: the top-right quadrant of the 10x10 square is missing.
    fn l_shape() -> Outline {
        Outline::new(vec![
            Point(0.0, 0.0),
            Point(10.0, 0.0),
            Point(10.0, 5.0),
            Point(5.0, 5.0),
            Point(5.0, 10.0),
            Point(0.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn contains_classifies_square_interior_and_exterior() {
        let outline = square();
        assert!(outline.contains(Point(5.0, 5.0)));
        assert!(outline.contains(Point(0.1, 9.9)));
        assert!(!outline.contains(Point(-0.1, 5.0)));
        assert!(!outline.contains(Point(5.0, 10.1)));
        assert!(!outline.contains(Point(50.0, 50.0)));
    }

    #[test]
    fn contains_excludes_a_concave_notch() {
        let outline = l_shape();
        assert!(outline.contains(Point(2.0, 8.0)));
        assert!(outline.contains(Point(8.0, 2.0)));
        //inside the bounding box but in the notch
        assert!(!outline.contains(Point(8.0, 8.0)));
        assert!(!outline.contains(Point(5.5, 5.5)));
    }

    #[test]
    fn contains_is_invariant_under_vertex_list_rotation() {
        let vertices = l_shape().vertices;
        let probes = [Point(2.0, 8.0), Point(8.0, 8.0), Point(4.9, 4.9)];
        for shift in 0..vertices.len() {
            let mut rotated = vertices.clone();
            rotated.rotate_left(shift);
            let outline = Outline::new(rotated).unwrap();
            for probe in probes {
                assert_eq!(
                    outline.contains(probe),
                    l_shape().contains(probe),
                    "classification of {probe:?} changed with vertex shift {shift}"
                );
            }
        }
    }

    #[test]
    fn contains_is_orientation_agnostic() {
        let mut reversed = square().vertices;
        reversed.reverse();
        let outline = Outline::new(reversed).unwrap();
        assert!(outline.contains(Point(5.0, 5.0)));
        assert!(!outline.contains(Point(11.0, 5.0)));
    }

    #[test]
    fn new_rejects_degenerate_vertex_lists() {
        //too few vertices
        assert!(Outline::new(vec![Point(0.0, 0.0), Point(1.0, 1.0)]).is_err());
        //zero area
        assert!(
            Outline::new(vec![Point(0.0, 0.0), Point(5.0, 0.0), Point(10.0, 0.0)]).is_err()
        );
        //duplicate vertex
        assert!(
            Outline::new(vec![
                Point(0.0, 0.0),
                Point(10.0, 0.0),
                Point(10.0, 10.0),
                Point(10.0, 0.0),
            ])
            .is_err()
        );
        //bowtie
        assert!(
            Outline::new(vec![
                Point(0.0, 0.0),
                Point(10.0, 10.0),
                Point(10.0, 0.0),
                Point(0.0, 10.0),
            ])
            .is_err()
        );
    }

    #[test]
    fn bbox_and_area_are_precomputed() {
        let outline = l_shape();
        assert_eq!(outline.bbox, Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap());
        assert_eq!(outline.area, 75.0);
    }

    #[test]
    fn edge_iter_walks_the_closed_ring() {
        let outline = l_shape();
        let edges: Vec<_> = outline.edge_iter().collect();
        assert_eq!(edges.len(), outline.n_vertices());
        for (i, edge) in edges.iter().enumerate() {
            assert_ne!(edge.start, edge.end);
            assert_eq!(edge.end, edges[(i + 1) % edges.len()].start);
        }
        assert_eq!(edges[0], outline.edge(0));
    }
}
