use std::hash::{Hash, Hasher};

/// Geometric primitive representing a point in the slab plane.
/// Also doubles as a displacement vector.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        let (dx, dy) = (other.0 - self.0, other.1 - self.1);
        dx.powi(2) + dy.powi(2)
    }

    /// Rotates the point counterclockwise around the origin by `angle` radians.
    pub fn rotate(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point(self.0 * cos - self.1 * sin, self.0 * sin + self.1 * cos)
    }

    /// Unit vector pointing `angle` radians counterclockwise from the x-axis.
    pub fn unit_vector(angle: f64) -> Point {
        Point(1.0, 0.0).rotate(angle)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(Point(x, y): Point) -> Self {
        (x, y)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
        self.1.to_bits().hash(state);
    }
}
