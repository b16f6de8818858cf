use crate::entities::LayoutContext;
use crate::geometry::primitives::Point;
use crate::layout::CancelToken;
use anyhow::{Result, ensure};

/// The working frame a lattice is generated in: the rectangle to tile and the
/// declared rotation of its rows.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Frame {
    pub start: Point,
    pub max: Point,
    /// Lattice rotation in degrees, 90 keeps rows axis-aligned
    pub orientation_angle: f64,
}

impl Frame {
    pub fn of(ctx: &LayoutContext) -> Self {
        Frame {
            start: ctx.start,
            max: ctx.max,
            orientation_angle: ctx.options.global_orientation_angle,
        }
    }
}

/// Lattice parameters expressed in the unrotated column/row frame of a part
/// category: where the lattice origin sits relative to the frame start, how far
/// apart columns and rows are, and the bias of the first column/row.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct LatticeParams {
    pub origin_offset: (f64, f64),
    pub col_step: f64,
    pub row_step: f64,
    pub col_bias: f64,
    pub row_bias: f64,
}

/// Column/row quantities of a [`LatticeParams`] projected onto the x/y axes
/// for a given lattice rotation.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct BlendedSteps {
    pub x_bias: f64,
    pub y_bias: f64,
    pub x_step: f64,
    pub y_step: f64,
}

impl LatticeParams {
    /// Projects the column/row quantities onto the x/y axes. At 90 degrees the
    /// projection is the identity, columns map to x and rows to y.
    pub fn blend(&self, orientation_angle: f64) -> BlendedSteps {
        let theta = (90.0 - orientation_angle).to_radians();
        let (sin, cos) = theta.sin_cos();
        BlendedSteps {
            x_bias: self.col_bias * cos + self.row_bias * sin,
            y_bias: self.row_bias * cos + self.col_bias * sin,
            x_step: self.col_step * cos + self.row_step * sin,
            y_step: self.row_step * cos + self.col_step * sin,
        }
    }
}

/// Generates the lattice points for `params` inside `frame`, row-major:
/// y advances per row, x per column, both strictly increasing. Points are
/// emitted while they lie strictly below the frame maximum on both axes.
///
/// Fails fast when the blended steps are not strictly positive, the walk would
/// never terminate otherwise. The cancel token is polled once per row.
pub fn generate(frame: Frame, params: LatticeParams, cancel: &CancelToken) -> Result<Vec<Point>> {
    let steps = params.blend(frame.orientation_angle);
    ensure!(
        steps.x_step > 0.0 && steps.y_step > 0.0,
        "non-positive effective lattice step (x: {}, y: {}) for angle {}",
        steps.x_step,
        steps.y_step,
        frame.orientation_angle
    );

    let origin = Point(
        frame.start.0 + params.origin_offset.0,
        frame.start.1 + params.origin_offset.1,
    );

    let mut points = vec![];
    let mut y = origin.1 + steps.y_bias;
    while y < frame.max.1 {
        ensure!(!cancel.is_cancelled(), "layout pass cancelled");
        let mut x = origin.0 + steps.x_bias;
        while x < frame.max.0 {
            points.push(Point(x, y));
            x += steps.x_step;
        }
        y += steps.y_step;
    }
    debug_assert!(
        points
            .iter()
            .all(|p| p.0 < frame.max.0 && p.1 < frame.max.1)
    );
    Ok(points)
}
