use crate::entities::Orientation;
use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Facts about a generated lattice that the filters read: the first and last
/// point the generator emitted, the frame maximum and the declared orientation.
#[derive(Clone, Debug, Copy)]
pub struct LatticeInfo {
    pub first: Point,
    pub last: Point,
    pub max: Point,
    pub orientation: Orientation,
}

/// True when `p` lies on the leading row of a lattice whose first point is
/// `first`, read along the orientation axis.
pub fn is_leading(p: Point, first: Point, orientation: Orientation) -> bool {
    match orientation {
        Orientation::Vertical => p.1 <= first.1,
        Orientation::Horizontal => p.0 <= first.0,
    }
}

/// True when `p` lies on the trailing row of a lattice whose last point is `last`.
pub fn is_trailing(p: Point, last: Point, orientation: Orientation) -> bool {
    match orientation {
        Orientation::Vertical => p.1 >= last.1,
        Orientation::Horizontal => p.0 >= last.0,
    }
}

/// True when `p` lies on either the leading or the trailing row.
pub fn is_edge_row(p: Point, first: Point, last: Point, orientation: Orientation) -> bool {
    is_leading(p, first, orientation) || is_trailing(p, last, orientation)
}

/// The joist continuation query: the lattice point exactly one joist pitch
/// after `current` along the orientation axis, if the lattice has one.
/// Distances are compared with [`FPA`] tolerance.
pub fn below_lp_neighbor(
    points: &[Point],
    current: Point,
    pitch: f64,
    orientation: Orientation,
) -> Option<Point> {
    points.iter().copied().find(|&p| {
        if p == current {
            return false;
        }
        let is_below = match orientation {
            Orientation::Vertical => p.1 < current.1,
            Orientation::Horizontal => p.0 > current.0,
        };
        is_below && FPA(current.distance(&p)) == FPA(pitch)
    })
}

/// Which points of a generated lattice receive a part. Applied after
/// generation, keyed off the first/last emitted point.
#[derive(Clone, Debug, Copy, PartialEq)]
pub enum LatticeFilter {
    /// Keep every lattice point.
    All,
    /// Drop the leading and trailing row, they are reserved for edge beams.
    DropEdgeRows,
    /// Keep only the leading and trailing row.
    KeepEdgeRowsOnly,
    /// Keep only the leading row.
    KeepLeadingRow,
    /// Drop the leading row, it is occupied by the start joists.
    DropLeadingRow,
    /// Column rules for head pieces at the lattice rim.
    HeadColumns {
        cast_width: f64,
        /// Skip columns whose next cast would cross the frame maximum
        skip_trailing: bool,
        /// Skip the column shared with the start joists
        skip_leading: bool,
    },
}

impl LatticeFilter {
    pub fn keep(&self, p: Point, info: &LatticeInfo) -> bool {
        match *self {
            LatticeFilter::All => true,
            LatticeFilter::DropEdgeRows => {
                !is_edge_row(p, info.first, info.last, info.orientation)
            }
            LatticeFilter::KeepEdgeRowsOnly => {
                is_edge_row(p, info.first, info.last, info.orientation)
            }
            LatticeFilter::KeepLeadingRow => is_leading(p, info.first, info.orientation),
            LatticeFilter::DropLeadingRow => !is_leading(p, info.first, info.orientation),
            LatticeFilter::HeadColumns {
                cast_width,
                skip_trailing,
                skip_leading,
            } => {
                !(skip_trailing && p.0 + cast_width >= info.max.0)
                    && !(skip_leading && p.0 <= info.first.0)
            }
        }
    }
}
