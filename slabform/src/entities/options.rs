use crate::entities::Part;
use serde::{Deserialize, Serialize};

/// Along which building axis the lattice rows are counted. Controls which
/// coordinate the edge row predicates compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// How the edge beam (lds) point collection is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LdsMode {
    /// Edge beams take the first and last row of the regular beam lattice.
    #[default]
    EdgeRows,
    /// Edge beams are walked row by row and clipped against the slab outline.
    ClippedRowEnds(RowEndRule),
}

/// Where a boundary clipped row places its final point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowEndRule {
    /// At the last column whose lookahead probe was still inside the outline.
    LastInteriorColumn,
    /// Same placement, but an extra margin probe is evaluated first.
    /// The probe outcome does not currently alter the placement. Kept as a
    /// separate rule until the intended margin behavior is settled.
    MarginProbe,
}

/// All tunables of a layout pass.
#[derive(Clone, Debug)]
pub struct LayoutOptions {
    pub orientation: Orientation,
    /// Rotation of the whole lattice, in degrees. 90 keeps the lattice axis aligned.
    pub global_orientation_angle: f64,
    /// Rotation applied to cast groups, in degrees. Usually equal to
    /// [`Self::global_orientation_angle`].
    pub orientation_angle: f64,
    /// Clearance between a joist and the neighboring beam
    pub distance_between_lp_and_ld: f64,
    /// Clearance between two neighboring joists
    pub distance_between_lp: f64,
    /// Margin kept from the slab outline
    pub outline_distance: f64,
    /// Number of cast parts placed as one group
    pub cast_group_size: usize,
    /// Place dedicated edge beams on the lattice rim
    pub use_lds: bool,
    /// Start each joist line with a dedicated start joist
    pub use_start_lp: bool,
    /// Close each joist line with outline clipped end joists
    pub use_end_lp: bool,
    /// Skip the cast category entirely and only place the shoring
    pub only_shoring: bool,
    /// The part used for start joists, required when `use_start_lp` is set
    pub selected_start_lp: Option<Part>,
    pub lds_mode: LdsMode,
}
