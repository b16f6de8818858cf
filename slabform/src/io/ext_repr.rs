use crate::entities::{LdsMode, Orientation, PartRole};
use serde::{Deserialize, Serialize};

/// External representation of everything a layout pass needs:
/// frame corners, slab outline, part catalog, duty selection and options.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSlabInstance {
    /// The name of the instance
    pub name: String,
    /// Lower left corner of the working rectangle (x, y)
    pub start: (f64, f64),
    /// Upper right corner of the working rectangle (x, y)
    pub max: (f64, f64),
    /// Vertices of the slab outline, in drawing order
    pub outline: Vec<(f64, f64)>,
    /// The full part catalog
    pub parts: Vec<ExtPart>,
    /// References of the parts selected for each duty
    pub selection: ExtPartSelection,
    pub options: ExtLayoutOptions,
}

/// External representation of a [`Part`](crate::entities::Part).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPart {
    pub name: String,
    /// Unique reference code identifying the part in the catalog
    pub reference: String,
    pub width: f64,
    pub height: f64,
    pub role: PartRole,
    /// Modulation group the part belongs to, in drawing units
    pub modulation: u32,
    /// Correction applied to the insertion point when the part is drawn
    #[serde(default)]
    pub pivot: (f64, f64),
    /// Offset of the first row along the orientation axis
    #[serde(default)]
    pub start_offset: f64,
}

/// The part selected for each duty, by catalog reference.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPartSelection {
    pub cast: String,
    pub lp: String,
    pub ld: String,
    pub head: String,
}

/// External representation of [`LayoutOptions`](crate::entities::LayoutOptions).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtLayoutOptions {
    pub orientation: Orientation,
    /// Rotation of the whole lattice, in degrees
    pub global_orientation_angle: f64,
    /// Rotation of cast groups, in degrees.
    /// Falls back to `global_orientation_angle` if not specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_angle: Option<f64>,
    pub distance_between_lp_and_ld: f64,
    pub distance_between_lp: f64,
    pub outline_distance: f64,
    pub cast_group_size: usize,
    #[serde(default)]
    pub use_lds: bool,
    #[serde(default)]
    pub use_start_lp: bool,
    #[serde(default)]
    pub use_end_lp: bool,
    #[serde(default)]
    pub only_shoring: bool,
    /// Reference of the part used for start joists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_start_lp: Option<String>,
    #[serde(default)]
    pub lds_mode: LdsMode,
}

/// External representation of a [`SlabLayout`](crate::entities::SlabLayout).
/// Point collections are flattened to `(x, y)` pairs.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSlabLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<(f64, f64)>>,
    pub ld: Vec<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lds: Option<Vec<(f64, f64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lp: Option<Vec<(f64, f64)>>,
    pub lp: Vec<(f64, f64)>,
    pub head: Vec<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_lp: Option<Vec<ExtEndLpRow>>,
    /// Total number of placement points over all categories
    pub total_points: usize,
}

/// One end joist row of an [`ExtSlabLayout`].
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtEndLpRow {
    pub row: usize,
    /// Where the row starts, clipping aside
    pub origin: (f64, f64),
    /// Extreme points of the stretch inside the outline.
    /// Absent when the row misses the outline entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<((f64, f64), (f64, f64))>,
}
