use crate::geometry::primitives::Point;
use anyhow::{Result, ensure};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A formwork part from the catalog. Parts are immutable during a layout pass,
/// the engine only reads their dimensions and metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    /// Human readable name, as shown on the selection screens
    pub name: String,
    /// Unique reference code identifying the part in the catalog
    pub reference: String,
    pub width: f64,
    pub height: f64,
    /// Which duty this part can serve in the assembly
    pub role: PartRole,
    /// Modulation group the part belongs to, in drawing units
    pub modulation: u32,
    /// Correction applied to the insertion point when the part is drawn
    pub pivot: Point,
    /// Offset of the first row along the orientation axis
    pub start_offset: f64,
}

impl Part {
    pub fn new(
        name: String,
        reference: String,
        dims: (f64, f64),
        role: PartRole,
        modulation: u32,
        pivot: Point,
        start_offset: f64,
    ) -> Result<Self> {
        let (width, height) = dims;
        ensure!(
            width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite(),
            "part {reference:?} must have positive dimensions (width: {width}, height: {height})"
        );
        ensure!(
            start_offset.is_finite(),
            "part {reference:?} has a non-finite start offset"
        );
        Ok(Part {
            name,
            reference,
            width,
            height,
            role,
            modulation,
            pivot,
            start_offset,
        })
    }

    pub fn greatest_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn smallest_dimension(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// The duty a part serves in the slab assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    Box,
    Form,
    Lp,
    Ld,
    Head,
    Cast,
}

/// Catalog groups as presented on the part selection screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartGroup {
    /// Plywood forms and filler boxes
    FormsAndBoxes,
    /// Joists
    Lp,
    /// Beams
    Ld,
}

/// All parts of `group` belonging to the given modulation.
pub fn filter_catalog(parts: &[Part], group: PartGroup, modulation: u32) -> Vec<&Part> {
    parts
        .iter()
        .filter(|p| {
            p.modulation == modulation
                && match group {
                    PartGroup::FormsAndBoxes => matches!(p.role, PartRole::Box | PartRole::Form),
                    PartGroup::Lp => p.role == PartRole::Lp,
                    PartGroup::Ld => p.role == PartRole::Ld,
                }
        })
        .collect()
}

/// The distinct modulations present in the catalog, in first-encountered order.
pub fn modulations(parts: &[Part]) -> Vec<u32> {
    parts.iter().map(|p| p.modulation).unique().collect()
}
