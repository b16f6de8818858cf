use crate::entities::{LayoutOptions, Part, PartRole};
use crate::geometry::primitives::{Outline, Point, Rect};
use anyhow::{Result, ensure};

/// The parts selected for each duty of the assembly.
#[derive(Clone, Debug)]
pub struct PartSelection {
    pub cast: Part,
    pub lp: Part,
    pub ld: Part,
    pub head: Part,
}

impl PartSelection {
    /// Largest dimension over all selected parts, the start joist included.
    pub fn greatest_dimension(&self, options: &LayoutOptions) -> f64 {
        let selected = [&self.cast, &self.lp, &self.ld, &self.head];
        let max = selected
            .iter()
            .map(|p| p.greatest_dimension())
            .fold(0.0, f64::max);
        match &options.selected_start_lp {
            Some(start_lp) => max.max(start_lp.greatest_dimension()),
            None => max,
        }
    }
}

/// All inputs of a single layout pass, validated once at construction and
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct LayoutContext {
    /// Lower left corner of the working rectangle
    pub start: Point,
    /// Upper right corner of the working rectangle
    pub max: Point,
    pub parts: PartSelection,
    pub options: LayoutOptions,
    pub outline: Outline,
}

impl LayoutContext {
    /// Single validation gate: every layout pass starts from a context built here.
    pub fn new(
        start: Point,
        max: Point,
        parts: PartSelection,
        options: LayoutOptions,
        outline: Outline,
    ) -> Result<Self> {
        //working rectangle must be properly oriented and non-degenerate
        Rect::try_new(start.0, start.1, max.0, max.1)?;

        ensure_role(&parts.cast, PartRole::Cast)?;
        ensure_role(&parts.lp, PartRole::Lp)?;
        ensure_role(&parts.ld, PartRole::Ld)?;
        ensure_role(&parts.head, PartRole::Head)?;

        for (name, value) in [
            ("distance_between_lp_and_ld", options.distance_between_lp_and_ld),
            ("distance_between_lp", options.distance_between_lp),
            ("outline_distance", options.outline_distance),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{name} must be non-negative, got {value}"
            );
        }
        ensure!(
            options.global_orientation_angle.is_finite() && options.orientation_angle.is_finite(),
            "orientation angles must be finite"
        );
        ensure!(
            options.cast_group_size >= 1,
            "cast_group_size must be at least 1"
        );

        if options.use_start_lp {
            ensure!(
                options.selected_start_lp.is_some(),
                "start joists are enabled but no start lp part is selected"
            );
        }
        if let Some(start_lp) = &options.selected_start_lp {
            ensure_role(start_lp, PartRole::Lp)?;
        }

        Ok(LayoutContext {
            start,
            max,
            parts,
            options,
            outline,
        })
    }
}

fn ensure_role(part: &Part, role: PartRole) -> Result<()> {
    ensure!(
        part.role == role,
        "part {:?} cannot serve as {:?} (role: {:?})",
        part.reference,
        role,
        part.role
    );
    ensure!(
        part.width > 0.0 && part.height > 0.0,
        "part {:?} has degenerate dimensions",
        part.reference
    );
    Ok(())
}
