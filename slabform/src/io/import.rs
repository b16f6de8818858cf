use crate::entities::{LayoutContext, LayoutOptions, Part, PartRole, PartSelection};
use crate::geometry::primitives::{Outline, Point};
use crate::io::ext_repr::{ExtLayoutOptions, ExtPart, ExtSlabInstance};
use anyhow::{Context, Result, anyhow, ensure};
use itertools::Itertools;
use log::warn;

/// Imports an instance into the library.
/// Final validation is delegated to [`LayoutContext::new`].
pub fn import(ext_instance: &ExtSlabInstance) -> Result<LayoutContext> {
    let catalog = import_catalog(&ext_instance.parts)?;

    let selection = PartSelection {
        cast: resolve(&catalog, &ext_instance.selection.cast, PartRole::Cast)?,
        lp: resolve(&catalog, &ext_instance.selection.lp, PartRole::Lp)?,
        ld: resolve(&catalog, &ext_instance.selection.ld, PartRole::Ld)?,
        head: resolve(&catalog, &ext_instance.selection.head, PartRole::Head)?,
    };

    let options = import_options(&ext_instance.options, &catalog)?;

    let vertices = ext_instance
        .outline
        .iter()
        .map(|&(x, y)| Point(x, y))
        .collect_vec();
    let outline = Outline::new(vertices).context("invalid slab outline")?;

    LayoutContext::new(
        Point::from(ext_instance.start),
        Point::from(ext_instance.max),
        selection,
        options,
        outline,
    )
}

/// Imports a part catalog into the library.
pub fn import_catalog(ext_parts: &[ExtPart]) -> Result<Vec<Part>> {
    let catalog = ext_parts
        .iter()
        .map(import_part)
        .collect::<Result<Vec<Part>>>()?;
    ensure!(
        catalog.iter().map(|p| &p.reference).all_unique(),
        "part references must be unique within the catalog"
    );
    Ok(catalog)
}

fn import_part(ext_part: &ExtPart) -> Result<Part> {
    Part::new(
        ext_part.name.clone(),
        ext_part.reference.clone(),
        (ext_part.width, ext_part.height),
        ext_part.role,
        ext_part.modulation,
        Point::from(ext_part.pivot),
        ext_part.start_offset,
    )
}

/// Looks a selected reference up in the catalog and checks it can serve `role`.
fn resolve(catalog: &[Part], reference: &str, role: PartRole) -> Result<Part> {
    let part = catalog
        .iter()
        .find(|p| p.reference == reference)
        .ok_or_else(|| anyhow!("selected part {reference:?} is not in the catalog"))?;
    ensure!(
        part.role == role,
        "selected part {reference:?} cannot serve as {role:?} (role: {:?})",
        part.role
    );
    Ok(part.clone())
}

fn import_options(ext_options: &ExtLayoutOptions, catalog: &[Part]) -> Result<LayoutOptions> {
    let selected_start_lp = match &ext_options.selected_start_lp {
        Some(reference) => Some(resolve(catalog, reference, PartRole::Lp)?),
        None => None,
    };
    if selected_start_lp.is_some() && !ext_options.use_start_lp {
        warn!("[IMPORT] a start lp part is selected but start joists are disabled");
    }

    Ok(LayoutOptions {
        orientation: ext_options.orientation,
        global_orientation_angle: ext_options.global_orientation_angle,
        orientation_angle: ext_options
            .orientation_angle
            .unwrap_or(ext_options.global_orientation_angle),
        distance_between_lp_and_ld: ext_options.distance_between_lp_and_ld,
        distance_between_lp: ext_options.distance_between_lp,
        outline_distance: ext_options.outline_distance,
        cast_group_size: ext_options.cast_group_size,
        use_lds: ext_options.use_lds,
        use_start_lp: ext_options.use_start_lp,
        use_end_lp: ext_options.use_end_lp,
        only_shoring: ext_options.only_shoring,
        selected_start_lp,
        lds_mode: ext_options.lds_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::LdsMode;
    use crate::entities::Orientation;
    use crate::io::ext_repr::ExtPartSelection;

    fn ext_part(reference: &str, width: f64, height: f64, role: PartRole) -> ExtPart {
        ExtPart {
            name: reference.to_uppercase(),
            reference: reference.to_string(),
            width,
            height,
            role,
            modulation: 50,
            pivot: (0.0, 0.0),
            start_offset: 0.0,
        }
    }

    fn instance() -> ExtSlabInstance {
        ExtSlabInstance {
            name: "unit".to_string(),
            start: (0.0, 0.0),
            max: (1000.0, 1000.0),
            outline: vec![(0.0, 0.0), (1000.0, 0.0), (1000.0, 1000.0), (0.0, 1000.0)],
            parts: vec![
                ext_part("cast-050", 50.0, 50.0, PartRole::Cast),
                ext_part("lp-120", 12.0, 5.0, PartRole::Lp),
                ext_part("ld-080", 8.0, 20.0, PartRole::Ld),
                ext_part("head-010", 10.0, 15.0, PartRole::Head),
            ],
            selection: ExtPartSelection {
                cast: "cast-050".to_string(),
                lp: "lp-120".to_string(),
                ld: "ld-080".to_string(),
                head: "head-010".to_string(),
            },
            options: ExtLayoutOptions {
                orientation: Orientation::Vertical,
                global_orientation_angle: 90.0,
                orientation_angle: None,
                distance_between_lp_and_ld: 2.0,
                distance_between_lp: 2.0,
                outline_distance: 10.0,
                cast_group_size: 4,
                use_lds: false,
                use_start_lp: false,
                use_end_lp: false,
                only_shoring: false,
                selected_start_lp: None,
                lds_mode: LdsMode::EdgeRows,
            },
        }
    }

    #[test]
    fn import_builds_a_validated_context() {
        let ctx = import(&instance()).unwrap();
        assert_eq!(ctx.parts.cast.reference, "cast-050");
        assert_eq!(ctx.parts.lp.name, "LP-120");
        assert_eq!(ctx.outline.n_vertices(), 4);
    }

    #[test]
    fn import_rejects_an_unknown_selection() {
        let mut ext = instance();
        ext.selection.ld = "ld-999".to_string();
        assert!(import(&ext).is_err());
    }

    #[test]
    fn import_rejects_a_mis_roled_selection() {
        let mut ext = instance();
        ext.selection.lp = "ld-080".to_string();
        assert!(import(&ext).is_err());
    }

    #[test]
    fn import_rejects_duplicate_references() {
        let mut ext = instance();
        ext.parts.push(ext_part("lp-120", 6.0, 5.0, PartRole::Lp));
        assert!(import(&ext).is_err());
    }

    #[test]
    fn cast_angle_falls_back_to_the_global_angle() {
        let mut ext = instance();
        ext.options.global_orientation_angle = 45.0;
        let ctx = import(&ext).unwrap();
        assert_eq!(ctx.options.orientation_angle, 45.0);

        ext.options.orientation_angle = Some(90.0);
        let ctx = import(&ext).unwrap();
        assert_eq!(ctx.options.orientation_angle, 90.0);
    }

    #[test]
    fn start_joist_selection_resolves_against_the_catalog() {
        let mut ext = instance();
        ext.parts.push(ext_part("lp-060", 6.0, 5.0, PartRole::Lp));
        ext.options.use_start_lp = true;
        ext.options.selected_start_lp = Some("lp-060".to_string());
        let ctx = import(&ext).unwrap();
        let start_lp = ctx.options.selected_start_lp.unwrap();
        assert_eq!(start_lp.width, 6.0);
    }

    #[test]
    fn import_rejects_a_degenerate_outline() {
        let mut ext = instance();
        ext.outline = vec![(0.0, 0.0), (1000.0, 0.0)];
        assert!(import(&ext).is_err());
    }
}
