use crate::entities::{LayoutContext, RowEndRule};
use crate::geometry::primitives::Point;
use crate::layout::CancelToken;
use crate::layout::lattice::LatticeParams;
use anyhow::{Result, ensure};
use log::debug;

/// How far past the next column the walk probes before leaving a row, in
/// drawing units.
const LOOKAHEAD: f64 = 10.0;

/// Lattice parameters of the boundary walk: rows at beam pitch starting one
/// joist line up, columns at cast width.
pub(crate) fn walk_params(ctx: &LayoutContext) -> LatticeParams {
    let lp = &ctx.parts.lp;
    let ld = &ctx.parts.ld;
    let spacing = ctx.options.distance_between_lp_and_ld;
    LatticeParams {
        origin_offset: (0.0, lp.height + spacing),
        col_step: ctx.parts.cast.width,
        row_step: ld.width + 2.0 * spacing + lp.height,
        col_bias: 0.0,
        row_bias: 0.0,
    }
}

/// Edge beams clipped against the slab outline: per row, the row origin plus
/// the column where the walk left the outline. The walk extends the row while
/// a lookahead probe one column ahead is still inside.
pub fn clipped_row_ends(
    ctx: &LayoutContext,
    rule: RowEndRule,
    cancel: &CancelToken,
) -> Result<Vec<Point>> {
    let params = walk_params(ctx);
    let steps = params.blend(ctx.options.global_orientation_angle);
    ensure!(
        steps.x_step > 0.0 && steps.y_step > 0.0,
        "non-positive effective lattice step (x: {}, y: {}) for angle {}",
        steps.x_step,
        steps.y_step,
        ctx.options.global_orientation_angle
    );

    let x0 = ctx.start.0 + params.origin_offset.0 + steps.x_bias;
    let mut points = vec![];
    let mut y = ctx.start.1 + params.origin_offset.1 + steps.y_bias;
    while y < ctx.max.1 {
        ensure!(!cancel.is_cancelled(), "layout pass cancelled");
        points.push(Point(x0, y));

        let mut x = x0;
        while x < ctx.max.0
            && ctx
                .outline
                .contains(Point(x + steps.x_step + LOOKAHEAD, y))
        {
            x += steps.x_step;
        }
        let row_end = match rule {
            RowEndRule::LastInteriorColumn => Point(x, y),
            RowEndRule::MarginProbe => {
                //the probe outcome does not alter the placement, see RowEndRule
                let _past_margin = !ctx.outline.contains(Point(
                    x + ctx.options.outline_distance / 2.0 + ctx.parts.cast.width,
                    y,
                ));
                Point(x, y)
            }
        };
        points.push(row_end);
        y += steps.y_step;
    }
    debug!("[LDS] {} clipped row points placed", points.len());
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{LayoutOptions, LdsMode, Orientation, Part, PartRole, PartSelection};
    use crate::geometry::primitives::Outline;

    fn part(reference: &str, width: f64, height: f64, role: PartRole) -> Part {
        Part::new(
            reference.to_uppercase(),
            reference.to_string(),
            (width, height),
            role,
            50,
            Point(0.0, 0.0),
            0.0,
        )
        .unwrap()
    }

    fn context(outline: Outline) -> LayoutContext {
        let parts = PartSelection {
            cast: part("cast-050", 50.0, 50.0, PartRole::Cast),
            lp: part("lp-120", 12.0, 5.0, PartRole::Lp),
            ld: part("ld-080", 8.0, 20.0, PartRole::Ld),
            head: part("head-010", 10.0, 15.0, PartRole::Head),
        };
        let options = LayoutOptions {
            orientation: Orientation::Vertical,
            global_orientation_angle: 90.0,
            orientation_angle: 90.0,
            distance_between_lp_and_ld: 2.0,
            distance_between_lp: 2.0,
            outline_distance: 10.0,
            cast_group_size: 3,
            use_lds: true,
            use_start_lp: false,
            use_end_lp: false,
            only_shoring: false,
            selected_start_lp: None,
            lds_mode: LdsMode::ClippedRowEnds(RowEndRule::LastInteriorColumn),
        };
        LayoutContext::new(Point(0.0, 0.0), Point(200.0, 60.0), parts, options, outline).unwrap()
    }

    fn wide_outline() -> Outline {
        //covers the left 120 units of the frame, with headroom on y
        Outline::new(vec![
            Point(-10.0, -10.0),
            Point(120.0, -10.0),
            Point(120.0, 70.0),
            Point(-10.0, 70.0),
        ])
        .unwrap()
    }

    #[test]
    fn rows_clip_where_the_lookahead_probe_leaves_the_outline() {
        let ctx = context(wide_outline());
        let points =
            clipped_row_ends(&ctx, RowEndRule::LastInteriorColumn, &CancelToken::new()).unwrap();
        //rows at y = 7, 24, 41, 58; two points each
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], Point(0.0, 7.0));
        //x stops at 100: the probe at 100 + 50 + 10 falls outside the outline
        assert_eq!(points[1], Point(100.0, 7.0));
        assert_eq!(points[2], Point(0.0, 24.0));
    }

    #[test]
    fn both_row_end_rules_emit_identical_points() {
        let ctx = context(wide_outline());
        let last_interior =
            clipped_row_ends(&ctx, RowEndRule::LastInteriorColumn, &CancelToken::new()).unwrap();
        let margin_probe =
            clipped_row_ends(&ctx, RowEndRule::MarginProbe, &CancelToken::new()).unwrap();
        assert_eq!(last_interior, margin_probe);
    }

    #[test]
    fn walk_stops_at_the_frame_maximum() {
        //outline reaches past the frame, the walk must not
        let outline = Outline::new(vec![
            Point(-10.0, -10.0),
            Point(500.0, -10.0),
            Point(500.0, 70.0),
            Point(-10.0, 70.0),
        ])
        .unwrap();
        let ctx = context(outline);
        let points =
            clipped_row_ends(&ctx, RowEndRule::LastInteriorColumn, &CancelToken::new()).unwrap();
        assert!(points.iter().all(|p| p.0 <= 200.0));
    }

    #[test]
    fn clipping_honors_cancellation() {
        let ctx = context(wide_outline());
        let cancel = CancelToken::new();
        cancel.cancel();
        assert!(clipped_row_ends(&ctx, RowEndRule::LastInteriorColumn, &cancel).is_err());
    }
}
