use crate::entities::{EndLpRow, LayoutContext, PartSelection};
use crate::geometry::primitives::Point;
use crate::layout::filters::{LatticeFilter, LatticeInfo};
use crate::layout::lattice::{Frame, LatticeParams};
use crate::layout::{CancelToken, lattice, scanline};
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// The part categories placed by the lattice strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Cast,
    Ld,
    Lds,
    StartLp,
    Lp,
    Head,
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            StrategyKind::Cast => "CAST",
            StrategyKind::Ld => "LD",
            StrategyKind::Lds => "LDS",
            StrategyKind::StartLp => "START_LP",
            StrategyKind::Lp => "LP",
            StrategyKind::Head => "HEAD",
        };
        write!(f, "{tag}")
    }
}

/// The full recipe for one category: lattice parameters plus the point filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Descriptor {
    pub params: LatticeParams,
    pub filter: LatticeFilter,
}

/// The descriptor table. Column steps follow the part's width axis, row steps
/// the pitch between consecutive structural rows.
pub fn descriptor(kind: StrategyKind, ctx: &LayoutContext) -> Descriptor {
    let PartSelection { cast, lp, ld, head } = &ctx.parts;
    let opts = &ctx.options;
    let spacing = opts.distance_between_lp_and_ld;
    //pitch between two beams, measured over the joist in between
    let beam_pitch = ld.width + 2.0 * spacing + lp.height;
    let joist_pitch = lp.width + opts.distance_between_lp;
    //pitch between two joist rows, measured over the beam in between
    let joist_row_pitch = ld.width + lp.height + 2.0 * spacing;

    match kind {
        StrategyKind::Cast => Descriptor {
            //cast groups sit past the joist line, halfway up the beam
            params: LatticeParams {
                origin_offset: (lp.height + spacing, ld.height / 2.0),
                col_step: cast.width,
                row_step: cast.height,
                col_bias: 0.0,
                row_bias: 0.0,
            },
            filter: LatticeFilter::All,
        },
        StrategyKind::Ld => Descriptor {
            params: LatticeParams {
                origin_offset: (lp.height + spacing, 0.0),
                col_step: beam_pitch,
                row_step: cast.height,
                col_bias: 0.0,
                row_bias: 0.0,
            },
            filter: match opts.use_lds {
                //edge rows are reserved for the dedicated edge beams
                true => LatticeFilter::DropEdgeRows,
                false => LatticeFilter::All,
            },
        },
        StrategyKind::Lds => Descriptor {
            //same lattice as Ld, complementary filter
            params: descriptor(StrategyKind::Ld, ctx).params,
            filter: LatticeFilter::KeepEdgeRowsOnly,
        },
        StrategyKind::StartLp => Descriptor {
            params: LatticeParams {
                origin_offset: (0.0, 0.0),
                col_step: joist_pitch,
                row_step: joist_row_pitch,
                col_bias: 0.0,
                row_bias: joist_start_offset(ctx),
            },
            filter: LatticeFilter::KeepLeadingRow,
        },
        StrategyKind::Lp => {
            //start joists occupy the first column, shift one column past them
            let origin_offset = match (&opts.selected_start_lp, opts.use_start_lp) {
                (Some(start_lp), true) => (start_lp.width + opts.distance_between_lp, 0.0),
                _ => (0.0, 0.0),
            };
            Descriptor {
                params: LatticeParams {
                    origin_offset,
                    col_step: joist_pitch,
                    row_step: joist_row_pitch,
                    col_bias: 0.0,
                    row_bias: joist_start_offset(ctx),
                },
                filter: match opts.use_start_lp {
                    true => LatticeFilter::DropLeadingRow,
                    false => LatticeFilter::All,
                },
            }
        }
        StrategyKind::Head => Descriptor {
            //head pieces center on the beam axis, tucked behind the joist line
            params: LatticeParams {
                origin_offset: (
                    -(head.height - ld.height) / 2.0,
                    -head.width / 2.0 + lp.height / 2.0,
                ),
                col_step: cast.width,
                row_step: joist_row_pitch,
                col_bias: 0.0,
                row_bias: 0.0,
            },
            filter: LatticeFilter::HeadColumns {
                cast_width: cast.width,
                skip_trailing: opts.use_end_lp,
                skip_leading: opts.use_start_lp,
            },
        },
    }
}

/// The start joist override supplies the row bias when it is in use.
fn joist_start_offset(ctx: &LayoutContext) -> f64 {
    match (&ctx.options.selected_start_lp, ctx.options.use_start_lp) {
        (Some(start_lp), true) => start_lp.start_offset,
        _ => ctx.parts.lp.start_offset,
    }
}

/// Runs one placement strategy: generate the lattice, apply the category
/// filter and expand cast groups where applicable.
pub fn run(kind: StrategyKind, ctx: &LayoutContext, cancel: &CancelToken) -> Result<Vec<Point>> {
    let Descriptor { params, filter } = descriptor(kind, ctx);
    let lattice = lattice::generate(Frame::of(ctx), params, cancel)?;

    let kept = match (lattice.first(), lattice.last()) {
        (Some(&first), Some(&last)) => {
            let info = LatticeInfo {
                first,
                last,
                max: ctx.max,
                orientation: ctx.options.orientation,
            };
            lattice
                .iter()
                .copied()
                .filter(|&p| filter.keep(p, &info))
                .collect_vec()
        }
        //an empty lattice has no edge rows to key off
        _ => lattice,
    };

    let points = match kind {
        StrategyKind::Cast => expand_cast_groups(&kept, ctx),
        _ => kept,
    };
    debug!("[{kind}] {} points placed", points.len());
    Ok(points)
}

/// Every cast lattice point becomes a group of `cast_group_size` points, laid
/// out consecutively along the row axis and rotated around the origin by the
/// cast orientation angle.
fn expand_cast_groups(points: &[Point], ctx: &LayoutContext) -> Vec<Point> {
    let group_size = ctx.options.cast_group_size;
    let cast_width = ctx.parts.cast.width;
    let angle = (90.0 - ctx.options.orientation_angle).to_radians();
    points
        .iter()
        .flat_map(|&p| {
            (0..group_size).map(move |i| Point(p.0 + i as f64 * cast_width, p.1).rotate(angle))
        })
        .collect()
}

/// The end joist category: one entry per joist row, keyed by row index,
/// holding the row origin and the extreme row points still inside the outline.
pub fn end_lp_rows(
    ctx: &LayoutContext,
    cancel: &CancelToken,
) -> Result<BTreeMap<usize, EndLpRow>> {
    let params = descriptor(StrategyKind::Lp, ctx).params;
    let steps = params.blend(ctx.options.global_orientation_angle);
    ensure!(
        steps.x_step > 0.0 && steps.y_step > 0.0,
        "non-positive effective lattice step (x: {}, y: {}) for angle {}",
        steps.x_step,
        steps.y_step,
        ctx.options.global_orientation_angle
    );

    let x0 = ctx.start.0 + params.origin_offset.0 + steps.x_bias;
    let mut rows = BTreeMap::new();
    let mut y = ctx.start.1 + params.origin_offset.1 + steps.y_bias;
    let mut row = 0;
    while y < ctx.max.1 {
        ensure!(!cancel.is_cancelled(), "layout pass cancelled");
        let origin = Point(x0, y);
        let span = scanline::outline_row_span(origin, ctx.max, steps.x_step, &ctx.outline);
        rows.insert(row, EndLpRow { origin, span });
        row += 1;
        y += steps.y_step;
    }
    debug!("[END_LP] {} rows scanned", rows.len());
    Ok(rows)
}
