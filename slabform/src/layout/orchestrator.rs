use crate::entities::{EndLpRow, LayoutContext, LayoutOptions, LdsMode, SlabLayout};
use crate::geometry::primitives::{Point, Rect};
use crate::layout::strategies::StrategyKind;
use crate::layout::{CancelToken, boundary, strategies};
use crate::util::assertions;
use anyhow::{Result, ensure};
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// One independently schedulable unit of a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Job {
    Cast,
    Ld,
    Lds,
    StartLp,
    Lp,
    Head,
    EndLp,
}

/// The output of one job, tagged so assembly needs no bookkeeping.
enum JobResult {
    Cast(Vec<Point>),
    Ld(Vec<Point>),
    Lds(Vec<Point>),
    StartLp(Vec<Point>),
    Lp(Vec<Point>),
    Head(Vec<Point>),
    EndLp(BTreeMap<usize, EndLpRow>),
}

/// Runs a full layout pass: every category enabled by the options is computed
/// in parallel over the shared read-only context, then assembled into one
/// [`SlabLayout`]. A cancelled token or any failing category fails the pass.
pub fn generate(ctx: &LayoutContext, cancel: &CancelToken) -> Result<SlabLayout> {
    let jobs = enabled_jobs(&ctx.options);
    validate_steps(ctx, &jobs)?;

    let results = jobs
        .par_iter()
        .map(|&job| run_job(ctx, job, cancel))
        .collect::<Result<Vec<JobResult>>>()?;

    let mut layout = SlabLayout::default();
    for result in results {
        match result {
            JobResult::Cast(points) => layout.cast = Some(points),
            JobResult::Ld(points) => layout.ld = points,
            JobResult::Lds(points) => layout.lds = Some(points),
            JobResult::StartLp(points) => layout.start_lp = Some(points),
            JobResult::Lp(points) => layout.lp = points,
            JobResult::Head(points) => layout.head = points,
            JobResult::EndLp(rows) => layout.end_lp = Some(rows),
        }
    }

    debug_assert!(lattice_points_within_frame(ctx, &layout));
    info!(
        "[LAYOUT] pass complete: {} placement points over {} categories",
        layout.total_points(),
        jobs.len()
    );
    Ok(layout)
}

fn enabled_jobs(options: &LayoutOptions) -> Vec<Job> {
    let mut jobs = vec![Job::Ld, Job::Lp, Job::Head];
    if !options.only_shoring {
        jobs.push(Job::Cast);
    }
    if options.use_start_lp {
        jobs.push(Job::StartLp);
    }
    if options.use_lds {
        jobs.push(Job::Lds);
    }
    if options.use_end_lp {
        jobs.push(Job::EndLp);
    }
    jobs
}

fn run_job(ctx: &LayoutContext, job: Job, cancel: &CancelToken) -> Result<JobResult> {
    match job {
        Job::Cast => strategies::run(StrategyKind::Cast, ctx, cancel).map(JobResult::Cast),
        Job::Ld => strategies::run(StrategyKind::Ld, ctx, cancel).map(JobResult::Ld),
        Job::Lds => match ctx.options.lds_mode {
            LdsMode::EdgeRows => strategies::run(StrategyKind::Lds, ctx, cancel).map(JobResult::Lds),
            LdsMode::ClippedRowEnds(rule) => {
                boundary::clipped_row_ends(ctx, rule, cancel).map(JobResult::Lds)
            }
        },
        Job::StartLp => strategies::run(StrategyKind::StartLp, ctx, cancel).map(JobResult::StartLp),
        Job::Lp => strategies::run(StrategyKind::Lp, ctx, cancel).map(JobResult::Lp),
        Job::Head => strategies::run(StrategyKind::Head, ctx, cancel).map(JobResult::Head),
        Job::EndLp => strategies::end_lp_rows(ctx, cancel).map(JobResult::EndLp),
    }
}

/// Checks every enabled lattice for forward progress before any work is
/// scheduled, so a bad configuration fails the pass as a whole instead of
/// deep inside one worker.
fn validate_steps(ctx: &LayoutContext, jobs: &[Job]) -> Result<()> {
    let angle = ctx.options.global_orientation_angle;
    for &job in jobs {
        let params = match job {
            Job::Cast => strategies::descriptor(StrategyKind::Cast, ctx).params,
            Job::Ld => strategies::descriptor(StrategyKind::Ld, ctx).params,
            Job::Lds => match ctx.options.lds_mode {
                LdsMode::EdgeRows => strategies::descriptor(StrategyKind::Lds, ctx).params,
                LdsMode::ClippedRowEnds(_) => boundary::walk_params(ctx),
            },
            Job::StartLp => strategies::descriptor(StrategyKind::StartLp, ctx).params,
            Job::Lp => strategies::descriptor(StrategyKind::Lp, ctx).params,
            Job::Head => strategies::descriptor(StrategyKind::Head, ctx).params,
            Job::EndLp => strategies::descriptor(StrategyKind::Lp, ctx).params,
        };
        let steps = params.blend(angle);
        ensure!(
            steps.x_step > 0.0 && steps.y_step > 0.0,
            "{job:?}: non-positive effective lattice step (x: {}, y: {}) for angle {angle}",
            steps.x_step,
            steps.y_step
        );
    }
    Ok(())
}

/// Every lattice derived list stays within the frame, allowing for the
/// configured offsets and clearances. Cast groups are excluded, group
/// expansion and rotation about the origin can leave the frame.
fn lattice_points_within_frame(ctx: &LayoutContext, layout: &SlabLayout) -> bool {
    let frame = match Rect::try_new(ctx.start.0, ctx.start.1, ctx.max.0, ctx.max.1) {
        Ok(frame) => frame,
        Err(_) => return false,
    };
    let opts = &ctx.options;
    let slack = ctx.parts.greatest_dimension(opts)
        + 2.0 * opts.distance_between_lp_and_ld
        + opts.distance_between_lp
        + opts.outline_distance
        + joist_bias_magnitude(ctx);

    let mut lists: Vec<&[Point]> = vec![&layout.ld, &layout.lp, &layout.head];
    if let Some(lds) = &layout.lds {
        lists.push(lds);
    }
    if let Some(start_lp) = &layout.start_lp {
        lists.push(start_lp);
    }
    lists
        .iter()
        .all(|points| assertions::points_within_rect(points, &frame, slack))
}

fn joist_bias_magnitude(ctx: &LayoutContext) -> f64 {
    let lp = ctx.parts.lp.start_offset.abs();
    match &ctx.options.selected_start_lp {
        Some(start_lp) => lp.max(start_lp.start_offset.abs()),
        None => lp,
    }
}
