use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use slabform::entities::{LayoutContext, Part, PartGroup, SlabLayout, filter_catalog, modulations};
use slabform::layout::best_fit::{self, GapFill};
use slabform::layout::{CancelToken, orchestrator};
use slabform::util::FPA;
use slabform_cli::config::CliConfig;
use slabform_cli::io::cli::Cli;
use slabform_cli::io::output::SlabOutput;
use slabform_cli::io::svg_export::layout_to_svg;
use slabform_cli::{EPOCH, io};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] parsed config: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).unwrap_or_else(|_| {
            panic!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        });
    }

    let mut ext_instance = io::read_slab_instance(args.input_file.as_path())?;
    //the --lds-mode flag wins over the config file
    if let Some(lds_mode) = args.lds_mode.or(config.lds_mode_override) {
        info!("[MAIN] overriding the lds mode of the instance to {lds_mode:?}");
        ext_instance.options.lds_mode = lds_mode;
    }

    let catalog = slabform::io::import_catalog(&ext_instance.parts)?;
    info!(
        "[MAIN] catalog holds {} parts over modulations {:?}",
        catalog.len(),
        modulations(&catalog)
    );

    let ctx = slabform::io::import(&ext_instance)?;
    let layout = orchestrator::generate(&ctx, &CancelToken::new())?;

    info!(
        "[MAIN] {} placement points computed in {:?}",
        layout.total_points().separate_with_commas(),
        EPOCH.elapsed()
    );

    advise_gap_fill(&ctx, &catalog, &layout);

    {
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));

        let svg = layout_to_svg(&ctx, &layout, config.svg_draw_options, &ext_instance.name);

        let output = SlabOutput {
            instance: ext_instance,
            solution: slabform::io::export(&layout),
            config,
        };

        io::write_json(&output, Path::new(&solution_path))?;
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}

/// Suggests the catalog part (or pair) which best closes the strip left
/// between the last joist column and the frame edge.
fn advise_gap_fill(ctx: &LayoutContext, catalog: &[Part], layout: &SlabLayout) {
    //the leftover math only holds for an axis aligned lattice
    if FPA(ctx.options.global_orientation_angle) != FPA(90.0) || layout.lp.is_empty() {
        return;
    }
    let lp = &ctx.parts.lp;
    let last_column = layout.lp.iter().map(|p| p.0).fold(f64::MIN, f64::max);
    //the next column fell outside the frame, so the strip is at most one pitch wide
    let leftover = ctx.max.0 - last_column;

    let forms = filter_catalog(catalog, PartGroup::FormsAndBoxes, lp.modulation);
    let joists = filter_catalog(catalog, PartGroup::Lp, lp.modulation);
    match best_fit::select(&forms, &joists, leftover, ctx.options.outline_distance) {
        Some(fill) => info!(
            "[MAIN] leftover strip of {:.1} closes best with {}",
            leftover,
            fill_label(&fill)
        ),
        None => info!(
            "[MAIN] leftover strip of {:.1} has no fitting part in the catalog",
            leftover
        ),
    }
}

fn fill_label(fill: &GapFill) -> String {
    match fill {
        GapFill::Single(part) => format!("{} ({:.1})", part.reference, part.width),
        GapFill::Pair(a, b) => {
            format!("{} + {} ({:.1})", a.reference, b.reference, fill.width())
        }
    }
}
