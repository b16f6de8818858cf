use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use slabform::entities::{LdsMode, RowEndRule};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Slab instance to lay out (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving the solution JSON and SVG
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Config file, defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the edge beam mode of the instance and the config file
    #[arg(
        long,
        value_name = "[edge_rows, clipped_row_ends, clipped_row_ends_margin_probe]",
        value_parser = parse_lds_mode
    )]
    pub lds_mode: Option<LdsMode>,
}

fn parse_lds_mode(raw: &str) -> Result<LdsMode, String> {
    match raw {
        "edge_rows" => Ok(LdsMode::EdgeRows),
        "clipped_row_ends" => Ok(LdsMode::ClippedRowEnds(RowEndRule::LastInteriorColumn)),
        "clipped_row_ends_margin_probe" => Ok(LdsMode::ClippedRowEnds(RowEndRule::MarginProbe)),
        _ => Err(format!("unknown lds mode: {raw}")),
    }
}
