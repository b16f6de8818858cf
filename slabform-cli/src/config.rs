use serde::{Deserialize, Serialize};

use crate::io::svg_export::SvgDrawOptions;
use slabform::entities::LdsMode;

/// Configuration for the slabform CLI
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct CliConfig {
    /// Overrides the edge beam mode of the instance when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lds_mode_override: Option<LdsMode>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            lds_mode_override: None,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
