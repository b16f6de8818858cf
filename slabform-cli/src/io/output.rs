use crate::config::CliConfig;
use serde::{Deserialize, Serialize};
use slabform::io::ext_repr::{ExtSlabInstance, ExtSlabLayout};

#[derive(Serialize, Deserialize, Clone)]
pub struct SlabOutput {
    #[serde(flatten)]
    pub instance: ExtSlabInstance,
    pub solution: ExtSlabLayout,
    pub config: CliConfig,
}
