use marker_rs::io::ext_repr::{ExtLayoutRequest, ExtLayoutResult};
use serde::{Deserialize, Serialize};

use crate::config::FFDConfig;

/// Document written by the CLI: the request as read, its layout and the configuration used
#[derive(Serialize, Deserialize, Clone)]
pub struct FFDOutput {
    pub request: ExtLayoutRequest,
    pub result: ExtLayoutResult,
    pub config: FFDConfig,
}
