use crate::error::Result;
use crate::image::BinarizeOptions;
use crate::pdc::PdcParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DescribeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub pdc: PdcParams,
    #[serde(default)]
    pub binarize: BinarizeOptions,
    pub output: DescribeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DescribeOutputConfig {
    #[serde(rename = "grid_image")]
    pub grid_image: PathBuf,
    #[serde(rename = "descriptor_json")]
    pub descriptor_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DescribeToolConfig> {
    super::load_json(path)
}
