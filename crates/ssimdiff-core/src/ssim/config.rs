use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_RECT_COLOR;

/// Which variance terms the SSIM denominator pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SsimFormula {
    /// `(var1 + cov12 + C2)`: reproduces the established reference outputs.
    #[default]
    Reference,
    /// `(var1 + var2 + C2)`: the published SSIM definition.
    Textbook,
}

impl std::fmt::Display for SsimFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SsimFormula::Reference => write!(f, "reference"),
            SsimFormula::Textbook => write!(f, "textbook"),
        }
    }
}

/// Settings for one image comparison.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SsimConfig {
    #[serde(default)]
    pub formula: SsimFormula,
    /// Outline color of difference rectangles, RGB.
    #[serde(default = "default_rect_color")]
    pub rect_color: [u8; 3],
    /// Where to save the annotated second image, if anywhere.
    #[serde(default)]
    pub diff_output: Option<PathBuf>,
    /// Compute the three channels on the Rayon pool.
    #[serde(default = "default_parallel_channels")]
    pub parallel_channels: bool,
}

fn default_rect_color() -> [u8; 3] {
    DEFAULT_RECT_COLOR
}
fn default_parallel_channels() -> bool {
    true
}

impl Default for SsimConfig {
    fn default() -> Self {
        Self {
            formula: SsimFormula::default(),
            rect_color: DEFAULT_RECT_COLOR,
            diff_output: None,
            parallel_channels: true,
        }
    }
}
