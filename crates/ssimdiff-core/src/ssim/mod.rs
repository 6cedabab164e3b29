pub mod aggregate;
pub mod config;
pub mod map;
pub mod regions;
pub mod stats;

use ndarray::Array2;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::compute::ComputeBackend;
use crate::error::{Result, SsimError};
use crate::filters::GaussianWindow;
use crate::frame::{Channel, ColorPlanes, Region};

pub use aggregate::{mean_score, ChannelScores};
pub use config::{SsimConfig, SsimFormula};
pub use map::similarity_map;
pub use regions::extract_regions;
pub use stats::{windowed_stats, WindowedStats};

/// Scores and difference regions of one image pair.
#[derive(Clone, Debug, PartialEq)]
pub struct SsimAnalysis {
    pub scores: ChannelScores,
    pub regions: Vec<Region>,
}

impl SsimAnalysis {
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

/// Compare two equally sized color images.
///
/// Statistics and maps are computed per channel (optionally on the Rayon
/// pool), reduced to channel scores, and, unless the images are identical,
/// searched for difference regions.
pub fn analyze(
    backend: &dyn ComputeBackend,
    first: &ColorPlanes,
    second: &ColorPlanes,
    config: &SsimConfig,
) -> Result<SsimAnalysis> {
    let (h, w) = first.red.dim();
    if second.red.dim() != (h, w) {
        return Err(SsimError::InvalidInput(format!(
            "image dimensions differ: {}x{} vs {}x{}",
            w,
            h,
            second.width(),
            second.height()
        )));
    }
    if h == 0 || w == 0 {
        return Err(SsimError::InvalidInput("images are empty".into()));
    }

    let window = GaussianWindow::default();
    let channel_map = |channel: Channel| -> Array2<f32> {
        let stats = windowed_stats(
            backend,
            first.channel(channel),
            second.channel(channel),
            &window,
        );
        similarity_map(backend, &stats, config.formula)
    };

    let maps: Vec<Array2<f32>> = if config.parallel_channels {
        Channel::ALL.par_iter().map(|&c| channel_map(c)).collect()
    } else {
        Channel::ALL.iter().map(|&c| channel_map(c)).collect()
    };
    let [red, green, blue] = [&maps[0], &maps[1], &maps[2]];
    debug!(
        width = w,
        height = h,
        formula = %config.formula,
        device = backend.name(),
        "Similarity maps computed"
    );

    let scores = ChannelScores::from_maps(red, green, blue);

    let regions = if scores.is_identical() {
        debug!("Images identical, skipping region extraction");
        Vec::new()
    } else {
        extract_regions(backend, red, green, blue)
    };

    info!(
        combined = scores.combined,
        red = scores.red,
        green = scores.green,
        blue = scores.blue,
        regions = regions.len(),
        "SSIM computed"
    );

    Ok(SsimAnalysis { scores, regions })
}
