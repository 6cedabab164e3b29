use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{Rgb, RgbImage};
use tracing::{debug, info};

use crate::compute::{default_backend, ComputeBackend};
use crate::error::{Result, SsimError};
use crate::frame::{Channel, ColorPlanes, Region};
use crate::io::image_io::{annotate_regions, load_rgb, save_rgb};
use crate::ssim::{analyze, ChannelScores, SsimAnalysis, SsimConfig};

/// Where one of the compared images comes from.
#[derive(Clone, Debug)]
pub enum ImageSource {
    Path(PathBuf),
    Buffer(RgbImage),
}

impl ImageSource {
    fn load(&self) -> Result<RgbImage> {
        match self {
            ImageSource::Path(path) => load_rgb(path),
            ImageSource::Buffer(image) => Ok(image.clone()),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<RgbImage> for ImageSource {
    fn from(image: RgbImage) -> Self {
        ImageSource::Buffer(image)
    }
}

#[derive(Clone, Debug)]
enum ReportState {
    Uncomputed,
    Computed(SsimAnalysis),
}

/// SSIM comparison of one image pair.
///
/// Configure the inputs, call [`ImageSsim::compute`] once, then read the
/// scores. The result is cached: later `compute` calls return it without
/// touching the images again.
pub struct ImageSsim {
    image1: Option<ImageSource>,
    image2: Option<ImageSource>,
    config: SsimConfig,
    backend: Arc<dyn ComputeBackend>,
    state: ReportState,
}

impl Default for ImageSsim {
    fn default() -> Self {
        Self {
            image1: None,
            image2: None,
            config: SsimConfig::default(),
            backend: default_backend(),
            state: ReportState::Uncomputed,
        }
    }
}

impl ImageSsim {
    pub fn new(image1: impl Into<ImageSource>, image2: impl Into<ImageSource>) -> Self {
        Self {
            image1: Some(image1.into()),
            image2: Some(image2.into()),
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: SsimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_backend(mut self, backend: Arc<dyn ComputeBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn set_image1(&mut self, source: impl Into<ImageSource>) {
        self.image1 = Some(source.into());
    }

    pub fn set_image2(&mut self, source: impl Into<ImageSource>) {
        self.image2 = Some(source.into());
    }

    pub fn set_diff_output(&mut self, path: Option<PathBuf>) {
        self.config.diff_output = path;
    }

    pub fn set_rect_color(&mut self, color: [u8; 3]) {
        self.config.rect_color = color;
    }

    pub fn config(&self) -> &SsimConfig {
        &self.config
    }

    pub fn is_computed(&self) -> bool {
        matches!(self.state, ReportState::Computed(_))
    }

    /// Compute the similarity of the two images and return the combined score.
    ///
    /// When a diff output path is configured and the images differ, the
    /// second image is saved there with every difference region outlined. A
    /// failed save is reported as [`SsimError::ImageSave`] but the scores stay
    /// available.
    pub fn compute(&mut self) -> Result<f64> {
        if let ReportState::Computed(ref analysis) = self.state {
            debug!("Returning cached SSIM result");
            return Ok(analysis.scores.combined);
        }

        let source1 = self
            .image1
            .as_ref()
            .ok_or_else(|| SsimError::InvalidInput("image1 can not be unset".into()))?;
        let source2 = self
            .image2
            .as_ref()
            .ok_or_else(|| SsimError::InvalidInput("image2 can not be unset".into()))?;

        let img1 = source1.load()?;
        let img2 = source2.load()?;
        if img1.dimensions() != img2.dimensions() {
            let (w1, h1) = img1.dimensions();
            let (w2, h2) = img2.dimensions();
            return Err(SsimError::InvalidInput(format!(
                "image dimensions differ: {w1}x{h1} vs {w2}x{h2}"
            )));
        }

        let planes1 = ColorPlanes::from_rgb(&img1);
        let planes2 = ColorPlanes::from_rgb(&img2);
        let analysis = analyze(self.backend.as_ref(), &planes1, &planes2, &self.config)?;
        let combined = analysis.scores.combined;
        let identical = analysis.scores.is_identical();
        let regions = analysis.regions.clone();
        self.state = ReportState::Computed(analysis);

        if identical {
            return Ok(combined);
        }
        if let Some(ref output) = self.config.diff_output {
            let annotated = annotate_regions(&img2, &regions, Rgb(self.config.rect_color));
            save_rgb(&annotated, output)?;
            info!(output = %output.display(), regions = regions.len(), "Difference image saved");
        }

        Ok(combined)
    }

    fn analysis(&self) -> Result<&SsimAnalysis> {
        match self.state {
            ReportState::Computed(ref analysis) => Ok(analysis),
            ReportState::Uncomputed => Err(SsimError::NotComputedYet(
                "the SSIM has not been calculated yet".into(),
            )),
        }
    }

    pub fn scores(&self) -> Result<ChannelScores> {
        Ok(self.analysis()?.scores)
    }

    pub fn channel_score(&self, channel: Channel) -> Result<f64> {
        Ok(self.analysis()?.scores.channel(channel))
    }

    pub fn combined_score(&self) -> Result<f64> {
        Ok(self.analysis()?.scores.combined)
    }

    pub fn region_count(&self) -> Result<usize> {
        Ok(self.analysis()?.region_count())
    }

    pub fn regions(&self) -> Result<&[Region]> {
        Ok(&self.analysis()?.regions)
    }
}
