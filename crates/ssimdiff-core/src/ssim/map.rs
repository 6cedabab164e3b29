use ndarray::Array2;

use crate::compute::ComputeBackend;
use crate::consts::{SSIM_C1, SSIM_C2};

use super::config::SsimFormula;
use super::stats::WindowedStats;

/// Per-pixel SSIM of one channel.
///
/// ```text
/// ((2·μ1·μ2 + C1)·(2·σ12 + C2)) / ((μ1² + μ2² + C1)·(σ1² + X + C2))
/// ```
/// where `X` is `σ12` for [`SsimFormula::Reference`] and `σ2²` for
/// [`SsimFormula::Textbook`].
pub fn similarity_map(
    backend: &dyn ComputeBackend,
    stats: &WindowedStats,
    formula: SsimFormula,
) -> Array2<f32> {
    let mean1_mean2 = backend.multiply(&stats.mean1, &stats.mean2);
    let mean1_sq = backend.square(&stats.mean1);
    let mean2_sq = backend.square(&stats.mean2);

    // (2*mu1_mu2 + C1) * (2*sigma12 + C2)
    let luminance_num = backend.scale_offset(&mean1_mean2, 2.0, SSIM_C1);
    let structure_num = backend.scale_offset(&stats.covariance, 2.0, SSIM_C2);
    let numerator = backend.multiply(&luminance_num, &structure_num);

    // (mu1_sq + mu2_sq + C1) * (sigma1_sq + X + C2)
    let luminance_den = backend.scale_offset(&backend.add(&mean1_sq, &mean2_sq), 1.0, SSIM_C1);
    let paired = match formula {
        SsimFormula::Reference => &stats.covariance,
        SsimFormula::Textbook => &stats.variance2,
    };
    let structure_den = backend.scale_offset(&backend.add(&stats.variance1, paired), 1.0, SSIM_C2);
    let denominator = backend.multiply(&luminance_den, &structure_den);

    backend.divide(&numerator, &denominator)
}
