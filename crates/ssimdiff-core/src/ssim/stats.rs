use ndarray::Array2;

use crate::compute::ComputeBackend;
use crate::filters::GaussianWindow;

/// Local Gaussian-windowed statistics of one channel of an image pair.
#[derive(Clone, Debug)]
pub struct WindowedStats {
    pub mean1: Array2<f32>,
    pub mean2: Array2<f32>,
    pub variance1: Array2<f32>,
    pub variance2: Array2<f32>,
    pub covariance: Array2<f32>,
}

/// Gaussian-weighted local mean.
pub fn local_mean(
    backend: &dyn ComputeBackend,
    a: &Array2<f32>,
    window: &GaussianWindow,
) -> Array2<f32> {
    backend.gaussian_blur(a, window)
}

/// `smooth(a²) - mean(a)²`, given the already computed `mean(a)`.
pub fn local_variance(
    backend: &dyn ComputeBackend,
    a: &Array2<f32>,
    mean: &Array2<f32>,
    window: &GaussianWindow,
) -> Array2<f32> {
    let smoothed_sq = backend.gaussian_blur(&backend.square(a), window);
    backend.subtract(&smoothed_sq, &backend.square(mean))
}

/// `smooth(a·b) - mean(a)·mean(b)`, given both means.
pub fn local_covariance(
    backend: &dyn ComputeBackend,
    a: &Array2<f32>,
    b: &Array2<f32>,
    mean_a: &Array2<f32>,
    mean_b: &Array2<f32>,
    window: &GaussianWindow,
) -> Array2<f32> {
    let smoothed_ab = backend.gaussian_blur(&backend.multiply(a, b), window);
    backend.subtract(&smoothed_ab, &backend.multiply(mean_a, mean_b))
}

/// All five statistics fields for one channel pair.
///
/// Runs exactly five Gaussian smoothing passes.
pub fn windowed_stats(
    backend: &dyn ComputeBackend,
    a: &Array2<f32>,
    b: &Array2<f32>,
    window: &GaussianWindow,
) -> WindowedStats {
    assert_eq!(a.dim(), b.dim(), "channel planes must share dimensions");

    let mean1 = local_mean(backend, a, window);
    let mean2 = local_mean(backend, b, window);
    let variance1 = local_variance(backend, a, &mean1, window);
    let variance2 = local_variance(backend, b, &mean2, window);
    let covariance = local_covariance(backend, a, b, &mean1, &mean2, window);

    WindowedStats {
        mean1,
        mean2,
        variance1,
        variance2,
        covariance,
    }
}
