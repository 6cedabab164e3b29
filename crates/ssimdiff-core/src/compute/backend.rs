use std::sync::Arc;

use ndarray::Array2;

use crate::detection::Boundary;
use crate::filters::GaussianWindow;
use crate::frame::Region;

use super::cpu::CpuBackend;

/// Plane primitives the SSIM pipeline is written against.
///
/// Every elementwise operation expects planes of identical shape; a shape
/// mismatch is a caller error.
pub trait ComputeBackend: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Gaussian-weighted local average over `window`.
    fn gaussian_blur(&self, input: &Array2<f32>, window: &GaussianWindow) -> Array2<f32>;

    fn multiply(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32>;

    fn add(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32>;

    fn subtract(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32>;

    /// `a * a`, evaluated exactly like `multiply(a, a)`.
    fn square(&self, a: &Array2<f32>) -> Array2<f32>;

    /// `a * scale + offset`.
    fn scale_offset(&self, a: &Array2<f32>, scale: f32, offset: f32) -> Array2<f32>;

    fn divide(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32>;

    /// Samples below `threshold` become `max_value`, the rest become 0.
    fn threshold_binary_inv(&self, input: &Array2<u8>, threshold: u8, max_value: u8)
        -> Array2<u8>;

    /// Outer boundaries of the 8-connected non-zero regions of `mask`.
    fn find_external_boundaries(&self, mask: &Array2<u8>) -> Vec<Boundary>;

    fn bounding_rect(&self, boundary: &Boundary) -> Region {
        crate::detection::bounding_rect(boundary)
    }
}

/// Backend used when the caller does not supply one.
pub fn default_backend() -> Arc<dyn ComputeBackend> {
    Arc::new(CpuBackend)
}
