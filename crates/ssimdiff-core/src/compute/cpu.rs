use ndarray::{Array2, Zip};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::detection::{find_external_boundaries, threshold_binary_inv, Boundary};
use crate::filters::{gaussian_blur_array, GaussianWindow};

use super::ComputeBackend;

/// CPU backend using Rayon for parallelism on large planes.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuBackend;

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "CPU/Rayon"
    }

    fn gaussian_blur(&self, input: &Array2<f32>, window: &GaussianWindow) -> Array2<f32> {
        gaussian_blur_array(input, window)
    }

    fn multiply(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
        zip_map(a, b, |av, bv| av * bv)
    }

    fn add(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
        zip_map(a, b, |av, bv| av + bv)
    }

    fn subtract(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
        zip_map(a, b, |av, bv| av - bv)
    }

    fn square(&self, a: &Array2<f32>) -> Array2<f32> {
        zip_map(a, a, |av, bv| av * bv)
    }

    fn scale_offset(&self, a: &Array2<f32>, scale: f32, offset: f32) -> Array2<f32> {
        a.mapv(|v| v * scale + offset)
    }

    fn divide(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
        zip_map(a, b, |av, bv| av / bv)
    }

    fn threshold_binary_inv(
        &self,
        input: &Array2<u8>,
        threshold: u8,
        max_value: u8,
    ) -> Array2<u8> {
        threshold_binary_inv(input, threshold, max_value)
    }

    fn find_external_boundaries(&self, mask: &Array2<u8>) -> Vec<Boundary> {
        find_external_boundaries(mask)
    }
}

// ---------------------------------------------------------------------------
// Elementwise helper
// ---------------------------------------------------------------------------

fn zip_map(
    a: &Array2<f32>,
    b: &Array2<f32>,
    op: impl Fn(f32, f32) -> f32 + Send + Sync,
) -> Array2<f32> {
    assert_eq!(a.dim(), b.dim(), "plane shape mismatch");
    let zip = Zip::from(a).and(b);
    if a.len() >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_map_collect(|&av, &bv| op(av, bv))
    } else {
        zip.map_collect(|&av, &bv| op(av, bv))
    }
}
