use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{
    GAUSSIAN_WINDOW_HEIGHT, GAUSSIAN_WINDOW_SIGMA, GAUSSIAN_WINDOW_WIDTH, PARALLEL_PIXEL_THRESHOLD,
};

/// Fixed Gaussian smoothing window used for every local statistic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianWindow {
    /// Horizontal taps (odd).
    pub width: usize,
    /// Vertical taps (odd).
    pub height: usize,
    pub sigma: f32,
}

impl Default for GaussianWindow {
    fn default() -> Self {
        Self {
            width: GAUSSIAN_WINDOW_WIDTH,
            height: GAUSSIAN_WINDOW_HEIGHT,
            sigma: GAUSSIAN_WINDOW_SIGMA,
        }
    }
}

impl GaussianWindow {
    pub fn horizontal_kernel(&self) -> Vec<f32> {
        make_gaussian_kernel(self.width, self.sigma)
    }

    pub fn vertical_kernel(&self) -> Vec<f32> {
        make_gaussian_kernel(self.height, self.sigma)
    }
}

/// Smooth a plane with a separable Gaussian window.
///
/// Borders are reflected without repeating the edge sample
/// (`gfedcb|abcdefgh|gfedcba`).
pub fn gaussian_blur_array(data: &Array2<f32>, window: &GaussianWindow) -> Array2<f32> {
    let row_pass = convolve_rows(data, &window.horizontal_kernel());
    convolve_cols(&row_pass, &window.vertical_kernel())
}

/// Normalized 1D Gaussian kernel with `size` taps centred on `(size - 1) / 2`.
pub fn make_gaussian_kernel(size: usize, sigma: f32) -> Vec<f32> {
    let size = size.max(1);
    let center = (size - 1) as f64 / 2.0;
    let s2 = 2.0 * sigma as f64 * sigma as f64;

    let weights: Vec<f64> = (0..size)
        .map(|i| {
            let x = i as f64 - center;
            (-x * x / s2).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();

    weights.into_iter().map(|v| (v / sum) as f32).collect()
}

/// Map an out-of-range index back into `[0, size)` by reflect-101.
pub fn reflect_101(idx: isize, size: usize) -> usize {
    if size == 1 {
        return 0;
    }
    let last = size as isize - 1;
    let mut i = idx;
    while i < 0 || i > last {
        i = if i < 0 { -i } else { 2 * last - i };
    }
    i as usize
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = (kernel.len() / 2) as isize;

    let row_at = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let src_col = reflect_101(col as isize + ki as isize - radius, w);
                    sum += data[[row, src_col]] * kv;
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(row_at).collect()
    } else {
        (0..h).map(row_at).collect()
    };

    collect_rows(rows, h, w)
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = (kernel.len() / 2) as isize;

    let row_at = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let src_row = reflect_101(row as isize + ki as isize - radius, h);
                    sum += data[[src_row, col]] * kv;
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(row_at).collect()
    } else {
        (0..h).map(row_at).collect()
    };

    collect_rows(rows, h, w)
}

fn collect_rows(rows: Vec<Vec<f32>>, h: usize, w: usize) -> Array2<f32> {
    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
