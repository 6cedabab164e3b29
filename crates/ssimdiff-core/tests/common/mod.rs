#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::{Rgb, RgbImage};
use ndarray::Array2;

use ssimdiff_core::compute::cpu::CpuBackend;
use ssimdiff_core::compute::ComputeBackend;
use ssimdiff_core::detection::Boundary;
use ssimdiff_core::filters::GaussianWindow;

/// Minimal linear congruential generator so test images are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    /// Uniform sample in [0.0, 1.0).
    pub fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 40) as f32) / (1u64 << 24) as f32
    }
}

pub fn solid_image(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(w, h, Rgb(rgb))
}

/// Smooth sinusoidal pattern, different per channel.
pub fn textured_image(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        let (xf, yf) = (x as f32, y as f32);
        let r = 128.0 + 60.0 * (xf / 3.0).sin() + 30.0 * (yf / 5.0).cos();
        let g = 128.0 + 50.0 * ((xf + yf) / 4.0).sin();
        let b = 128.0 + 70.0 * (yf / 2.5).sin() * (xf / 7.0).cos();
        Rgb([r as u8, g as u8, b as u8])
    })
}

/// Independent uniform samples in [30, 225] per pixel and channel.
pub fn random_image(w: u32, h: u32, seed: u64) -> RgbImage {
    let mut rng = Lcg::new(seed);
    RgbImage::from_fn(w, h, |_, _| {
        let mut px = [0u8; 3];
        for v in &mut px {
            *v = (30.0 + 195.0 * rng.next_f32()) as u8;
        }
        Rgb(px)
    })
}

/// Blend `image` toward unrelated uniform noise: `(1 - t) * image + t * noise`.
pub fn blend_with_noise(image: &RgbImage, t: f32, seed: u64) -> RgbImage {
    let mut rng = Lcg::new(seed);
    let mut out = image.clone();
    for px in out.pixels_mut() {
        for v in px.0.iter_mut() {
            let noise = 255.0 * rng.next_f32();
            *v = ((1.0 - t) * *v as f32 + t * noise).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Add zero-mean uniform noise of the given amplitude.
pub fn add_noise(image: &RgbImage, amplitude: f32, seed: u64) -> RgbImage {
    let mut rng = Lcg::new(seed);
    let mut out = image.clone();
    for px in out.pixels_mut() {
        for v in px.0.iter_mut() {
            let delta = amplitude * (2.0 * rng.next_f32() - 1.0);
            *v = (*v as f32 + delta).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Overwrite a rectangle with a solid color.
pub fn paste_patch(image: &RgbImage, x: u32, y: u32, w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
    let mut out = image.clone();
    for row in y..y + h {
        for col in x..x + w {
            out.put_pixel(col, row, Rgb(rgb));
        }
    }
    out
}

pub fn mask_from_rows(rows: &[&str]) -> Array2<u8> {
    let h = rows.len();
    let w = rows[0].len();
    Array2::from_shape_fn((h, w), |(r, c)| {
        if rows[r].as_bytes()[c] == b'#' {
            255
        } else {
            0
        }
    })
}

/// CPU backend that counts calls to the expensive primitives.
#[derive(Default)]
pub struct CountingBackend {
    inner: CpuBackend,
    pub blur_calls: Arc<AtomicUsize>,
    pub boundary_calls: Arc<AtomicUsize>,
}

impl CountingBackend {
    pub fn blur_count(&self) -> usize {
        self.blur_calls.load(Ordering::SeqCst)
    }

    pub fn boundary_count(&self) -> usize {
        self.boundary_calls.load(Ordering::SeqCst)
    }
}

impl ComputeBackend for CountingBackend {
    fn name(&self) -> &str {
        "counting"
    }

    fn gaussian_blur(&self, input: &Array2<f32>, window: &GaussianWindow) -> Array2<f32> {
        self.blur_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.gaussian_blur(input, window)
    }

    fn multiply(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
        self.inner.multiply(a, b)
    }

    fn add(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
        self.inner.add(a, b)
    }

    fn subtract(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
        self.inner.subtract(a, b)
    }

    fn square(&self, a: &Array2<f32>) -> Array2<f32> {
        self.inner.square(a)
    }

    fn scale_offset(&self, a: &Array2<f32>, scale: f32, offset: f32) -> Array2<f32> {
        self.inner.scale_offset(a, scale, offset)
    }

    fn divide(&self, a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
        self.inner.divide(a, b)
    }

    fn threshold_binary_inv(
        &self,
        input: &Array2<u8>,
        threshold: u8,
        max_value: u8,
    ) -> Array2<u8> {
        self.inner.threshold_binary_inv(input, threshold, max_value)
    }

    fn find_external_boundaries(&self, mask: &Array2<u8>) -> Vec<Boundary> {
        self.boundary_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_external_boundaries(mask)
    }
}
