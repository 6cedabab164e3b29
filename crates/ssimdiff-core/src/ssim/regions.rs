use ndarray::Array2;
use tracing::debug;

use crate::compute::ComputeBackend;
use crate::consts::{DIFFERENCE_THRESHOLD, GRAY_TO_BYTE_SCALE, MASK_FOREGROUND};
use crate::detection::scale_to_u8;
use crate::frame::{luminance, Region};

/// Locate clusters of strongly dissimilar pixels.
///
/// Pipeline: luminance-combine the R/G/B maps -> scale to bytes ->
/// inverted threshold at [`DIFFERENCE_THRESHOLD`] -> external boundaries ->
/// bounding rectangles.
pub fn extract_regions(
    backend: &dyn ComputeBackend,
    red: &Array2<f32>,
    green: &Array2<f32>,
    blue: &Array2<f32>,
) -> Vec<Region> {
    let gray = luminance(red, green, blue);
    let gray8 = scale_to_u8(&gray, GRAY_TO_BYTE_SCALE);
    let mask = backend.threshold_binary_inv(&gray8, DIFFERENCE_THRESHOLD, MASK_FOREGROUND);

    let flagged = mask.iter().filter(|&&v| v != 0).count();
    let boundaries = backend.find_external_boundaries(&mask);
    debug!(
        flagged_pixels = flagged,
        boundaries = boundaries.len(),
        "Difference mask traced"
    );

    boundaries
        .iter()
        .map(|boundary| backend.bounding_rect(boundary))
        .collect()
}
