use ndarray::Array2;

/// Scale a float plane into bytes with rounding and saturation.
pub fn scale_to_u8(data: &Array2<f32>, scale: f32) -> Array2<u8> {
    data.mapv(|v| (v * scale).round_ties_even().clamp(0.0, 255.0) as u8)
}

/// Inverted binary threshold: samples below `threshold` become `max_value`,
/// everything else becomes 0.
pub fn threshold_binary_inv(data: &Array2<u8>, threshold: u8, max_value: u8) -> Array2<u8> {
    data.mapv(|v| if v < threshold { max_value } else { 0 })
}
