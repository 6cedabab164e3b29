use ndarray::Array2;

use crate::frame::Channel;

/// Mean SSIM per channel and their product.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelScores {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    /// `red * green * blue`; one poorly matched channel drags it toward 0.
    pub combined: f64,
}

impl ChannelScores {
    pub fn from_channels(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            combined: red * green * blue,
        }
    }

    /// Reduce three similarity maps (R, G, B) to their means.
    pub fn from_maps(red: &Array2<f32>, green: &Array2<f32>, blue: &Array2<f32>) -> Self {
        Self::from_channels(mean_score(red), mean_score(green), mean_score(blue))
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Whether the combined score is exactly 1.
    pub fn is_identical(&self) -> bool {
        self.combined == 1.0
    }
}

/// Unweighted arithmetic mean of a map, accumulated in f64.
pub fn mean_score(map: &Array2<f32>) -> f64 {
    let n = map.len();
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = map.iter().map(|&v| v as f64).sum();
    sum / n as f64
}
