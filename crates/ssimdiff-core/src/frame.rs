use image::RgbImage;
use ndarray::Array2;

use crate::consts::{COLOR_CHANNEL_COUNT, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// Color channel of an RGB image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; COLOR_CHANNEL_COUNT] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Color image split into separate float channel planes.
/// Samples keep the 8-bit range [0.0, 255.0]; shape = (height, width).
#[derive(Clone, Debug)]
pub struct ColorPlanes {
    pub red: Array2<f32>,
    pub green: Array2<f32>,
    pub blue: Array2<f32>,
}

impl ColorPlanes {
    /// Split an 8-bit RGB image into float planes without rescaling.
    pub fn from_rgb(image: &RgbImage) -> Self {
        let (w, h) = image.dimensions();
        let mut red = Array2::<f32>::zeros((h as usize, w as usize));
        let mut green = Array2::<f32>::zeros((h as usize, w as usize));
        let mut blue = Array2::<f32>::zeros((h as usize, w as usize));

        for (col, row, pixel) in image.enumerate_pixels() {
            let idx = [row as usize, col as usize];
            red[idx] = pixel.0[0] as f32;
            green[idx] = pixel.0[1] as f32;
            blue[idx] = pixel.0[2] as f32;
        }

        Self { red, green, blue }
    }

    pub fn channel(&self, channel: Channel) -> &Array2<f32> {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn width(&self) -> usize {
        self.red.ncols()
    }

    pub fn height(&self) -> usize {
        self.red.nrows()
    }
}

/// Axis-aligned bounding rectangle of one difference cluster, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Combine three channel planes into one using BT.601 luminance weights.
pub fn luminance(red: &Array2<f32>, green: &Array2<f32>, blue: &Array2<f32>) -> Array2<f32> {
    let (h, w) = red.dim();
    let mut data = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            data[[row, col]] = LUMINANCE_R * red[[row, col]]
                + LUMINANCE_G * green[[row, col]]
                + LUMINANCE_B * blue[[row, col]];
        }
    }

    data
}
