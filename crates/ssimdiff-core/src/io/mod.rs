pub mod image_io;

pub use image_io::{annotate_regions, load_rgb, save_rgb};
