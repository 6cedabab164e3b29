use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::consts::RECT_STROKE_WIDTH;
use crate::error::{Result, SsimError};
use crate::frame::Region;

/// Load an image file as 8-bit RGB, whatever its stored format.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)
        .map_err(|e| SsimError::ImageLoad(format!("{}: {e}", path.display())))?;
    Ok(img.to_rgb8())
}

/// Save an 8-bit RGB image, choosing the format from the file extension.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .map_err(|e| SsimError::ImageSave(format!("{}: {e}", path.display())))
}

/// Copy of `image` with every region outlined in `color`.
pub fn annotate_regions(image: &RgbImage, regions: &[Region], color: Rgb<u8>) -> RgbImage {
    let mut canvas = image.clone();
    for region in regions {
        draw_region_outline(&mut canvas, region, color);
    }
    canvas
}

/// Outline a region with a [`RECT_STROKE_WIDTH`]-pixel stroke drawn inward.
fn draw_region_outline(canvas: &mut RgbImage, region: &Region, color: Rgb<u8>) {
    for inset in 0..RECT_STROKE_WIDTH {
        let width = region.width.saturating_sub(2 * inset);
        let height = region.height.saturating_sub(2 * inset);
        if width == 0 || height == 0 {
            break;
        }
        let rect = Rect::at((region.x + inset) as i32, (region.y + inset) as i32)
            .of_size(width, height);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}
