/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a color image (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Luminance stabilization constant, (0.01 * 255)^2.
pub const SSIM_C1: f32 = 6.5025;

/// Contrast/structure stabilization constant, (0.03 * 255)^2.
pub const SSIM_C2: f32 = 58.5225;

/// Gaussian window width in taps.
pub const GAUSSIAN_WINDOW_WIDTH: usize = 11;

/// Gaussian window height in taps.
pub const GAUSSIAN_WINDOW_HEIGHT: usize = 11;

/// Gaussian window standard deviation.
pub const GAUSSIAN_WINDOW_SIGMA: f32 = 1.5;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Scale applied to the grayscale similarity plane before 8-bit conversion.
pub const GRAY_TO_BYTE_SCALE: f32 = 255.0;

/// Byte intensity at or above which a pixel counts as "no difference".
pub const DIFFERENCE_THRESHOLD: u8 = 254;

/// Foreground value written by the inverted binary threshold.
pub const MASK_FOREGROUND: u8 = 255;

/// Outline stroke width, in pixels, of annotated difference rectangles.
pub const RECT_STROKE_WIDTH: u32 = 2;

/// Default outline color of annotated difference rectangles.
pub const DEFAULT_RECT_COLOR: [u8; 3] = [255, 0, 0];
