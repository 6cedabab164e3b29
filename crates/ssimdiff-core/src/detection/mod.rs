pub mod components;
pub mod threshold;

pub use components::{bounding_rect, find_external_boundaries, Boundary};
pub use threshold::{scale_to_u8, threshold_binary_inv};
