pub mod compute;
pub mod consts;
pub mod detection;
pub mod error;
pub mod filters;
pub mod frame;
pub mod io;
pub mod report;
pub mod ssim;

pub use error::{Result, SsimError};
pub use frame::{Channel, ColorPlanes, Region};
pub use report::{ImageSsim, ImageSource};
pub use ssim::{ChannelScores, SsimAnalysis, SsimConfig, SsimFormula};
