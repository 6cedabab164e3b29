use thiserror::Error;

#[derive(Error, Debug)]
pub enum SsimError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to load image: {0}")]
    ImageLoad(String),

    #[error("Failed to save image: {0}")]
    ImageSave(String),

    #[error("Not computed yet: {0}")]
    NotComputedYet(String),
}

pub type Result<T> = std::result::Result<T, SsimError>;
