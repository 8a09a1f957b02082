//! Error types for the crop_health_rust library

use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors surfaced by the analysis pipeline.
///
/// Every error is terminal for its invocation: the pipeline is deterministic
/// and CPU-bound, so there is nothing transient to retry against, and no
/// partial `HealthRecord` is ever produced on failure.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image bytes could not be decoded into a pixel grid
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Image has a zero dimension; rejected before the LBP loop runs
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Crop type outside the supported set reached the analysis layer.
    /// Callers validate crop types up front, so hitting this is a contract
    /// violation rather than a user-input condition.
    #[error("Unsupported crop type: {name}")]
    UnsupportedCrop { name: String },
}

impl AnalysisError {
    /// User-facing message for the web layer to render
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Decode(_) => {
                "Could not read the uploaded image. Please check the file format and try again."
                    .to_string()
            }
            AnalysisError::InvalidDimensions { .. } => {
                "The uploaded image is empty. Please upload a photograph of the crop.".to_string()
            }
            AnalysisError::UnsupportedCrop { .. } => {
                "Please select a valid crop type".to_string()
            }
        }
    }
}
