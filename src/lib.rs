//! Crop Health Rust Implementation
//!
//! Image-statistics crop health assessment with crop-specific advisories.
//!
//! The analysis pipeline is a pure function of a decoded RGB image:
//! - `analysis/`: texture (LBP histogram complexity), color (HSV coverage),
//!   and health scoring components
//! - `analyzer`: pipeline coordinator producing a `HealthRecord`
//! - `recommend/`: deterministic crop-specific recommendation rules
//!
//! The HTTP layer (`api_server`, behind the `api` feature) handles uploads,
//! decoding, and crop-type validation before the core runs.

pub mod error;
pub mod crop;
pub mod analysis;
pub mod analyzer;
pub mod recommend;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{AnalysisError, Result};
pub use crop::CropType;
pub use analysis::{HealthRecord, HealthStatus, ColorCoverage, TextureResult};
pub use analyzer::{analyze_crop_image, analyze_image_health, CropAnalysis};
pub use recommend::generate_recommendations;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
