//! Analysis components for crop health assessment
//!
//! Each component is a pure transformation of the input image, implemented in
//! its own module.

pub mod color;
pub mod health;
pub mod texture;

// Re-export component types
pub use color::{calculate_color_coverage, ColorCoverage};
pub use health::{score_health, HealthRecord, HealthStatus};
pub use texture::{calculate_texture, TextureResult};
