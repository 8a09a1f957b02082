//! Analysis pipeline coordinator
//!
//! Glues the texture, color and health components together into the single
//! entry points the delivery layer calls. The pipeline holds no state: every
//! invocation computes fresh from its input image and concurrent invocations
//! need no coordination.

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::analysis::{calculate_color_coverage, calculate_texture, score_health, HealthRecord};
use crate::crop::CropType;
use crate::error::{AnalysisError, Result};
use crate::recommend::generate_recommendations;

/// Full analysis output for one (image, crop) request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropAnalysis {
    pub crop: CropType,
    pub health: HealthRecord,
    pub recommendations: Vec<String>,
}

/// Run the health pipeline on a decoded image.
///
/// Rejects zero-sized images before any per-pixel work; the epsilon in the
/// histogram normalization is not a substitute for this check.
pub fn analyze_image_health(img: &RgbImage) -> Result<HealthRecord> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(AnalysisError::InvalidDimensions { width, height });
    }

    let texture = calculate_texture(img);
    let coverage = calculate_color_coverage(img);

    Ok(score_health(
        texture.complexity,
        coverage.green_fraction,
        coverage.yellow_fraction,
    ))
}

/// Analyze an image for a declared crop: health record plus advisories.
pub fn analyze_crop_image(img: &RgbImage, crop: CropType) -> Result<CropAnalysis> {
    let health = analyze_image_health(img)?;
    let recommendations = generate_recommendations(crop, &health);
    Ok(CropAnalysis {
        crop,
        health,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::HealthStatus;
    use image::Rgb;

    #[test]
    fn test_zero_sized_image_rejected() {
        let img = RgbImage::new(0, 10);
        let err = analyze_image_health(&img).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_solid_green_lands_on_good_boundary() {
        // 10x10 pure green: +30 for green coverage, no texture adjustment
        // (complexity ~0.0457 sits between the 0.02 and 0.05 thresholds), so
        // the score is exactly 80 and the exclusive threshold demotes the
        // status to Good.
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 255, 0]));
        let health = analyze_image_health(&img).unwrap();
        assert_eq!(health.score, 80);
        assert_eq!(health.status, HealthStatus::Good);
        assert_eq!(health.green_percentage, 100.0);
        assert_eq!(health.yellow_percentage, 0.0);
    }

    #[test]
    fn test_analysis_bundles_recommendations() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 255, 0]));
        let analysis = analyze_crop_image(&img, CropType::Corn).unwrap();
        assert_eq!(analysis.crop, CropType::Corn);
        assert!(analysis.recommendations.len() >= 2);
    }
}
