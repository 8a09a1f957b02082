//! Recommendation rule engine
//!
//! Two deterministic phases, order-preserving:
//! 1. status-driven advisories (`status`), one block per health level, with
//!    yellow- and green-conditional additions;
//! 2. crop-specific advisories (`crops`), an exhaustive match over the crop
//!    enum so every crop has defined logic at compile time.
//!
//! The engine always emits at least two sentences for any valid input; there
//! is no error path here because crop validation happens upstream.

pub mod crops;
pub mod status;

use crate::analysis::HealthRecord;
use crate::crop::CropType;

/// Generate the ordered advisory list for a crop and its health record.
pub fn generate_recommendations(crop: CropType, health: &HealthRecord) -> Vec<String> {
    let mut recommendations = status::status_recommendations(crop, health);
    crops::append_crop_recommendations(crop, health, &mut recommendations);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{HealthRecord, HealthStatus};

    fn record(status: HealthStatus, score: u8, green: f64, yellow: f64) -> HealthRecord {
        HealthRecord {
            status,
            score,
            green_percentage: green,
            yellow_percentage: yellow,
            texture_complexity: 0.03,
        }
    }

    #[test]
    fn test_every_crop_status_pair_yields_at_least_two() {
        let samples = [
            record(HealthStatus::Poor, 20, 10.0, 25.0),
            record(HealthStatus::Poor, 35, 50.0, 5.0),
            record(HealthStatus::Fair, 50, 42.0, 12.0),
            record(HealthStatus::Fair, 55, 60.0, 0.0),
            record(HealthStatus::Good, 70, 55.0, 8.0),
            record(HealthStatus::Excellent, 90, 85.0, 0.0),
        ];
        for crop in CropType::ALL {
            for health in &samples {
                let recs = generate_recommendations(crop, health);
                assert!(
                    recs.len() >= 2,
                    "{crop} / {:?} produced {} advisories",
                    health.status,
                    recs.len()
                );
            }
        }
    }

    #[test]
    fn test_status_advisories_precede_crop_advisories() {
        let health = record(HealthStatus::Poor, 30, 10.0, 25.0);
        let recs = generate_recommendations(CropType::Corn, &health);
        // Phase 1 leads with the general stress sentence, phase 2 closes
        // with the corn pest note.
        assert!(recs[0].contains("significant stress"));
        assert!(recs.last().unwrap().contains("fall armyworm"));
    }

    #[test]
    fn test_determinism() {
        let health = record(HealthStatus::Fair, 50, 40.0, 12.0);
        let first = generate_recommendations(CropType::Tomato, &health);
        let second = generate_recommendations(CropType::Tomato, &health);
        assert_eq!(first, second);
    }
}
