//! Phase 1: status-driven advisories
//!
//! One advisory block per health level. The yellow and green thresholds here
//! read the rounded percentages from the `HealthRecord`, matching what the
//! operator sees in the report.

use crate::analysis::{HealthRecord, HealthStatus};
use crate::crop::CropType;

/// Build the status-driven portion of the advisory list.
pub fn status_recommendations(crop: CropType, health: &HealthRecord) -> Vec<String> {
    let mut recommendations = Vec::new();
    let yellow = health.yellow_percentage;
    let green = health.green_percentage;

    match health.status {
        HealthStatus::Poor => {
            recommendations.push(format!(
                "The analysis indicates {crop} is exhibiting signs of significant stress. \
                 Immediate attention is advised to diagnose the underlying cause."
            ));
            if yellow > 15.0 {
                recommendations.push(
                    "Noticeable yellowing suggests potential nutrient deficiencies, possibly \
                     nitrogen, potassium, or magnesium. Consider a soil test for precise \
                     diagnosis and targeted fertilization with an NPK blend."
                        .to_string(),
                );
            }
            if green < 30.0 {
                recommendations.push(
                    "Low green intensity could point to issues like insufficient chlorophyll \
                     production due to inadequate light, water stress, or disease. Investigate \
                     environmental conditions and check for any signs of pests or pathogens."
                        .to_string(),
                );
            }
            recommendations.push(
                "Monitor closely for any further deterioration and consult with an \
                 agricultural expert if the condition persists or worsens."
                    .to_string(),
            );
        }
        HealthStatus::Fair => {
            recommendations.push(format!(
                "The {crop} shows moderate health. Consistent monitoring is recommended to \
                 prevent potential decline."
            ));
            if yellow > 10.0 {
                recommendations.push(
                    "Slight yellowing might indicate an early stage of nutrient imbalance. A \
                     balanced fertilizer application could be beneficial. Consider foliar \
                     feeding for quicker absorption."
                        .to_string(),
                );
            }
            if green < 45.0 {
                recommendations.push(
                    "Slightly lower green levels could be due to various factors. Ensure \
                     optimal watering and light exposure. Regular checks for early signs of \
                     pests or diseases are crucial."
                        .to_string(),
                );
            }
        }
        HealthStatus::Good => {
            recommendations.push(format!(
                "The {crop} appears to be in good health. Maintain current cultivation \
                 practices."
            ));
            recommendations.push(
                "Continue regular scouting for any early indicators of stress or disease to \
                 ensure sustained healthy growth."
                    .to_string(),
            );
        }
        HealthStatus::Excellent => {
            recommendations.push(format!(
                "The {crop} is in excellent condition, indicating optimal growth. Continue \
                 your successful management strategies."
            ));
            recommendations.push(
                "Periodic monitoring for any subtle changes and adapt practices proactively."
                    .to_string(),
            );
        }
    }

    recommendations
}
