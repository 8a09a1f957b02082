//! Phase 2: crop-specific advisories
//!
//! Exhaustive over `CropType`, so adding a crop without advisory logic is a
//! compile error. Each arm appends after the phase-1 sentences and always
//! contributes at least one pest or disease note regardless of score.

use crate::analysis::HealthRecord;
use crate::crop::CropType;

/// Append the crop-specific advisories for this health record.
pub fn append_crop_recommendations(
    crop: CropType,
    health: &HealthRecord,
    recommendations: &mut Vec<String>,
) {
    let score = health.score;
    let yellow = health.yellow_percentage;
    let green = health.green_percentage;

    match crop {
        CropType::Corn => {
            if score < 50 {
                recommendations.push(
                    "Assess soil nitrogen levels critically; corn is a heavy nitrogen \
                     feeder, especially during vegetative growth. Consider side-dressing \
                     with urea or ammonium nitrate."
                        .to_string(),
                );
            } else if yellow > 12.0 {
                recommendations.push(
                    "Evaluate for potential magnesium or sulfur deficiencies, which can \
                     manifest as interveinal yellowing. Soil testing can confirm these \
                     imbalances."
                        .to_string(),
                );
            }
            recommendations.push(
                "Monitor for common corn pests like fall armyworm and corn borer, \
                 especially during vulnerable growth stages."
                    .to_string(),
            );
        }
        CropType::Rice => {
            if score < 60 {
                recommendations.push(
                    "Ensure consistent water management, crucial for rice paddy health. \
                     Check for adequate flood depth and drainage as needed."
                        .to_string(),
                );
            }
            recommendations.push(
                "Be vigilant for rice blast and sheath blight, particularly in warm and \
                 humid conditions. Consider preventative fungicide applications if these \
                 diseases are prevalent in your region."
                    .to_string(),
            );
            if green < 55.0 {
                recommendations.push(
                    "Investigate potential iron deficiency (Khaira disease), often seen in \
                     alkaline soils. Foliar sprays of ferrous sulfate may provide temporary \
                     relief."
                        .to_string(),
                );
            }
        }
        CropType::Wheat => {
            if score < 45 {
                recommendations.push(
                    "Inspect for signs of fungal diseases such as rusts and powdery mildew, \
                     which can rapidly spread in wheat crops. Timely fungicide applications \
                     are often necessary."
                        .to_string(),
                );
            }
            if yellow > 8.0 {
                recommendations.push(
                    "Assess soil health and nutrient availability, especially nitrogen, \
                     which is critical for tillering and grain fill in wheat."
                        .to_string(),
                );
            }
            recommendations.push(
                "Monitor for aphid infestations, which can transmit viral diseases and \
                 reduce yield."
                    .to_string(),
            );
        }
        CropType::Tomato => {
            if score < 55 {
                recommendations.push(
                    "Examine leaves for symptoms of early blight, late blight, or other \
                     fungal diseases common in tomatoes. Ensure good air circulation and \
                     consider protective fungicide sprays."
                        .to_string(),
                );
            }
            if yellow > 10.0 {
                recommendations.push(
                    "Check for blossom end rot, often linked to calcium deficiency or \
                     inconsistent watering. Ensure adequate calcium supply and consistent \
                     soil moisture."
                        .to_string(),
                );
            }
            recommendations.push(
                "Scout for common tomato pests like tomato hornworms and whiteflies, and \
                 implement integrated pest management strategies."
                    .to_string(),
            );
        }
        CropType::Potato => {
            if score < 65 {
                recommendations.push(
                    "Monitor for early and late blight, serious fungal diseases in \
                     potatoes. Protective fungicide applications are crucial, especially in \
                     wet weather."
                        .to_string(),
                );
            }
            recommendations.push(
                "Ensure consistent soil moisture to prevent common scab and promote \
                 uniform tuber development."
                    .to_string(),
            );
            if green < 60.0 {
                recommendations.push(
                    "Assess nitrogen and potassium levels, essential for vegetative growth \
                     and tuber formation in potatoes."
                        .to_string(),
                );
            }
        }
        CropType::Soybean => {
            if score < 50 {
                recommendations.push(
                    "Check for signs of soybean cyst nematode (SCN), a major \
                     yield-reducing pest. Consider resistant varieties and crop rotation in \
                     subsequent seasons."
                        .to_string(),
                );
            }
            recommendations.push(
                "Be aware of fungal diseases like soybean rust and downy mildew, \
                 especially in humid conditions. Foliar fungicides may be necessary."
                    .to_string(),
            );
            if yellow > 10.0 {
                recommendations.push(
                    "Evaluate for manganese deficiency, which can occur in high pH soils. \
                     Foliar application of manganese sulfate may be beneficial."
                        .to_string(),
                );
            }
        }
    }
}
