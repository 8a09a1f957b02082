//! Health scoring: combine texture and color statistics into a bounded score
//!
//! Scoring is additive from a base of 50. Color and texture rules adjust the
//! score; the clamped result alone determines the qualitative status. The
//! status thresholds are exclusive, so a score of exactly 80, 60 or 40 falls
//! to the lower bucket. That boundary policy is load-bearing for downstream
//! advisories and must not be changed to inclusive comparisons.

use serde::{Deserialize, Serialize};

/// Qualitative health level, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl HealthStatus {
    /// Classify a clamped score into a status. Total over [0, 100].
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            HealthStatus::Excellent
        } else if score > 60 {
            HealthStatus::Good
        } else if score > 40 {
            HealthStatus::Fair
        } else {
            HealthStatus::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Poor => "Poor",
            HealthStatus::Fair => "Fair",
            HealthStatus::Good => "Good",
            HealthStatus::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health assessment for one analyzed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub status: HealthStatus,
    /// Clamped integer score in [0, 100]
    pub score: u8,
    /// Green coverage on a 0-100 scale, rounded to 1 decimal
    pub green_percentage: f64,
    /// Yellow coverage on a 0-100 scale, rounded to 1 decimal
    pub yellow_percentage: f64,
    /// Texture complexity, rounded to 4 decimals
    pub texture_complexity: f64,
}

/// Round to specified decimal places
fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Combine the raw analysis statistics into a `HealthRecord`.
///
/// The score rules read the raw fractions; the stored percentages are the
/// rounded display values, which the recommendation rules consume.
pub fn score_health(
    texture_complexity: f64,
    green_fraction: f64,
    yellow_fraction: f64,
) -> HealthRecord {
    let mut score: i32 = 50;

    if green_fraction > 0.6 {
        score += 30;
    } else if green_fraction > 0.4 {
        score += 20;
    } else if green_fraction < 0.2 {
        score -= 30;
    }

    if yellow_fraction > 0.2 {
        score -= 25;
    }

    if texture_complexity > 0.05 {
        score += 10;
    } else if texture_complexity < 0.02 {
        score -= 15;
    }

    let score = score.clamp(0, 100) as u8;

    HealthRecord {
        status: HealthStatus::from_score(score),
        score,
        green_percentage: round_to_decimals(green_fraction * 100.0, 1),
        yellow_percentage: round_to_decimals(yellow_fraction * 100.0, 1),
        texture_complexity: round_to_decimals(texture_complexity, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_status_boundaries_fall_to_lower_bucket() {
        assert_eq!(HealthStatus::from_score(100), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(81), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(80), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(61), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(60), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_score(41), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_score(40), HealthStatus::Poor);
        assert_eq!(HealthStatus::from_score(0), HealthStatus::Poor);
    }

    #[test]
    fn test_status_ordering() {
        assert!(HealthStatus::Poor < HealthStatus::Fair);
        assert!(HealthStatus::Fair < HealthStatus::Good);
        assert!(HealthStatus::Good < HealthStatus::Excellent);
    }

    #[test]
    fn test_status_monotonic_in_score() {
        let mut previous = HealthStatus::Poor;
        for score in 0..=100u8 {
            let status = HealthStatus::from_score(score);
            assert!(status >= previous, "status regressed at score {score}");
            previous = status;
        }
    }

    #[test]
    fn test_high_green_high_texture() {
        // 50 + 30 + 10 = 90 -> Excellent
        let record = score_health(0.06, 0.75, 0.0);
        assert_eq!(record.score, 90);
        assert_eq!(record.status, HealthStatus::Excellent);
    }

    #[test]
    fn test_moderate_green() {
        // 50 + 20 = 70 (texture neutral) -> Good
        let record = score_health(0.03, 0.5, 0.0);
        assert_eq!(record.score, 70);
        assert_eq!(record.status, HealthStatus::Good);
    }

    #[test]
    fn test_low_green_low_texture_floor() {
        // 50 - 30 - 25 - 15 = -20 -> clamped to 0
        let record = score_health(0.01, 0.1, 0.3);
        assert_eq!(record.score, 0);
        assert_eq!(record.status, HealthStatus::Poor);
    }

    #[test]
    fn test_green_exactly_at_rule_boundaries() {
        // Rules are strict: 0.6 earns the 0.4 bonus tier, 0.2 earns nothing
        assert_eq!(score_health(0.03, 0.6, 0.0).score, 70);
        assert_eq!(score_health(0.03, 0.4, 0.0).score, 50);
        assert_eq!(score_health(0.03, 0.2, 0.0).score, 50);
    }

    #[test]
    fn test_yellow_penalty_boundary() {
        assert_eq!(score_health(0.03, 0.5, 0.2).score, 70);
        assert_eq!(score_health(0.03, 0.5, 0.21).score, 45);
    }

    #[test]
    fn test_percentages_rounded_for_display() {
        let record = score_health(0.0457315, 0.33333, 0.11111);
        assert_relative_eq!(record.green_percentage, 33.3);
        assert_relative_eq!(record.yellow_percentage, 11.1);
        assert_relative_eq!(record.texture_complexity, 0.0457);
    }

    #[test]
    fn test_score_bounded_over_input_grid() {
        for texture in [0.0, 0.01, 0.02, 0.03, 0.05, 0.06, 0.2] {
            for green in [0.0, 0.1, 0.2, 0.4, 0.5, 0.6, 0.8, 1.0] {
                for yellow in [0.0, 0.1, 0.2, 0.3, 1.0] {
                    let record = score_health(texture, green, yellow);
                    assert!(record.score <= 100);
                }
            }
        }
    }
}
