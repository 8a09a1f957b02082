//! Color segmentation: green and yellow coverage in HSV space
//!
//! Works in the 8-bit half-range HSV convention (OpenCV layout): hue in
//! [0, 180], saturation and value in [0, 255]. Coverage fractions are
//! independent pixel counts over fixed inclusive threshold bands, so a pixel
//! matching neither band contributes to neither fraction.

use image::RgbImage;

/// Inclusive (hue, saturation, value) band in 8-bit half-range HSV.
struct HsvRange {
    hue: (u8, u8),
    saturation: (u8, u8),
    value: (u8, u8),
}

impl HsvRange {
    fn contains(&self, h: u8, s: u8, v: u8) -> bool {
        self.hue.0 <= h
            && h <= self.hue.1
            && self.saturation.0 <= s
            && s <= self.saturation.1
            && self.value.0 <= v
            && v <= self.value.1
    }
}

/// Healthy foliage band
const GREEN_RANGE: HsvRange = HsvRange {
    hue: (35, 85),
    saturation: (40, 255),
    value: (40, 255),
};

/// Chlorosis / senescence band
const YELLOW_RANGE: HsvRange = HsvRange {
    hue: (20, 35),
    saturation: (100, 255),
    value: (100, 255),
};

/// Result of the color segmentation analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCoverage {
    /// Fraction of pixels inside the green band, in [0, 1]
    pub green_fraction: f64,
    /// Fraction of pixels inside the yellow band, in [0, 1]
    pub yellow_fraction: f64,
}

/// Convert an RGB pixel to 8-bit half-range HSV.
///
/// Returns (H: 0-180, S: 0-255, V: 0-255), each rounded to the nearest
/// integer before any threshold comparison.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let r_f = f32::from(r);
    let g_f = f32::from(g);
    let b_f = f32::from(b);

    let max = r_f.max(g_f).max(b_f);
    let min = r_f.min(g_f).min(b_f);
    let delta = max - min;

    // Hue in degrees [0, 360)
    let h_deg = if delta <= f32::EPSILON {
        0.0
    } else if max == r_f {
        let h = 60.0 * ((g_f - b_f) / delta);
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    } else if max == g_f {
        60.0 * ((b_f - r_f) / delta) + 120.0
    } else {
        60.0 * ((r_f - g_f) / delta) + 240.0
    };

    let s = if max <= f32::EPSILON {
        0.0
    } else {
        delta / max * 255.0
    };

    ((h_deg / 2.0).round() as u8, s.round() as u8, max.round() as u8)
}

/// Calculate green and yellow coverage fractions for an image.
pub fn calculate_color_coverage(img: &RgbImage) -> ColorCoverage {
    let (width, height) = img.dimensions();
    let total = u64::from(width) * u64::from(height);
    if total == 0 {
        return ColorCoverage {
            green_fraction: 0.0,
            yellow_fraction: 0.0,
        };
    }

    let mut green: u64 = 0;
    let mut yellow: u64 = 0;
    for px in img.pixels() {
        let [r, g, b] = px.0;
        let (h, s, v) = rgb_to_hsv(r, g, b);
        if GREEN_RANGE.contains(h, s, v) {
            green += 1;
        }
        if YELLOW_RANGE.contains(h, s, v) {
            yellow += 1;
        }
    }

    ColorCoverage {
        green_fraction: green as f64 / total as f64,
        yellow_fraction: yellow as f64 / total as f64,
    }
}
