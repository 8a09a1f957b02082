//! Texture descriptor: local binary patterns and histogram complexity
//!
//! Computes an LBP code for every interior pixel of the grayscale image,
//! builds a normalized 256-bin code histogram, and reports the population
//! standard deviation of the bins as the texture complexity statistic.
//!
//! Rows of the LBP map are independent, so the per-pixel loop runs in
//! parallel across rows with Rayon.

use image::{GrayImage, RgbImage};
use rayon::prelude::*;

/// Number of histogram bins, one per possible 8-bit LBP code.
pub const HISTOGRAM_BINS: usize = 256;

/// Guard against division by zero when normalizing histogram bins.
const HISTOGRAM_EPSILON: f64 = 1e-6;

/// Result of the texture analysis
#[derive(Debug, Clone)]
pub struct TextureResult {
    /// Population standard deviation of the normalized histogram bins
    pub complexity: f64,
    /// Normalized LBP code histogram (each bin = count / (pixels + 1e-6))
    pub histogram: [f64; HISTOGRAM_BINS],
}

/// Convert an RGB image to 8-bit grayscale using Rec. 601 luma weights.
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut gray = GrayImage::new(width, height);
    for (src, dst) in img.pixels().zip(gray.pixels_mut()) {
        let [r, g, b] = src.0;
        let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        dst.0 = [luma.round() as u8];
    }
    gray
}

/// The 8 compass-point neighbor offsets, at angles i*45 degrees.
///
/// Computed as (round(cos), round(sin)) per sample index. The values land on
/// 0, ±0.7071 or ±1, so rounding never sees a halfway tie.
fn neighbor_offsets() -> [(i32, i32); 8] {
    let mut offsets = [(0i32, 0i32); 8];
    for (i, slot) in offsets.iter_mut().enumerate() {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / 8.0;
        *slot = (
            libm::round(libm::cos(angle)) as i32,
            libm::round(libm::sin(angle)) as i32,
        );
    }
    offsets
}

/// Compute the LBP code map for a grayscale image.
///
/// Returns a row-major `width * height` buffer. Bit `i` of a cell's code is
/// set when the neighbor at compass offset `i` has intensity >= the center
/// intensity. Border cells (row/column 0 and the last row/column) keep code
/// 0; neighbors are never wrapped or reflected.
pub fn lbp_map(gray: &GrayImage) -> Vec<u8> {
    let (width, height) = gray.dimensions();
    let w = width as usize;
    let h = height as usize;

    let mut codes = vec![0u8; w * h];
    if w < 3 || h < 3 {
        // No interior cells
        return codes;
    }

    let src = gray.as_raw().as_slice();
    let offsets = neighbor_offsets();

    codes
        .par_chunks_mut(w)
        .enumerate()
        .skip(1)
        .take(h - 2)
        .for_each(|(y, row)| {
            for x in 1..w - 1 {
                let center = src[y * w + x];
                let mut pattern = 0u8;
                for (bit, &(dx, dy)) in offsets.iter().enumerate() {
                    let nx = x as i64 + i64::from(dx);
                    let ny = y as i64 + i64::from(dy);
                    // An offset landing outside the grid contributes a 0 bit
                    if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                        continue;
                    }
                    if src[ny as usize * w + nx as usize] >= center {
                        pattern |= 1u8 << bit;
                    }
                }
                row[x] = pattern;
            }
        });

    codes
}

/// Build the normalized LBP code histogram over the whole map, border cells
/// included. Each bin is divided by `(pixel_count + 1e-6)`.
pub fn lbp_histogram(codes: &[u8]) -> [f64; HISTOGRAM_BINS] {
    let mut counts = [0u64; HISTOGRAM_BINS];
    for &code in codes {
        counts[code as usize] += 1;
    }

    let denom = codes.len() as f64 + HISTOGRAM_EPSILON;
    let mut bins = [0.0f64; HISTOGRAM_BINS];
    for (bin, &count) in bins.iter_mut().zip(counts.iter()) {
        *bin = count as f64 / denom;
    }
    bins
}

/// Population standard deviation across all bins.
fn population_std_dev(bins: &[f64]) -> f64 {
    let n = bins.len() as f64;
    let mean = bins.iter().sum::<f64>() / n;
    let variance = bins
        .iter()
        .map(|bin| {
            let delta = bin - mean;
            delta * delta
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// Calculate the texture complexity of an image.
pub fn calculate_texture(img: &RgbImage) -> TextureResult {
    let gray = to_grayscale(img);
    let codes = lbp_map(&gray);
    let histogram = lbp_histogram(&codes);
    TextureResult {
        complexity: population_std_dev(&histogram),
        histogram,
    }
}
