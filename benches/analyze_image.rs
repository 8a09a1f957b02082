// Benchmark the analysis pipeline on synthetic canopy-like images.
//
// Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crop_health_rust::analysis::texture::calculate_texture;
use crop_health_rust::{analyze_crop_image, CropType};
use image::{Rgb, RgbImage};

/// Deterministic pseudo-foliage: green-dominated with per-pixel variation so
/// the LBP loop sees realistic code diversity.
fn synthetic_canopy(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let n = (x.wrapping_mul(31).wrapping_add(y.wrapping_mul(17))) % 97;
        px.0 = [
            (20 + n / 2) as u8,
            (120 + n) as u8,
            (30 + n / 3) as u8,
        ];
    }
    img
}

fn bench_texture(c: &mut Criterion) {
    let mut group = c.benchmark_group("texture");
    for size in [64u32, 256, 512] {
        let img = synthetic_canopy(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &img, |b, img| {
            b.iter(|| calculate_texture(black_box(img)));
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let img = synthetic_canopy(256, 256);
    c.bench_function("analyze_crop_image_256", |b| {
        b.iter(|| analyze_crop_image(black_box(&img), CropType::Corn).unwrap());
    });
}

criterion_group!(benches, bench_texture, bench_full_pipeline);
criterion_main!(benches);
