use criterion::{black_box, criterion_group, criterion_main, Criterion};
use region_colors::{analyze_regions, build_histograms, Pixel, PixelBuffer, WeightedColor};

/// Synthetic gradient buffer: hue varies with x, brightness with y
fn gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let b = ((x + y) * 255 / (width + height)) as u8;
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }
    PixelBuffer::new(width, height, data).expect("valid gradient buffer")
}

fn benchmark_region_analysis(c: &mut Criterion) {
    let small = gradient_buffer(300, 300);
    let large = gradient_buffer(1920, 1080);

    c.bench_function("analyze_regions_300x300", |b| {
        b.iter(|| analyze_regions(black_box(&small)))
    });

    // Sampling keeps the per-region workload bounded, so this should sit
    // close to the small-buffer timing
    c.bench_function("analyze_regions_1920x1080", |b| {
        b.iter(|| analyze_regions(black_box(&large)))
    });
}

fn benchmark_histograms(c: &mut Criterion) {
    let colors: Vec<WeightedColor> = (0..1000u32)
        .map(|i| {
            let pixel = Pixel::opaque(
                (i % 256) as u8,
                (i * 7 % 256) as u8,
                (i * 13 % 256) as u8,
            );
            WeightedColor::with_weight(pixel, (i % 50 + 1) as u64)
        })
        .collect();

    c.bench_function("build_histograms_1000_colors", |b| {
        b.iter(|| build_histograms(black_box(&colors)))
    });
}

criterion_group!(benches, benchmark_region_analysis, benchmark_histograms);
criterion_main!(benches);
