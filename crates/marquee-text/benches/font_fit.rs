//! Benchmarks for the font-fit search

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marquee_core::Dimensions;
use marquee_text::{
    CosmicMeasurer, FitConfig, FontDescriptor, FontSize, HeuristicMeasurer, solve_fit,
};

fn config(size: FontSize) -> FitConfig {
    FitConfig::new("Jonas", FontDescriptor::new("bold", size, "serif"), 10.0)
}

fn bench_fit_heuristic(c: &mut Criterion) {
    let measurer = HeuristicMeasurer::new();
    let mut group = c.benchmark_group("fit_heuristic");

    for width in [320.0_f32, 768.0, 1920.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(width as u32),
            &width,
            |b, &width| {
                let config = config(FontSize::px(400.0));
                b.iter(|| black_box(solve_fit(&measurer, Dimensions::new(width, 1080.0), &config)));
            },
        );
    }

    group.finish();
}

fn bench_fit_cosmic(c: &mut Criterion) {
    let Ok(measurer) = CosmicMeasurer::with_system_fonts() else {
        return;
    };
    let mut group = c.benchmark_group("fit_cosmic");

    for size in [4.0_f32, 8.0, 16.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size as u32),
            &size,
            |b, &size| {
                let config = config(FontSize::rem(size));
                b.iter(|| black_box(solve_fit(&measurer, Dimensions::new(360.0, 640.0), &config)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fit_heuristic, bench_fit_cosmic);
criterion_main!(benches);
