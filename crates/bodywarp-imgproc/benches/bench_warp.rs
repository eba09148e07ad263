use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bodywarp_image::Image;
use bodywarp_imgproc::{
    enhance::{color_grade, ColorGrade},
    parallel::ExecutionStrategy,
    warp::{warp_zones, WarpZone},
};

fn bench_zones() -> Vec<WarpZone> {
    vec![
        WarpZone::new(0.36, 0.52, 0.09, 0.08, -14.0, 0.0),
        WarpZone::new(0.64, 0.52, 0.09, 0.08, 14.0, 0.0),
        WarpZone::new(0.5, 0.55, 0.12, 0.07, 0.0, -6.0),
        WarpZone::new(0.28, 0.3, 0.07, 0.12, -5.0, 0.0),
        WarpZone::new(0.72, 0.3, 0.07, 0.12, 5.0, 0.0),
        WarpZone::new(0.5, 0.18, 0.06, 0.05, 0.0, 2.0),
    ]
}

fn bench_warp_zones(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpZones");
    let zones = bench_zones();

    for (width, height) in [(256, 384), (533, 800), (800, 1200)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 4>::from_size_val(image_size, 127).unwrap();
        let output = Image::<u8, 4>::from_size_val(image_size, 0).unwrap();

        for (name, strategy) in [
            ("serial", ExecutionStrategy::Serial),
            ("parallel_rows", ExecutionStrategy::ParallelRows),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| {
                        warp_zones(
                            black_box(src),
                            black_box(&mut dst),
                            black_box(&zones),
                            black_box(strategy),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_color_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("ColorGrade");
    let grade = ColorGrade::from_intensity(0.75);

    for (width, height) in [(256, 384), (533, 800)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let image_size = [*width, *height].into();
        let image = Image::<u8, 4>::from_size_val(image_size, 90).unwrap();
        let output = Image::<u8, 4>::from_size_val(image_size, 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("par_iter_rows", format!("{}x{}", width, height)),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| color_grade(black_box(src), black_box(&mut dst), black_box(&grade)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_warp_zones, bench_color_grade);
criterion_main!(benches);
