use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ndarray::Array2;
use rand::Rng;
use rank_plots::options::{BasePlotOptions, HistogramScale, JointHistogramOptions};
use rank_plots::plots::{JointHistogram, JointHistogramPlot, Plot};
use std::hint::black_box;

/// `n x n` histogram over rank edges spread evenly in the rank coordinate
fn generate_test_histogram(n: usize) -> JointHistogram {
    let edges = rank_axis::build_axis_frame(0.0, 99.99, 4.0 / n as f64).unwrap();
    let cells = edges.len() - 1;
    let mut rng = rand::rng();
    let values = Array2::from_shape_fn((cells, cells), |_| rng.random_range(0.0..1.0));
    JointHistogram::new(edges.clone(), edges, values).unwrap()
}

fn create_test_options(width: u32, height: u32, scale: HistogramScale) -> JointHistogramOptions {
    let base = BasePlotOptions::new()
        .width(width)
        .height(height)
        .build()
        .unwrap();

    JointHistogramOptions::new()
        .base(base)
        .scale(scale)
        .build()
        .unwrap()
}

fn benchmark_cell_colors(c: &mut Criterion) {
    let mut group = c.benchmark_group("joint_histogram_colors");

    for n in [40, 200, 1000] {
        let histogram = generate_test_histogram(n);
        for scale in [HistogramScale::Linear, HistogramScale::Log] {
            let options = create_test_options(800, 600, scale);
            let normalization = scale.normalization();

            group.throughput(Throughput::Elements(histogram.values.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(scale.to_string(), format!("{n}x{n}")),
                &histogram,
                |b, histogram| {
                    b.iter(|| {
                        histogram
                            .values
                            .iter()
                            .filter_map(|&v| normalization.normalize(v, options.vmin, options.vmax))
                            .map(|t| options.colormap.map(t))
                            .fold(0u64, |acc, color| acc + color.0 as u64)
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("joint_histogram_render");
    group.sample_size(20);

    let plot = JointHistogramPlot::new();
    for n in [40, 200] {
        let histogram = generate_test_histogram(n);
        let options = create_test_options(800, 600, HistogramScale::Log);

        group.bench_with_input(
            BenchmarkId::new("png", format!("{n}x{n}")),
            &histogram,
            |b, histogram| {
                // result kept whole: bitmap text needs system fonts
                b.iter(|| black_box(plot.render(black_box(histogram), &options)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_cell_colors, benchmark_render);
criterion_main!(benches);
