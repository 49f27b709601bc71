//! Demonstrates simple and cumulative histograms in one, two and three dimensions
//!
//! Run with `RUST_LOG=freq_histogram=debug` to see the binning trace.

use freq_histogram::{
    to_separated, BinOptions, BinningStrategy, Dataset, EdgeKind, Histogram1D, Histogram2D,
    Histogram3D, HistogramKind, Projection, StatsMode, TextPrinter,
};
use rand::prelude::*;
use rand_distr::{Exp, Normal};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(2024);
    let normal = Normal::new(50.0, 12.0)?;
    let scores: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng)).collect();

    // Example 1: one-dimensional histogram over a fixed range
    println!("=== 1D histogram ===");
    let options = BinOptions::new([12])?.with_range(0, 0.0, 100.0);
    let mut histogram = Histogram1D::with_options(HistogramKind::Simple, options)?;
    histogram.set_values(&scores)?;
    let result = histogram.calculate(StatsMode::Full)?;
    print!("{}", TextPrinter::new().output_stats(true).render(result));

    // Example 2: the same data as a cumulative distribution
    println!("\n=== 1D cumulative ===");
    histogram.set_type(HistogramKind::Cumulative);
    let result = histogram.calculate(StatsMode::Basic)?;
    print!("{}", TextPrinter::new().edge(EdgeKind::Mid).render(result));

    // Example 3: two-dimensional histogram from keyed JSON
    println!("\n=== 2D from JSON ===");
    let options = BinOptions::from_json(r#"{"nbins": {"x": 3, "y": 2}, "low": {"x": 0}}"#)?;
    let data = Dataset::from_json(
        r#"{"x": [0.5, 1.0, 2.0, 2.5, 3.0, 3.0], "y": [1.0, 4.0, 2.0, 3.5, 1.0, 4.0]}"#,
    )?;
    let mut grid = Histogram2D::with_options(HistogramKind::Simple, options)?;
    grid.set_dataset(data);
    let result = grid.calculate(StatsMode::Basic)?;
    print!("{}", to_separated(result, EdgeKind::Low, b',')?);

    // Example 4: three-dimensional histogram with the exhaustive binner
    println!("\n=== 3D exhaustive vs indexed ===");
    let exp = Exp::new(0.5)?;
    let points: Vec<[f64; 3]> = (0..300)
        .map(|_| [exp.sample(&mut rng), exp.sample(&mut rng), exp.sample(&mut rng)])
        .collect();
    let options = BinOptions::new([4, 4, 4])?
        .with_range(0, 0.0, 8.0)
        .with_range(1, 0.0, 8.0)
        .with_range(2, 0.0, 8.0);

    for strategy in [BinningStrategy::Exhaustive, BinningStrategy::Indexed] {
        let mut cube = Histogram3D::with_options(HistogramKind::Simple, options)?
            .with_strategy(strategy);
        cube.set_data(&points)?;
        let result = cube.calculate(StatsMode::Basic)?;
        println!(
            "{strategy:>10}: {} of {} points in range, busiest cell holds {}",
            result.histogram_data_count(),
            result.data_count(),
            result.max_count()
        );
    }

    let mut cube = Histogram3D::with_options(HistogramKind::Simple, options)?;
    cube.set_data(&points)?;
    cube.calculate(StatsMode::Basic)?;
    let table = cube.bins(Projection::Mid)?;
    println!("Cell centred at (1, 1, 1): {:?}", table.count_at([1.0, 1.0, 1.0]));

    Ok(())
}
