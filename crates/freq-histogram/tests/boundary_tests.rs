//! Boundary placement across dimensions and binning strategies

use freq_histogram::{
    BinOptions, BinningStrategy, Histogram, Histogram1D, Histogram2D, Histogram3D, HistogramKind,
    Projection, StatsMode,
};

const STRATEGIES: [BinningStrategy; 3] = [
    BinningStrategy::Auto,
    BinningStrategy::Exhaustive,
    BinningStrategy::Indexed,
];

fn canonical(kind: HistogramKind, strategy: BinningStrategy) -> Histogram1D {
    let options = BinOptions::new([5]).unwrap().with_range(0, 0.0, 5.0);
    let mut histogram = Histogram1D::with_options(kind, options)
        .unwrap()
        .with_strategy(strategy);
    histogram.set_values(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    histogram
}

#[test]
fn test_canonical_fixture_every_strategy() {
    for strategy in STRATEGIES.into_iter().chain([BinningStrategy::Sweep]) {
        let mut simple = canonical(HistogramKind::Simple, strategy);
        let result = simple.calculate(StatsMode::Basic).unwrap();
        assert_eq!(result.counts(), vec![2, 1, 1, 1, 1], "simple with {strategy}");

        let mut cumulative = canonical(HistogramKind::Cumulative, strategy);
        let result = cumulative.calculate(StatsMode::Basic).unwrap();
        assert_eq!(result.counts(), vec![2, 3, 4, 5, 6], "cumulative with {strategy}");
    }
}

#[test]
fn test_canonical_edges() {
    let mut histogram = canonical(HistogramKind::Simple, BinningStrategy::Auto);
    let result = histogram.calculate(StatsMode::Basic).unwrap();
    let first = &result.cells()[0];
    assert_eq!((first.edges[0].low, first.edges[0].high), (0.0, 1.0));
    let last = &result.cells()[4];
    assert_eq!((last.edges[0].low, last.edges[0].high), (4.0, 5.0));

    let low = histogram.bins(Projection::Low).unwrap();
    assert_eq!(low.count_at([0.0]), Some(2));
    assert_eq!(low.count_at([4.0]), Some(1));
    let mid = histogram.bins(Projection::Mid).unwrap();
    assert_eq!(mid.count_at([2.5]), Some(1));
}

#[test]
fn test_two_dimensional_shared_corner() {
    for strategy in STRATEGIES {
        let options = BinOptions::new([2, 2])
            .unwrap()
            .with_range(0, 0.0, 2.0)
            .with_range(1, 0.0, 2.0);
        let mut histogram = Histogram2D::with_options(HistogramKind::Simple, options)
            .unwrap()
            .with_strategy(strategy);
        histogram.set_data(&[[1.0, 1.0]]).unwrap();
        let result = histogram.calculate(StatsMode::Basic).unwrap();
        assert_eq!(result.counts(), vec![1, 0, 0, 0], "strategy {strategy}");
    }
}

#[test]
fn test_three_dimensional_extremes() {
    for strategy in STRATEGIES {
        let options = BinOptions::new([2, 2, 2])
            .unwrap()
            .with_range(0, 0.0, 1.0)
            .with_range(1, 0.0, 1.0)
            .with_range(2, 0.0, 1.0);
        let mut histogram = Histogram3D::with_options(HistogramKind::Simple, options)
            .unwrap()
            .with_strategy(strategy);
        histogram
            .set_data(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.5, 0.5, 0.5], [0.5, 1.0, 0.0]])
            .unwrap();
        let result = histogram.calculate(StatsMode::Basic).unwrap();

        let counts = result.counts();
        assert_eq!(counts.len(), 8);
        assert_eq!(counts.iter().sum::<usize>(), 4);
        assert_eq!(counts[0], 2, "origin and centre fall in the first cell");
        assert_eq!(counts[7], 1);
        // [0.5, 1.0, 0.0] sits at x bin 0, y bin 1, z bin 0
        assert_eq!(counts[2], 1);
    }
}

#[test]
fn test_adversarial_boundaries_counted_once() {
    // Edges of 0.1-wide bins are not exactly representable
    let values: Vec<f64> = (0..=30).map(|i| i as f64 * 0.1).collect();
    for strategy in STRATEGIES.into_iter().chain([BinningStrategy::Sweep]) {
        let options = BinOptions::new([30]).unwrap().with_low(0, 0.0);
        let mut histogram = Histogram1D::with_options(HistogramKind::Simple, options)
            .unwrap()
            .with_strategy(strategy);
        histogram.set_values(&values).unwrap();
        let result = histogram.calculate(StatsMode::Basic).unwrap();
        assert_eq!(
            result.counts().iter().sum::<usize>(),
            values.len(),
            "strategy {strategy}"
        );
    }
}

#[test]
fn test_edge_values_agree_across_strategies() {
    let samples: Vec<[f64; 2]> = (0..=12)
        .flat_map(|i| (0..=8).map(move |j| [i as f64 / 4.0, j as f64 * 0.3]))
        .collect();
    let options = BinOptions::new([3, 4])
        .unwrap()
        .with_range(0, 0.0, 3.0)
        .with_low(1, 0.0);

    let tables: Vec<Vec<usize>> = STRATEGIES
        .iter()
        .map(|&strategy| {
            let mut histogram: Histogram<2> =
                Histogram2D::with_options(HistogramKind::Simple, options)
                    .unwrap()
                    .with_strategy(strategy);
            histogram.set_data(&samples).unwrap();
            histogram.calculate(StatsMode::Basic).unwrap().counts()
        })
        .collect();

    assert_eq!(tables[0], tables[1]);
    assert_eq!(tables[1], tables[2]);
    assert_eq!(tables[0].iter().sum::<usize>(), samples.len());
}

#[test]
fn test_out_of_range_samples_are_ignored() {
    let options = BinOptions::new([2]).unwrap().with_range(0, 1.0, 3.0);
    let mut histogram = Histogram1D::with_options(HistogramKind::Simple, options).unwrap();
    histogram.set_values(&[0.0, 0.99, 1.0, 2.0, 3.0, 3.01, 10.0]).unwrap();
    let result = histogram.calculate(StatsMode::Basic).unwrap();
    assert_eq!(result.counts(), vec![2, 1]);
    assert_eq!(result.histogram_data_count(), 3);
    assert_eq!(result.data_count(), 7);
}
