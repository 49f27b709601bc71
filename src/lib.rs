//! # freq-stats
//!
//! Frequency histograms for one, two and three dimensional data.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`freq_core`]: error taxonomy, axes and the statistics-provider trait
//! - [`freq_describe`]: the default descriptive statistics provider
//! - [`freq_histogram`]: the binning engine, rendering and export
//!
//! ## Quick Start
//!
//! ```rust
//! use freq_stats::prelude::*;
//!
//! let options = BinOptions::new([5]).unwrap().with_range(0, 0.0, 5.0);
//! let mut histogram = Histogram1D::with_options(HistogramKind::Simple, options).unwrap();
//! histogram.set_values(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//!
//! let result = histogram.calculate(StatsMode::Basic).unwrap();
//! assert_eq!(result.counts(), vec![2, 1, 1, 1, 1]);
//! ```

pub use freq_core;
pub use freq_describe;
pub use freq_histogram;

/// Commonly used types
pub mod prelude {
    pub use freq_core::{Axis, Error, Result, Statistics, StatisticsProvider, StatsMode};
    pub use freq_describe::Descriptive;
    pub use freq_histogram::{
        to_separated, BinOptions, BinTable, BinningStrategy, Dataset, EdgeKind, Histogram,
        Histogram1D, Histogram2D, Histogram3D, HistogramKind, HistogramResult, Projection,
        TextPrinter,
    };
}
