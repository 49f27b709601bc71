//! Equal-width frequency histograms for 1D, 2D and 3D data
//!
//! This crate bins numeric samples of one to three coordinates into an
//! equal-width lattice and reports simple or cumulative counts together with
//! descriptive statistics over the raw and in-range data.
//!
//! # Key Features
//!
//! - **Exact boundaries**: the first bin along an axis is `[low, high]`, later
//!   bins are `(low, high]`, so every in-range value lands in exactly one bin
//! - **One engine for all dimensions**: [`Histogram`] is generic over the
//!   number of coordinates
//! - **Interchangeable binners**: sorted sweep, exhaustive and indexed
//!   assignment produce identical tables
//! - **Reporting**: edge-keyed projections, JSON, ASCII bar charts and
//!   delimited export
//!
//! # Examples
//!
//! ## One dimension
//!
//! ```rust
//! use freq_core::StatsMode;
//! use freq_histogram::{BinOptions, Histogram1D, HistogramKind, Projection};
//!
//! let options = BinOptions::new([5]).unwrap().with_range(0, 0.0, 5.0);
//! let mut histogram = Histogram1D::with_options(HistogramKind::Cumulative, options).unwrap();
//! histogram.set_values(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! histogram.calculate(StatsMode::Basic).unwrap();
//!
//! let table = histogram.bins(Projection::High).unwrap();
//! assert_eq!(table.counts(), vec![2, 3, 4, 5, 6]);
//! assert_eq!(table.count_at([1.0]), Some(2));
//! ```
//!
//! ## Two dimensions with keyed input
//!
//! ```rust
//! use freq_core::StatsMode;
//! use freq_histogram::{BinOptions, Dataset, Histogram2D, HistogramKind, TextPrinter};
//!
//! let options = BinOptions::from_json(r#"{"nbins": {"x": 2, "y": 2}}"#).unwrap();
//! let data = Dataset::from_json(r#"{"x": [0, 1, 2, 2], "y": [0, 0.5, 1, 2]}"#).unwrap();
//!
//! let mut histogram = Histogram2D::with_options(HistogramKind::Simple, options).unwrap();
//! histogram.set_dataset(data);
//! let result = histogram.calculate(StatsMode::Full).unwrap();
//!
//! assert_eq!(result.counts(), vec![2, 0, 1, 1]);
//! println!("{}", TextPrinter::new().render(result));
//! ```

pub mod binners;
pub mod classifier;
pub mod cumulative;
pub mod dataset;
pub mod engine;
pub mod filter;
pub mod lattice;
pub mod options;
pub mod render;
pub mod types;

pub use binners::{Binner, BinningStrategy, ExhaustiveBinner, IndexedBinner, SweepBinner};
pub use classifier::{in_range, BoundaryPolicy};
pub use cumulative::{accumulate, cumulative};
pub use dataset::Dataset;
pub use engine::{Histogram, Histogram1D, Histogram2D, Histogram3D};
pub use filter::RangeFilter;
pub use lattice::{AxisBins, BinLattice, BinRange};
pub use options::{BinOptions, DEFAULT_BIN_COUNT};
pub use render::{to_separated, TextPrinter};
pub use types::{
    BinCell, BinEdges, BinTable, EdgeKey, EdgeKind, Extent, HistogramKind, HistogramResult,
    Projection,
};

// Re-export the shared vocabulary for convenience
pub use freq_core::{Axis, Error, Result, StatisticsProvider, StatsMode};

/// Calculate a one-dimensional histogram spanning the data
///
/// # Example
///
/// ```rust
/// use freq_histogram::{histogram, HistogramKind};
///
/// let result = histogram(&[1.0, 2.0, 2.0, 3.0], 2, HistogramKind::Simple).unwrap();
/// assert_eq!(result.counts(), vec![3, 1]);
/// ```
pub fn histogram(values: &[f64], bins: usize, kind: HistogramKind) -> Result<HistogramResult<1>> {
    let mut histogram = Histogram1D::from_values(kind, values, bins)?;
    Ok(histogram.calculate(StatsMode::Basic)?.clone())
}
