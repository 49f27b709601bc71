//! Histogram engine
//!
//! Owns the bin configuration, a private copy of the dataset and the result
//! of the last calculation. Any change to configuration or data discards
//! that result.

use crate::binners::BinningStrategy;
use crate::cumulative::accumulate;
use crate::dataset::Dataset;
use crate::filter::RangeFilter;
use crate::lattice::{BinLattice, BinRange};
use crate::options::BinOptions;
use crate::types::{BinTable, Extent, HistogramKind, HistogramResult, Projection};
use freq_core::{Axis, AxisStatistics, Error, Result, StatisticsProvider, StatsMode};
use freq_describe::Descriptive;
use tracing::{debug, instrument};

/// Equal-width frequency histogram over `D`-coordinate samples
///
/// `D` ranges over 1, 2 and 3; other values fail to compile.
///
/// # Example
///
/// ```rust
/// use freq_core::StatsMode;
/// use freq_histogram::{BinOptions, Histogram1D, HistogramKind};
///
/// let mut histogram = Histogram1D::new(HistogramKind::Simple);
/// histogram
///     .set_bin_options(BinOptions::new([5]).unwrap().with_range(0, 0.0, 5.0))
///     .unwrap();
/// histogram.set_values(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
///
/// let result = histogram.calculate(StatsMode::Basic).unwrap();
/// assert_eq!(result.counts(), vec![2, 1, 1, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Histogram<const D: usize, S: StatisticsProvider = Descriptive> {
    kind: HistogramKind,
    strategy: BinningStrategy,
    provider: S,
    options: Option<BinOptions<D>>,
    data: Option<Dataset<D>>,
    result: Option<HistogramResult<D>>,
}

pub type Histogram1D<S = Descriptive> = Histogram<1, S>;
pub type Histogram2D<S = Descriptive> = Histogram<2, S>;
pub type Histogram3D<S = Descriptive> = Histogram<3, S>;

impl<const D: usize> Histogram<D, Descriptive> {
    /// Unconfigured histogram using descriptive statistics
    pub fn new(kind: HistogramKind) -> Self {
        Self::with_provider(kind, Descriptive)
    }

    /// Histogram with bin options already applied
    pub fn with_options(kind: HistogramKind, options: BinOptions<D>) -> Result<Self> {
        let mut histogram = Self::new(kind);
        histogram.set_bin_options(options)?;
        Ok(histogram)
    }
}

impl<const D: usize> Default for Histogram<D, Descriptive> {
    fn default() -> Self {
        Self::new(HistogramKind::default())
    }
}

impl<const D: usize, S: StatisticsProvider> Histogram<D, S> {
    const SUPPORTED: () = assert!(
        D >= 1 && D <= Axis::MAX_DIMENSIONS,
        "histograms support one to three dimensions"
    );

    /// Histogram reporting statistics through `provider`
    pub fn with_provider(kind: HistogramKind, provider: S) -> Self {
        let () = Self::SUPPORTED;
        Self {
            kind,
            strategy: BinningStrategy::default(),
            provider,
            options: None,
            data: None,
            result: None,
        }
    }

    /// Select the binning algorithm
    pub fn with_strategy(mut self, strategy: BinningStrategy) -> Self {
        self.strategy = strategy;
        self.result = None;
        self
    }

    pub fn strategy(&self) -> BinningStrategy {
        self.strategy
    }

    pub fn kind(&self) -> HistogramKind {
        self.kind
    }

    pub fn set_type(&mut self, kind: HistogramKind) {
        if self.kind != kind {
            self.kind = kind;
            self.result = None;
        }
    }

    pub fn provider(&self) -> &S {
        &self.provider
    }

    /// Replace the bin configuration
    ///
    /// A rejected configuration leaves the histogram unconfigured.
    pub fn set_bin_options(&mut self, options: BinOptions<D>) -> Result<()> {
        self.result = None;
        self.options = None;
        options.validate()?;
        debug!("Bin options set: bins={:?}", options.bins());
        self.options = Some(options);
        Ok(())
    }

    pub fn bin_options(&self) -> Option<&BinOptions<D>> {
        self.options.as_ref()
    }

    /// Copy `samples` in as the dataset
    pub fn set_data(&mut self, samples: &[[f64; D]]) -> Result<()> {
        self.data = None;
        self.result = None;
        self.set_dataset(Dataset::from_samples(samples.to_vec())?);
        Ok(())
    }

    /// Take `dataset` as the dataset
    pub fn set_dataset(&mut self, mut dataset: Dataset<D>) {
        self.result = None;
        if D == 1 {
            dataset.sort_by_first_axis();
        }
        if self.options.is_none() {
            debug!("No bin options set, using defaults");
            self.options = Some(BinOptions::default());
        }
        debug!("Dataset set: {} samples", dataset.len());
        self.data = Some(dataset);
    }

    pub fn data(&self) -> Option<&Dataset<D>> {
        self.data.as_ref()
    }

    /// Range per axis that a calculation would use now
    pub fn resolved_ranges(&self) -> Result<[BinRange; D]> {
        let (options, data) = self.configuration()?;
        Ok(options.resolve(data.extent()))
    }

    fn configuration(&self) -> Result<(&BinOptions<D>, &Dataset<D>)> {
        let options = self
            .options
            .as_ref()
            .ok_or_else(|| Error::NotConfigured("bin options have not been set".to_string()))?;
        let data = self
            .data
            .as_ref()
            .ok_or_else(|| Error::NotConfigured("no data has been set".to_string()))?;
        Ok((options, data))
    }

    /// Bin the dataset and compute statistics
    ///
    /// Replaces any earlier result.
    #[instrument(level = "debug", skip(self), fields(dimensions = D, kind = ?self.kind))]
    pub fn calculate(&mut self, stats_mode: StatsMode) -> Result<&HistogramResult<D>> {
        self.result = None;
        let (options, data) = self.configuration()?;

        let ranges = options.resolve(data.extent());
        let lattice = BinLattice::build(&ranges)?;
        let in_range = RangeFilter::new(ranges).filter(data.samples());

        let mut counts = self.strategy.assign(&in_range, &lattice)?;
        if self.kind == HistogramKind::Cumulative {
            accumulate(&mut counts);
        }
        debug!(
            "Binned {} of {} samples into {} cells using {}",
            in_range.len(),
            data.len(),
            lattice.len(),
            self.strategy.resolve(D)
        );

        let result = HistogramResult {
            kind: self.kind,
            stats_mode,
            ranges,
            bins: lattice.label(&counts),
            data_count: data.len(),
            histogram_data_count: in_range.len(),
            data_extent: *data.extent(),
            histogram_data_extent: Extent::of_samples(&in_range),
            data_stats: self.axis_statistics(data.samples(), stats_mode)?,
            histogram_data_stats: self.axis_statistics(&in_range, stats_mode)?,
        };
        Ok(&*self.result.insert(result))
    }

    fn axis_statistics(&self, samples: &[[f64; D]], mode: StatsMode) -> Result<AxisStatistics> {
        let mut stats = AxisStatistics::new();
        for &axis in Axis::for_dimensions(D) {
            let column: Vec<f64> = samples.iter().map(|sample| sample[axis.index()]).collect();
            stats.insert(axis, self.provider.compute(&column, mode)?);
        }
        Ok(stats)
    }

    pub fn is_calculated(&self) -> bool {
        self.result.is_some()
    }

    /// Result of the last successful calculation
    pub fn histogram_info(&self) -> Result<&HistogramResult<D>> {
        self.result.as_ref().ok_or(Error::NotCalculated)
    }

    pub fn bins(&self, projection: Projection) -> Result<BinTable<D>> {
        Ok(self.histogram_info()?.bins(projection))
    }

    pub fn data_stats(&self) -> Result<&AxisStatistics> {
        Ok(self.histogram_info()?.data_stats())
    }

    pub fn histogram_data_stats(&self) -> Result<&AxisStatistics> {
        Ok(self.histogram_info()?.histogram_data_stats())
    }

    /// Samples inside the range used by the last calculation
    pub fn histogram_data(&self) -> Result<Vec<[f64; D]>> {
        let result = self.histogram_info()?;
        let data = self.data.as_ref().ok_or(Error::NotCalculated)?;
        Ok(RangeFilter::new(*result.ranges()).filter(data.samples()))
    }

    pub fn to_json(&self) -> Result<String> {
        self.histogram_info()?.to_json()
    }
}

impl Histogram<1, Descriptive> {
    /// One-dimensional histogram over `values`, with `bins` bins spanning the data
    pub fn from_values(kind: HistogramKind, values: &[f64], bins: usize) -> Result<Self> {
        let mut histogram = Self::with_options(kind, BinOptions::new([bins])?)?;
        histogram.set_values(values)?;
        Ok(histogram)
    }
}

impl<S: StatisticsProvider> Histogram<1, S> {
    /// Copy plain values in as a one-dimensional dataset
    pub fn set_values(&mut self, values: &[f64]) -> Result<()> {
        self.data = None;
        self.result = None;
        self.set_dataset(Dataset::from_values(values)?);
        Ok(())
    }
}
