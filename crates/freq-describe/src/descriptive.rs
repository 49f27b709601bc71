//! Classical descriptive statistics
//!
//! Location, dispersion and shape measures backed by `statrs`.

use freq_core::{Result, Statistics, StatisticsProvider, StatsMode};
use statrs::statistics::{Data, OrderStatistics, Statistics as SampleStatistics};
use tracing::trace;

/// Names reported in [`StatsMode::Basic`]
pub const BASIC_STATISTICS: [&str; 12] = [
    "count", "min", "max", "sum", "sum2", "mean", "median", "midrange", "range", "variance",
    "stdev", "absdev",
];

/// Additional names reported in [`StatsMode::Full`]
pub const FULL_STATISTICS: [&str; 9] = [
    "geometric_mean",
    "harmonic_mean",
    "std_error_of_mean",
    "skewness",
    "kurtosis",
    "coeff_of_variation",
    "quartile1",
    "quartile3",
    "interquartile_range",
];

/// Default statistics provider
///
/// Variance and standard deviation are sample (n - 1) estimates, kurtosis is
/// excess kurtosis. Measures that are undefined for the input (for example
/// the variance of a single value or the geometric mean of negative data)
/// are reported as NaN rather than omitted, so the key set depends only on
/// the mode. Empty input reports only `count`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descriptive;

impl Descriptive {
    pub fn new() -> Self {
        Self
    }

    fn basic(values: &[f64], stats: &mut Statistics) -> Moments {
        let n = values.len() as f64;
        let min = SampleStatistics::min(values);
        let max = SampleStatistics::max(values);
        let sum: f64 = values.iter().sum();
        let sum2: f64 = values.iter().map(|x| x * x).sum();
        let mean = SampleStatistics::mean(values);
        let variance = SampleStatistics::variance(values);
        let stdev = SampleStatistics::std_dev(values);
        let absdev = values.iter().map(|x| (x - mean).abs()).sum::<f64>() / n;

        let mut ordered = Data::new(values.to_vec());
        let median = ordered.median();

        stats.insert("min".to_string(), min);
        stats.insert("max".to_string(), max);
        stats.insert("sum".to_string(), sum);
        stats.insert("sum2".to_string(), sum2);
        stats.insert("mean".to_string(), mean);
        stats.insert("median".to_string(), median);
        stats.insert("midrange".to_string(), (min + max) / 2.0);
        stats.insert("range".to_string(), max - min);
        stats.insert("variance".to_string(), variance);
        stats.insert("stdev".to_string(), stdev);
        stats.insert("absdev".to_string(), absdev);

        Moments {
            n,
            mean,
            stdev,
            ordered,
        }
    }

    fn full(values: &[f64], mut moments: Moments, stats: &mut Statistics) {
        let Moments { n, mean, stdev, .. } = moments;

        let central = |power: i32| values.iter().map(|x| (x - mean).powi(power)).sum::<f64>() / n;
        let skewness = central(3) / stdev.powi(3);
        let kurtosis = central(4) / stdev.powi(4) - 3.0;

        stats.insert("geometric_mean".to_string(), SampleStatistics::geometric_mean(values));
        stats.insert("harmonic_mean".to_string(), SampleStatistics::harmonic_mean(values));
        stats.insert("std_error_of_mean".to_string(), stdev / n.sqrt());
        stats.insert("skewness".to_string(), skewness);
        stats.insert("kurtosis".to_string(), kurtosis);
        stats.insert("coeff_of_variation".to_string(), stdev / mean);
        stats.insert("quartile1".to_string(), moments.ordered.lower_quartile());
        stats.insert("quartile3".to_string(), moments.ordered.upper_quartile());
        stats.insert(
            "interquartile_range".to_string(),
            moments.ordered.interquartile_range(),
        );
    }
}

struct Moments {
    n: f64,
    mean: f64,
    stdev: f64,
    ordered: Data<Vec<f64>>,
}

impl StatisticsProvider for Descriptive {
    fn compute(&self, values: &[f64], mode: StatsMode) -> Result<Statistics> {
        trace!("Computing {:?} statistics over {} values", mode, values.len());

        let mut stats = Statistics::new();
        stats.insert("count".to_string(), values.len() as f64);
        if values.is_empty() {
            return Ok(stats);
        }

        let moments = Self::basic(values, &mut stats);
        if mode == StatsMode::Full {
            Self::full(values, moments, &mut stats);
        }
        Ok(stats)
    }

    fn name(&self) -> &str {
        "descriptive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_basic_statistics() {
        let stats = Descriptive.compute(&SAMPLE, StatsMode::Basic).unwrap();

        assert_eq!(stats.len(), BASIC_STATISTICS.len());
        assert_eq!(stats["count"], 8.0);
        assert_eq!(stats["min"], 2.0);
        assert_eq!(stats["max"], 9.0);
        assert_eq!(stats["sum"], 40.0);
        assert_eq!(stats["sum2"], 232.0);
        assert_eq!(stats["mean"], 5.0);
        assert_eq!(stats["midrange"], 5.5);
        assert_eq!(stats["range"], 7.0);
        assert_relative_eq!(stats["median"], 4.5, epsilon = 1e-12);
        assert_relative_eq!(stats["variance"], 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(stats["stdev"], (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(stats["absdev"], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_full_statistics_extend_basic() {
        let stats = Descriptive.compute(&SAMPLE, StatsMode::Full).unwrap();

        assert_eq!(
            stats.len(),
            BASIC_STATISTICS.len() + FULL_STATISTICS.len()
        );
        for name in BASIC_STATISTICS.iter().chain(FULL_STATISTICS.iter()) {
            assert!(stats.contains_key(*name), "missing {name}");
        }

        let stdev = (32.0f64 / 7.0).sqrt();
        assert_relative_eq!(stats["std_error_of_mean"], stdev / 8.0f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(stats["coeff_of_variation"], stdev / 5.0, epsilon = 1e-12);
        assert!(stats["skewness"] > 0.0, "right tail should give positive skew");
        assert!(stats["quartile1"] <= stats["quartile3"]);
        assert_relative_eq!(
            stats["interquartile_range"],
            stats["quartile3"] - stats["quartile1"],
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_symmetric_data_has_zero_skew() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = Descriptive.compute(&data, StatsMode::Full).unwrap();
        assert_relative_eq!(stats["skewness"], 0.0, epsilon = 1e-12);
        assert_eq!(stats["median"], 3.0);
    }

    #[test]
    fn test_empty_input_reports_count_only() {
        let stats = Descriptive.compute(&[], StatsMode::Full).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats["count"], 0.0);
    }

    #[test]
    fn test_single_value_variance_is_nan() {
        let stats = Descriptive.compute(&[3.0], StatsMode::Basic).unwrap();
        assert_eq!(stats["mean"], 3.0);
        assert_eq!(stats["range"], 0.0);
        assert!(stats["variance"].is_nan());
    }

    #[test]
    fn test_geometric_mean_of_negative_data_is_nan() {
        let stats = Descriptive.compute(&[-1.0, 2.0, 3.0], StatsMode::Full).unwrap();
        assert!(stats["geometric_mean"].is_nan());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_mean_between_extremes(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
                let stats = Descriptive.compute(&values, StatsMode::Basic).unwrap();
                prop_assert_eq!(stats["count"], values.len() as f64);
                prop_assert!(stats["min"] <= stats["mean"] + 1e-6);
                prop_assert!(stats["mean"] <= stats["max"] + 1e-6);
                prop_assert!(stats["min"] <= stats["median"] && stats["median"] <= stats["max"]);
            }
        }
    }
}
