//! Bin configuration

use crate::lattice::BinRange;
use crate::types::Extent;
use freq_core::{Axis, Error, Result};
use num_traits::ToPrimitive;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Bin count used when none, or an unusable one, is given
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Per-axis range and bin count
///
/// An unset `low` or `high` is taken from the data extent whenever the
/// histogram is calculated.
///
/// # Example
///
/// ```rust
/// use freq_histogram::BinOptions;
///
/// let options = BinOptions::new([5, 4])
///     .unwrap()
///     .with_range(0, 0.0, 5.0)
///     .with_low(1, -2.0);
///
/// assert_eq!(options.bins(), [5, 4]);
/// assert_eq!(options.low()[1], Some(-2.0));
/// assert_eq!(options.high()[1], None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinOptions<const D: usize> {
    low: [Option<f64>; D],
    high: [Option<f64>; D],
    bins: [usize; D],
}

impl<const D: usize> Default for BinOptions<D> {
    fn default() -> Self {
        Self {
            low: [None; D],
            high: [None; D],
            bins: [DEFAULT_BIN_COUNT; D],
        }
    }
}

impl<const D: usize> BinOptions<D> {
    /// Options with the given bin counts and a data-derived range
    ///
    /// Counts that are not positive integers fall back to
    /// [`DEFAULT_BIN_COUNT`]. NaN, infinite or unrepresentable counts are
    /// rejected with `InvalidOptions`.
    pub fn new<N: ToPrimitive + Copy>(bins: [N; D]) -> Result<Self> {
        let mut sanitized = [DEFAULT_BIN_COUNT; D];
        for ((slot, axis), count) in sanitized
            .iter_mut()
            .zip(Axis::for_dimensions(D))
            .zip(bins.iter())
        {
            *slot = sanitize_bin_count(*axis, count.to_f64())?;
        }
        Ok(Self {
            bins: sanitized,
            ..Self::default()
        })
    }

    /// Set the low edge of axis `dimension`
    pub fn with_low(mut self, dimension: usize, low: f64) -> Self {
        if let Some(slot) = self.low.get_mut(dimension) {
            *slot = Some(low);
        }
        self
    }

    /// Set the high edge of axis `dimension`
    pub fn with_high(mut self, dimension: usize, high: f64) -> Self {
        if let Some(slot) = self.high.get_mut(dimension) {
            *slot = Some(high);
        }
        self
    }

    pub fn with_range(self, dimension: usize, low: f64, high: f64) -> Self {
        self.with_low(dimension, low).with_high(dimension, high)
    }

    pub fn low(&self) -> &[Option<f64>; D] {
        &self.low
    }

    pub fn high(&self) -> &[Option<f64>; D] {
        &self.high
    }

    pub fn bins(&self) -> [usize; D] {
        self.bins
    }

    /// Reject configured edges that are NaN or infinite
    pub fn validate(&self) -> Result<()> {
        for (axis, (low, high)) in Axis::for_dimensions(D)
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
        {
            for (name, edge) in [("low", low), ("high", high)] {
                if let Some(value) = edge {
                    if !value.is_finite() {
                        return Err(Error::InvalidOptions(format!(
                            "{name} edge for axis {axis} is not finite: {value}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Fill unset edges from `extent`
    pub fn resolve(&self, extent: &[Extent; D]) -> [BinRange; D] {
        std::array::from_fn(|d| {
            BinRange::new(
                self.low[d].unwrap_or(extent[d].min),
                self.high[d].unwrap_or(extent[d].max),
                self.bins[d],
            )
        })
    }

    /// Parse keyed options
    ///
    /// ```json
    /// {"low": {"x": 0}, "high": {"x": 5}, "nbins": {"x": 5}}
    /// ```
    ///
    /// `nbins` must name every axis of the histogram and nothing else; `low`
    /// and `high` may name any subset. Values are numbers or numeric strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BinOptionsConfig = serde_json::from_str(json)
            .map_err(|e| Error::InvalidOptions(format!("malformed bin options: {e}")))?;
        let axes = Axis::for_dimensions(D);

        let nbins = config
            .nbins
            .ok_or_else(|| Error::InvalidOptions("bin counts are missing".to_string()))?;
        check_declared(&nbins, axes, "nbins")?;
        check_declared(&config.low, axes, "low")?;
        check_declared(&config.high, axes, "high")?;

        let mut options = Self::default();
        for (d, &axis) in axes.iter().enumerate() {
            let count = nbins.get(axis.name()).ok_or_else(|| {
                Error::InvalidOptions(format!("bin count for axis {axis} is missing"))
            })?;
            options.bins[d] = sanitize_bin_count(axis, Some(numeric(count, axis, "nbins")?))?;

            if let Some(low) = config.low.get(axis.name()) {
                options.low[d] = Some(numeric(low, axis, "low")?);
            }
            if let Some(high) = config.high.get(axis.name()) {
                options.high[d] = Some(numeric(high, axis, "high")?);
            }
        }
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Deserialize)]
struct BinOptionsConfig {
    #[serde(default)]
    low: BTreeMap<String, Value>,
    #[serde(default)]
    high: BTreeMap<String, Value>,
    nbins: Option<BTreeMap<String, Value>>,
}

fn check_declared(entries: &BTreeMap<String, Value>, axes: &[Axis], field: &str) -> Result<()> {
    match entries.keys().find(|key| !axes.iter().any(|axis| axis.name() == key.as_str())) {
        Some(key) => Err(Error::InvalidOptions(format!(
            "{field} names undeclared axis '{key}'"
        ))),
        None => Ok(()),
    }
}

fn numeric(value: &Value, axis: Axis, field: &str) -> Result<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        Error::InvalidOptions(format!("{field} for axis {axis} is not a number: {value}"))
    })
}

/// Turn a requested bin count into a usable one
///
/// Non-positive and fractional counts fall back to [`DEFAULT_BIN_COUNT`]
/// with a warning.
pub fn sanitize_bin_count(axis: Axis, requested: Option<f64>) -> Result<usize> {
    let value = requested.ok_or_else(|| {
        Error::InvalidOptions(format!("bin count for axis {axis} is not a number"))
    })?;
    if !value.is_finite() {
        return Err(Error::InvalidOptions(format!(
            "bin count for axis {axis} is not finite: {value}"
        )));
    }
    if value < 1.0 || value.fract() != 0.0 {
        warn!(
            "Bin count {} for axis {} is not a positive integer, using {}",
            value, axis, DEFAULT_BIN_COUNT
        );
        return Ok(DEFAULT_BIN_COUNT);
    }
    value.to_usize().ok_or_else(|| {
        Error::InvalidOptions(format!("bin count for axis {axis} is out of range: {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = BinOptions::<3>::default();
        assert_eq!(options.bins(), [10, 10, 10]);
        assert_eq!(options.low(), &[None, None, None]);
    }

    #[test]
    fn test_bin_count_defaults() {
        let options = BinOptions::new([0.0, 2.5]).unwrap();
        assert_eq!(options.bins(), [DEFAULT_BIN_COUNT, DEFAULT_BIN_COUNT]);

        let options = BinOptions::new([-4i32]).unwrap();
        assert_eq!(options.bins(), [DEFAULT_BIN_COUNT]);

        let options = BinOptions::new([1u8, 2u8]).unwrap();
        assert_eq!(options.bins(), [1, 2]);
    }

    #[test]
    fn test_non_numeric_bin_count() {
        assert!(matches!(
            BinOptions::new([f64::NAN]),
            Err(Error::InvalidOptions(_))
        ));
        assert!(matches!(
            BinOptions::new([5.0, f64::INFINITY]),
            Err(Error::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_edges() {
        let options = BinOptions::new([4]).unwrap().with_low(0, f64::NEG_INFINITY);
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
        let options = BinOptions::new([4]).unwrap().with_range(0, 0.0, 1.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_resolve_uses_extent_for_unset_edges() {
        let options = BinOptions::new([5, 3]).unwrap().with_low(0, -1.0).with_high(1, 9.0);
        let extent = [Extent::new(0.0, 4.0), Extent::new(2.0, 6.0)];
        let ranges = options.resolve(&extent);
        assert_eq!(ranges[0], BinRange::new(-1.0, 4.0, 5));
        assert_eq!(ranges[1], BinRange::new(2.0, 9.0, 3));
    }

    #[test]
    fn test_out_of_bounds_dimension_is_ignored() {
        let options = BinOptions::new([5]).unwrap().with_range(2, 0.0, 1.0);
        assert_eq!(options.low(), &[None]);
    }

    #[test]
    fn test_from_json() {
        let options = BinOptions::<2>::from_json(
            r#"{"low": {"x": 0, "y": "-1.5"}, "high": {"x": 5}, "nbins": {"x": 5, "y": "4"}}"#,
        )
        .unwrap();
        assert_eq!(options.bins(), [5, 4]);
        assert_eq!(options.low(), &[Some(0.0), Some(-1.5)]);
        assert_eq!(options.high(), &[Some(5.0), None]);
    }

    #[test]
    fn test_from_json_errors() {
        let missing_axis = BinOptions::<2>::from_json(r#"{"nbins": {"x": 5}}"#);
        assert!(matches!(missing_axis, Err(Error::InvalidOptions(_))));

        let undeclared = BinOptions::<1>::from_json(r#"{"nbins": {"x": 5, "y": 5}}"#);
        assert!(matches!(undeclared, Err(Error::InvalidOptions(_))));

        let non_numeric = BinOptions::<1>::from_json(r#"{"nbins": {"x": "five"}}"#);
        assert!(matches!(non_numeric, Err(Error::InvalidOptions(_))));

        let bad_low = BinOptions::<1>::from_json(r#"{"low": {"x": [1]}, "nbins": {"x": 5}}"#);
        assert!(matches!(bad_low, Err(Error::InvalidOptions(_))));

        let no_counts = BinOptions::<1>::from_json(r#"{"low": {"x": 0}}"#);
        assert!(matches!(no_counts, Err(Error::InvalidOptions(_))));

        let malformed = BinOptions::<1>::from_json("not json");
        assert!(matches!(malformed, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_from_json_invalid_count_defaults() {
        let options = BinOptions::<1>::from_json(r#"{"nbins": {"x": -3}}"#).unwrap();
        assert_eq!(options.bins(), [DEFAULT_BIN_COUNT]);
    }
}
