//! Validated sample storage

use crate::types::Extent;
use freq_core::{Axis, Error, Result};
use serde_json::{Map, Value};

/// Non-empty sequence of finite `D`-coordinate samples
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<const D: usize> {
    samples: Vec<[f64; D]>,
    extent: [Extent; D],
}

impl<const D: usize> Dataset<D> {
    /// Take ownership of `samples`, rejecting empty or non-finite input
    pub fn from_samples(samples: Vec<[f64; D]>) -> Result<Self> {
        if let Some(position) = samples
            .iter()
            .position(|sample| sample.iter().any(|v| !v.is_finite()))
        {
            return Err(Error::non_finite(&format!("sample {position}")));
        }
        let extent = Extent::of_samples(&samples).ok_or_else(Error::empty_data)?;
        Ok(Self { samples, extent })
    }

    /// Zip one column per axis into samples
    pub fn from_columns(columns: [&[f64]; D]) -> Result<Self> {
        let expected = columns.first().map_or(0, |column| column.len());
        for (axis, column) in Axis::for_dimensions(D).iter().zip(columns.iter()) {
            if column.len() != expected {
                return Err(Error::size_mismatch(
                    expected,
                    column.len(),
                    &format!("column {axis}"),
                ));
            }
        }
        let samples = (0..expected)
            .map(|i| std::array::from_fn(|d| columns[d][i]))
            .collect();
        Self::from_samples(samples)
    }

    /// Parse a keyed or positional JSON dataset
    ///
    /// Accepted shapes:
    /// - records: `[{"x": 1, "y": 2}, ...]`
    /// - columns: `{"x": [1, ...], "y": [2, ...]}`
    /// - tuples: `[[1, 2], ...]`
    /// - plain values (one dimension only): `[1, 2, 3]`
    ///
    /// Keys must be exactly the histogram's axes. Entries are numbers or
    /// numeric strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::InvalidData(format!("malformed dataset: {e}")))?;
        let samples: Vec<[f64; D]> = match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| sample_from_value(item, i))
                .collect::<Result<Vec<_>>>()?,
            Value::Object(columns) => samples_from_columns(&columns)?,
            other => {
                return Err(Error::InvalidData(format!(
                    "dataset must be an array or an object of columns, got {other}"
                )))
            }
        };
        Self::from_samples(samples)
    }

    pub fn samples(&self) -> &[[f64; D]] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn extent(&self) -> &[Extent; D] {
        &self.extent
    }

    /// Values of one coordinate, in sample order
    pub fn column(&self, axis: Axis) -> Vec<f64> {
        let d = axis.index();
        if d >= D {
            return Vec::new();
        }
        self.samples.iter().map(|sample| sample[d]).collect()
    }

    pub fn into_samples(self) -> Vec<[f64; D]> {
        self.samples
    }

    pub(crate) fn sort_by_first_axis(&mut self) {
        if D > 0 {
            self.samples.sort_by(|a, b| a[0].total_cmp(&b[0]));
        }
    }
}

impl Dataset<1> {
    /// One-dimensional dataset from plain values
    pub fn from_values(values: &[f64]) -> Result<Self> {
        Self::from_samples(values.iter().map(|&v| [v]).collect())
    }
}

fn number(value: &Value, context: &str) -> Result<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::InvalidData(format!("{context} is not a number: {value}")))
}

fn check_keys<'a>(
    keys: impl Iterator<Item = &'a String>,
    dimensions: usize,
    context: &str,
) -> Result<()> {
    let axes = Axis::for_dimensions(dimensions);
    let mut seen = 0;
    for key in keys {
        if !axes.iter().any(|axis| axis.name() == key.as_str()) {
            return Err(Error::InvalidData(format!("{context} has undeclared key '{key}'")));
        }
        seen += 1;
    }
    if seen != axes.len() {
        return Err(Error::InvalidData(format!(
            "{context} must have exactly the keys {}",
            axes.iter().map(|a| a.name()).collect::<Vec<_>>().join(", ")
        )));
    }
    Ok(())
}

fn sample_from_value<const D: usize>(item: &Value, position: usize) -> Result<[f64; D]> {
    let context = format!("sample {position}");
    let mut sample = [0.0; D];
    match item {
        Value::Object(record) => {
            check_keys(record.keys(), D, &context)?;
            for (slot, axis) in sample.iter_mut().zip(Axis::for_dimensions(D)) {
                let value = record.get(axis.name()).ok_or_else(|| {
                    Error::InvalidData(format!("{context} is missing {axis}"))
                })?;
                *slot = number(value, &format!("{context}.{axis}"))?;
            }
        }
        Value::Array(values) => {
            if values.len() != D {
                return Err(Error::size_mismatch(D, values.len(), &context));
            }
            for (slot, value) in sample.iter_mut().zip(values.iter()) {
                *slot = number(value, &context)?;
            }
        }
        scalar if D == 1 => sample[0] = number(scalar, &context)?,
        other => {
            return Err(Error::InvalidData(format!(
                "{context} must be a record or array, got {other}"
            )))
        }
    }
    Ok(sample)
}

fn samples_from_columns<const D: usize>(columns: &Map<String, Value>) -> Result<Vec<[f64; D]>> {
    check_keys(columns.keys(), D, "column set")?;
    let mut parsed: Vec<Vec<f64>> = Vec::with_capacity(D);
    for axis in Axis::for_dimensions(D) {
        let values = match columns.get(axis.name()) {
            Some(Value::Array(values)) => values,
            _ => {
                return Err(Error::InvalidData(format!("column {axis} must be an array")));
            }
        };
        let column = values
            .iter()
            .enumerate()
            .map(|(i, v)| number(v, &format!("column {axis}[{i}]")))
            .collect::<Result<Vec<_>>>()?;
        parsed.push(column);
    }

    let expected = parsed.first().map_or(0, Vec::len);
    for (axis, column) in Axis::for_dimensions(D).iter().zip(parsed.iter()) {
        if column.len() != expected {
            return Err(Error::size_mismatch(expected, column.len(), &format!("column {axis}")));
        }
    }
    Ok((0..expected)
        .map(|i| std::array::from_fn(|d| parsed[d][i]))
        .collect())
}
