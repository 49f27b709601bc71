//! Equal-width bin lattice
//!
//! Each axis is divided into `bins` intervals of width `(high - low) / bins`.
//! Edge `i` is always computed as `low + i * width`, so the upper edge of one
//! bin and the lower edge of the next are the same `f64`, and the last upper
//! edge is exactly `high`. Cells of the lattice are the cross product of the
//! per-axis intervals, emitted in row-major order (`x` outermost).

use crate::classifier::BoundaryPolicy;
use crate::types::{BinCell, BinEdges};
use freq_core::{Axis, Error, Result};
use serde::{Deserialize, Serialize};

/// Range and bin count along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinRange {
    pub low: f64,
    pub high: f64,
    pub bins: usize,
}

impl BinRange {
    pub fn new(low: f64, high: f64, bins: usize) -> Self {
        Self { low, high, bins }
    }

    /// Bin width, scaling each end first when `high - low` overflows
    pub fn width(&self) -> f64 {
        let bins = self.bins as f64;
        let span = self.high - self.low;
        if span.is_finite() {
            span / bins
        } else {
            self.high / bins - self.low / bins
        }
    }

    /// Test whether `value` lies in the closed range `[low, high]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Bin edges and membership along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBins {
    axis: Axis,
    range: BinRange,
    width: f64,
}

impl AxisBins {
    /// Validate `range` and derive the bin width
    pub fn new(axis: Axis, range: BinRange) -> Result<Self> {
        if range.bins == 0 {
            return Err(Error::InvalidRange(format!("axis {axis}: bin count must be positive")));
        }
        if !range.low.is_finite() || !range.high.is_finite() {
            return Err(Error::InvalidRange(format!(
                "axis {axis}: range [{}, {}] is not finite",
                range.low, range.high
            )));
        }
        let width = range.width();
        if !width.is_finite() {
            return Err(Error::InvalidRange(format!(
                "axis {axis}: range [{}, {}] with {} bins has a bin width too large to represent",
                range.low, range.high, range.bins
            )));
        }
        if width <= 0.0 {
            return Err(Error::invalid_width(axis.name(), range.low, range.high, range.bins));
        }
        Ok(Self { axis, range, width })
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn range(&self) -> &BinRange {
        &self.range
    }

    pub fn bins(&self) -> usize {
        self.range.bins
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn lower_edge(&self, index: usize) -> f64 {
        self.range.low + index as f64 * self.width
    }

    #[inline]
    pub fn upper_edge(&self, index: usize) -> f64 {
        if index + 1 >= self.range.bins {
            self.range.high
        } else {
            self.lower_edge(index + 1)
        }
    }

    pub fn edges(&self, index: usize) -> BinEdges {
        BinEdges::new(self.lower_edge(index), self.upper_edge(index))
    }

    /// Membership of `value` in bin `index` under its boundary policy
    #[inline]
    pub fn contains(&self, index: usize, value: f64) -> bool {
        BoundaryPolicy::for_index(index).contains(value, self.lower_edge(index), self.upper_edge(index))
    }

    /// Index of the unique bin holding `value`, `None` outside the range
    ///
    /// The arithmetic estimate can be off by one near an edge, so it is
    /// corrected against the stored edges before returning.
    pub fn locate(&self, value: f64) -> Option<usize> {
        if !self.range.contains(value) {
            return None;
        }
        let last = self.range.bins - 1;
        let offset = value - self.range.low;
        let scaled = if offset.is_finite() {
            offset / self.width
        } else {
            value / self.width - self.range.low / self.width
        };
        let estimate = scaled.ceil() - 1.0;
        let mut index = if estimate <= 0.0 {
            0
        } else {
            (estimate as usize).min(last)
        };

        while index > 0 && value <= self.lower_edge(index) {
            index -= 1;
        }
        while index < last && value > self.upper_edge(index) {
            index += 1;
        }

        debug_assert!(self.contains(index, value));
        Some(index)
    }
}

/// Cross product of per-axis bins
#[derive(Debug, Clone, PartialEq)]
pub struct BinLattice<const D: usize> {
    axes: [AxisBins; D],
    cells: usize,
}

impl<const D: usize> BinLattice<D> {
    /// Build the lattice, failing with `InvalidRange` on a degenerate axis
    /// or when the cell count cannot be addressed in memory
    pub fn build(ranges: &[BinRange; D]) -> Result<Self> {
        let axes = Axis::for_dimensions(D)
            .iter()
            .zip(ranges.iter())
            .map(|(&axis, &range)| AxisBins::new(axis, range))
            .collect::<Result<Vec<_>>>()?;
        let axes: [AxisBins; D] = axes.try_into().map_err(|_| {
            Error::InvalidRange(format!("lattice supports at most {} axes", Axis::MAX_DIMENSIONS))
        })?;
        let limit = isize::MAX as usize / std::mem::size_of::<BinCell<D>>().max(1);
        let cells = axes
            .iter()
            .try_fold(1usize, |cells, axis| cells.checked_mul(axis.bins()))
            .filter(|&cells| cells <= limit)
            .ok_or_else(|| {
                Error::InvalidRange(format!(
                    "lattice of {:?} bins has too many cells",
                    axes.map(|axis| axis.bins())
                ))
            })?;
        Ok(Self { axes, cells })
    }

    pub fn axes(&self) -> &[AxisBins; D] {
        &self.axes
    }

    pub fn axis(&self, axis: Axis) -> Option<&AxisBins> {
        self.axes.get(axis.index())
    }

    pub fn shape(&self) -> [usize; D] {
        self.axes.map(|axis| axis.bins())
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell indices in row-major order
    pub fn indices(&self) -> LatticeIndices<D> {
        LatticeIndices {
            shape: self.shape(),
            next: (D > 0 && self.len() > 0).then_some([0; D]),
        }
    }

    /// Position of a cell in row-major order
    pub fn flat_index(&self, index: &[usize; D]) -> usize {
        self.axes
            .iter()
            .zip(index.iter())
            .fold(0, |flat, (axis, &i)| flat * axis.bins() + i)
    }

    /// Membership of `point` in the cell at `index`
    pub fn contains(&self, index: &[usize; D], point: &[f64; D]) -> bool {
        self.axes
            .iter()
            .zip(index.iter().zip(point.iter()))
            .all(|(axis, (&i, &value))| axis.contains(i, value))
    }

    /// Index of the unique cell holding `point`, `None` outside the lattice
    pub fn locate(&self, point: &[f64; D]) -> Option<[usize; D]> {
        let mut index = [0; D];
        for ((slot, axis), &value) in index.iter_mut().zip(self.axes.iter()).zip(point.iter()) {
            *slot = axis.locate(value)?;
        }
        Some(index)
    }

    /// Edges of the cell at `index`
    pub fn cell(&self, index: [usize; D], count: usize) -> BinCell<D> {
        BinCell {
            edges: std::array::from_fn(|d| self.axes[d].edges(index[d])),
            index,
            count,
        }
    }

    /// Empty cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = BinCell<D>> + '_ {
        self.indices().map(move |index| self.cell(index, 0))
    }

    /// Attach `counts` (in row-major order) to the cells
    pub fn label(&self, counts: &[usize]) -> Vec<BinCell<D>> {
        self.indices()
            .zip(counts.iter())
            .map(|(index, &count)| self.cell(index, count))
            .collect()
    }
}

/// Odometer over lattice indices, last axis fastest
#[derive(Debug, Clone)]
pub struct LatticeIndices<const D: usize> {
    shape: [usize; D],
    next: Option<[usize; D]>,
}

impl<const D: usize> Iterator for LatticeIndices<D> {
    type Item = [usize; D];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut advanced = current;
        let mut carried = true;
        for d in (0..D).rev() {
            advanced[d] += 1;
            if advanced[d] < self.shape[d] {
                carried = false;
                break;
            }
            advanced[d] = 0;
        }
        self.next = if carried { None } else { Some(advanced) };
        Some(current)
    }
}
