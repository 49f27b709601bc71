//! Core types for histogram representation

use crate::lattice::BinRange;
use freq_core::{Axis, AxisStatistics, Result, StatsMode};
use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Counting mode of a histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HistogramKind {
    /// Independent count per cell
    #[default]
    #[serde(rename = "histogram")]
    Simple,
    /// Running total of counts in lattice emission order
    ///
    /// For one-dimensional histograms this is the usual cumulative
    /// frequency. For two and three dimensions the running total follows the
    /// row-major cell order (`x` outermost, `z` innermost), not the order in
    /// which samples were supplied.
    #[serde(rename = "cumulative frequency")]
    Cumulative,
}

impl fmt::Display for HistogramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("Histogram"),
            Self::Cumulative => f.write_str("Cumulative Frequency"),
        }
    }
}

/// Which edge of a bin identifies it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Low,
    Mid,
    High,
}

/// View of the bin table returned by [`HistogramResult::bins`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Projection {
    /// Full cell records
    #[default]
    All,
    /// Count keyed by low edge
    Low,
    /// Count keyed by bin centre
    Mid,
    /// Count keyed by high edge
    High,
}

impl Projection {
    /// Edge used as key, `None` for [`Projection::All`]
    pub fn edge(self) -> Option<EdgeKind> {
        match self {
            Self::All => None,
            Self::Low => Some(EdgeKind::Low),
            Self::Mid => Some(EdgeKind::Mid),
            Self::High => Some(EdgeKind::High),
        }
    }
}

impl From<EdgeKind> for Projection {
    fn from(edge: EdgeKind) -> Self {
        match edge {
            EdgeKind::Low => Self::Low,
            EdgeKind::Mid => Self::Mid,
            EdgeKind::High => Self::High,
        }
    }
}

/// Edges of a bin along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinEdges {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl BinEdges {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            mid: low / 2.0 + high / 2.0,
            high,
        }
    }

    pub fn get(&self, edge: EdgeKind) -> f64 {
        match edge {
            EdgeKind::Low => self.low,
            EdgeKind::Mid => self.mid,
            EdgeKind::High => self.high,
        }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Coordinates of a cell edge, usable as an ordered map key
pub type EdgeKey<const D: usize> = [OrderedFloat<f64>; D];

/// One interval (1D) or hyper-rectangle (2D/3D) with its count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinCell<const D: usize> {
    /// Edges per axis
    #[serde(serialize_with = "serialize_array")]
    pub edges: [BinEdges; D],
    /// Position of the cell along each axis
    #[serde(serialize_with = "serialize_array")]
    pub index: [usize; D],
    /// Simple or cumulative count, depending on the histogram kind
    pub count: usize,
}

impl<const D: usize> BinCell<D> {
    /// Coordinates of the chosen edge on every axis
    pub fn edge(&self, edge: EdgeKind) -> [f64; D] {
        std::array::from_fn(|d| self.edges[d].get(edge))
    }

    pub fn edge_key(&self, edge: EdgeKind) -> EdgeKey<D> {
        std::array::from_fn(|d| OrderedFloat(self.edges[d].get(edge)))
    }

    pub fn mid(&self) -> [f64; D] {
        self.edge(EdgeKind::Mid)
    }
}

impl<const D: usize> fmt::Display for BinCell<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (d, edges) in self.edges.iter().enumerate() {
            if d > 0 {
                f.write_str(" x ")?;
            }
            let open = if self.index[d] == 0 { '[' } else { '(' };
            write!(f, "{open}{:.3}, {:.3}]", edges.low, edges.high)?;
        }
        write!(f, ": count={}", self.count)
    }
}

/// Bin table in one of its projections
#[derive(Debug, Clone, PartialEq)]
pub enum BinTable<const D: usize> {
    /// Full cell records in lattice order
    Cells(Vec<BinCell<D>>),
    /// Count keyed by edge coordinates
    Edges {
        edge: EdgeKind,
        counts: BTreeMap<EdgeKey<D>, usize>,
    },
}

impl<const D: usize> BinTable<D> {
    pub fn len(&self) -> usize {
        match self {
            Self::Cells(cells) => cells.len(),
            Self::Edges { counts, .. } => counts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts in lattice order
    ///
    /// Edge-keyed maps iterate in ascending lexicographic key order, which
    /// for an equal-width lattice coincides with the row-major cell order.
    pub fn counts(&self) -> Vec<usize> {
        match self {
            Self::Cells(cells) => cells.iter().map(|cell| cell.count).collect(),
            Self::Edges { counts, .. } => counts.values().copied().collect(),
        }
    }

    /// Count of the cell whose selected edge sits at `coordinates`
    pub fn count_at(&self, coordinates: [f64; D]) -> Option<usize> {
        match self {
            Self::Cells(_) => None,
            Self::Edges { counts, .. } => counts.get(&coordinates.map(OrderedFloat)).copied(),
        }
    }
}

/// Minimum and maximum of one coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Extent of every coordinate of `samples`, `None` when empty
    pub fn of_samples<const D: usize>(samples: &[[f64; D]]) -> Option<[Extent; D]> {
        let (first, rest) = samples.split_first()?;
        let mut extent = first.map(|v| Extent::new(v, v));
        for sample in rest {
            for (ext, &value) in extent.iter_mut().zip(sample.iter()) {
                ext.min = ext.min.min(value);
                ext.max = ext.max.max(value);
            }
        }
        Some(extent)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Immutable snapshot produced by a histogram calculation
///
/// A new calculation produces a new snapshot; nothing in here is updated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramResult<const D: usize> {
    #[serde(rename = "type")]
    pub(crate) kind: HistogramKind,
    pub(crate) stats_mode: StatsMode,
    #[serde(serialize_with = "serialize_array")]
    pub(crate) ranges: [BinRange; D],
    pub(crate) bins: Vec<BinCell<D>>,
    pub(crate) data_count: usize,
    pub(crate) histogram_data_count: usize,
    #[serde(serialize_with = "serialize_array")]
    pub(crate) data_extent: [Extent; D],
    #[serde(serialize_with = "serialize_optional_array")]
    pub(crate) histogram_data_extent: Option<[Extent; D]>,
    pub(crate) data_stats: AxisStatistics,
    pub(crate) histogram_data_stats: AxisStatistics,
}

impl<const D: usize> HistogramResult<D> {
    pub fn kind(&self) -> HistogramKind {
        self.kind
    }

    pub fn stats_mode(&self) -> StatsMode {
        self.stats_mode
    }

    /// Resolved (configured or data-derived) range per axis
    pub fn ranges(&self) -> &[BinRange; D] {
        &self.ranges
    }

    pub fn range(&self, axis: Axis) -> Option<&BinRange> {
        self.ranges.get(axis.index())
    }

    /// Number of bins per axis
    pub fn bin_counts(&self) -> [usize; D] {
        self.ranges.map(|range| range.bins)
    }

    /// Cells in lattice order
    pub fn cells(&self) -> &[BinCell<D>] {
        &self.bins
    }

    /// Per-cell counts in lattice order
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|cell| cell.count).collect()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|cell| cell.count).max().unwrap_or(0)
    }

    /// Number of samples in the dataset
    pub fn data_count(&self) -> usize {
        self.data_count
    }

    /// Number of samples inside the bin range
    pub fn histogram_data_count(&self) -> usize {
        self.histogram_data_count
    }

    pub fn data_extent(&self) -> &[Extent; D] {
        &self.data_extent
    }

    /// Extent of the in-range samples, `None` when the range excluded all data
    pub fn histogram_data_extent(&self) -> Option<&[Extent; D]> {
        self.histogram_data_extent.as_ref()
    }

    pub fn data_stats(&self) -> &AxisStatistics {
        &self.data_stats
    }

    pub fn histogram_data_stats(&self) -> &AxisStatistics {
        &self.histogram_data_stats
    }

    /// Bin table in the requested projection
    pub fn bins(&self, projection: Projection) -> BinTable<D> {
        match projection.edge() {
            None => BinTable::Cells(self.bins.clone()),
            Some(edge) => BinTable::Edges {
                edge,
                counts: self.edge_counts(edge),
            },
        }
    }

    /// Count keyed by the chosen edge
    pub fn edge_counts(&self, edge: EdgeKind) -> BTreeMap<EdgeKey<D>, usize> {
        self.bins
            .iter()
            .map(|cell| (cell.edge_key(edge), cell.count))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<const D: usize> fmt::Display for HistogramResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({} cells, n={}, in range={})",
            self.kind,
            self.bins.len(),
            self.data_count,
            self.histogram_data_count
        )
    }
}

pub(crate) fn serialize_array<S, T, const N: usize>(
    values: &[T; N],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    values[..].serialize(serializer)
}

pub(crate) fn serialize_optional_array<S, T, const N: usize>(
    values: &Option<[T; N]>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match values {
        Some(values) => serializer.serialize_some(&values[..]),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_edges() {
        let edges = BinEdges::new(1.0, 3.0);
        assert_eq!(edges.mid, 2.0);
        assert_eq!(edges.width(), 2.0);
        assert_eq!(edges.get(EdgeKind::Low), 1.0);
        assert_eq!(edges.get(EdgeKind::High), 3.0);
    }

    #[test]
    fn test_cell_edge_projection() {
        let cell = BinCell {
            edges: [BinEdges::new(0.0, 1.0), BinEdges::new(2.0, 4.0)],
            index: [0, 1],
            count: 7,
        };
        assert_eq!(cell.edge(EdgeKind::Low), [0.0, 2.0]);
        assert_eq!(cell.mid(), [0.5, 3.0]);
        assert_eq!(cell.edge(EdgeKind::High), [1.0, 4.0]);
        assert_eq!(cell.to_string(), "[0.000, 1.000] x (2.000, 4.000]: count=7");
    }

    #[test]
    fn test_extent_of_samples() {
        let samples = [[1.0, 5.0], [-2.0, 7.0], [3.0, 6.0]];
        let extent = Extent::of_samples(&samples).unwrap();
        assert_eq!(extent[0], Extent::new(-2.0, 3.0));
        assert_eq!(extent[1], Extent::new(5.0, 7.0));
        assert_eq!(extent[1].span(), 2.0);
        assert!(Extent::of_samples::<2>(&[]).is_none());
    }

    #[test]
    fn test_projection_edges() {
        assert_eq!(Projection::All.edge(), None);
        assert_eq!(Projection::Mid.edge(), Some(EdgeKind::Mid));
        assert_eq!(Projection::from(EdgeKind::Low), Projection::Low);
        assert_eq!(Projection::default(), Projection::All);
    }

    #[test]
    fn test_kind_serializes_like_report_labels() {
        assert_eq!(serde_json::to_string(&HistogramKind::Simple).unwrap(), "\"histogram\"");
        assert_eq!(
            serde_json::to_string(&HistogramKind::Cumulative).unwrap(),
            "\"cumulative frequency\""
        );
        assert_eq!(HistogramKind::Cumulative.to_string(), "Cumulative Frequency");
    }

    #[test]
    fn test_edge_table_lookup() {
        let mut counts = BTreeMap::new();
        counts.insert([OrderedFloat(0.5)], 3);
        counts.insert([OrderedFloat(1.5)], 4);
        let table = BinTable::<1>::Edges {
            edge: EdgeKind::Mid,
            counts,
        };
        assert_eq!(table.len(), 2);
        assert_eq!(table.count_at([1.5]), Some(4));
        assert_eq!(table.count_at([2.5]), None);
        assert_eq!(table.counts(), vec![3, 4]);
    }
}
