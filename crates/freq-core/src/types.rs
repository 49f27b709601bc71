//! Shared vocabulary types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named coordinate of a sample
///
/// A `D`-dimensional histogram uses the first `D` axes, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All supported axes, in dimension order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Maximum supported dimensionality
    pub const MAX_DIMENSIONS: usize = 3;

    /// The axes used by a histogram with `dimensions` coordinates
    pub fn for_dimensions(dimensions: usize) -> &'static [Axis] {
        &Self::ALL[..dimensions.min(Self::MAX_DIMENSIONS)]
    }

    /// Position of this axis inside a sample
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase coordinate name
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Parse a coordinate name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How much a statistics provider should compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsMode {
    /// Location and dispersion summary
    #[default]
    Basic,
    /// Basic plus shape, quartiles and alternative means
    Full,
}

/// Mapping of statistic name to value
pub type Statistics = BTreeMap<String, f64>;

/// Statistics per axis
pub type AxisStatistics = BTreeMap<Axis, Statistics>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_dimensions() {
        assert_eq!(Axis::for_dimensions(1), &[Axis::X]);
        assert_eq!(Axis::for_dimensions(2), &[Axis::X, Axis::Y]);
        assert_eq!(Axis::for_dimensions(3), &Axis::ALL);
        assert_eq!(Axis::for_dimensions(7).len(), 3);
    }

    #[test]
    fn test_axis_names_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_name(axis.name()), Some(axis));
            assert_eq!(Axis::ALL[axis.index()], axis);
        }
        assert_eq!(Axis::from_name("w"), None);
        assert_eq!(serde_json::to_string(&Axis::Y).unwrap(), "\"y\"");
    }

    #[test]
    fn test_stats_mode_default() {
        assert_eq!(StatsMode::default(), StatsMode::Basic);
        let mode: StatsMode = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(mode, StatsMode::Full);
    }
}
