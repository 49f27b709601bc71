//! Assignment of samples to lattice cells
//!
//! Every binner produces the same per-cell counts for the same input; they
//! differ only in cost and in the shape of data they accept.
//!
//! | Binner | Dimensions | Cost |
//! |--------|------------|------|
//! | [`SweepBinner`] | 1 | O(n + bins), input sorted |
//! | [`ExhaustiveBinner`] | any | O(cells * n) |
//! | [`IndexedBinner`] | any | O(n * D) |

mod exhaustive;
mod indexed;
mod sweep;

pub use exhaustive::ExhaustiveBinner;
pub use indexed::IndexedBinner;
pub use sweep::SweepBinner;

use crate::lattice::BinLattice;
use freq_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts samples into the cells of a lattice
pub trait Binner<const D: usize> {
    /// Per-cell counts in row-major lattice order
    ///
    /// Samples outside the lattice are ignored. Every sample inside it is
    /// counted in exactly one cell.
    fn assign(&self, samples: &[[f64; D]], lattice: &BinLattice<D>) -> Result<Vec<usize>>;

    /// Binner name for diagnostics
    fn name(&self) -> &'static str;
}

/// Binning algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinningStrategy {
    /// Sweep for one dimension, indexed otherwise
    #[default]
    Auto,
    Sweep,
    Exhaustive,
    Indexed,
}

impl BinningStrategy {
    /// Concrete strategy for a histogram with `dimensions` coordinates
    pub fn resolve(self, dimensions: usize) -> Self {
        match self {
            Self::Auto if dimensions == 1 => Self::Sweep,
            Self::Auto => Self::Indexed,
            other => other,
        }
    }

    /// Run the resolved binner
    ///
    /// The sweep binner requires samples sorted by their single coordinate.
    pub fn assign<const D: usize>(
        self,
        samples: &[[f64; D]],
        lattice: &BinLattice<D>,
    ) -> Result<Vec<usize>> {
        match self.resolve(D) {
            Self::Sweep => SweepBinner.assign(samples, lattice),
            Self::Exhaustive => ExhaustiveBinner.assign(samples, lattice),
            Self::Auto | Self::Indexed => IndexedBinner.assign(samples, lattice),
        }
    }
}

impl fmt::Display for BinningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Sweep => "sweep",
            Self::Exhaustive => "exhaustive",
            Self::Indexed => "indexed",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::BinRange;

    #[test]
    fn test_auto_resolution() {
        assert_eq!(BinningStrategy::Auto.resolve(1), BinningStrategy::Sweep);
        assert_eq!(BinningStrategy::Auto.resolve(2), BinningStrategy::Indexed);
        assert_eq!(BinningStrategy::Auto.resolve(3), BinningStrategy::Indexed);
        assert_eq!(BinningStrategy::Exhaustive.resolve(1), BinningStrategy::Exhaustive);
    }

    #[test]
    fn test_strategies_agree_in_one_dimension() {
        let samples = [[0.0], [1.0], [2.0], [3.0], [4.0], [5.0]];
        let lattice = BinLattice::build(&[BinRange::new(0.0, 5.0, 5)]).unwrap();
        for strategy in [
            BinningStrategy::Auto,
            BinningStrategy::Sweep,
            BinningStrategy::Exhaustive,
            BinningStrategy::Indexed,
        ] {
            let counts = strategy.assign(&samples, &lattice).unwrap();
            assert_eq!(counts, vec![2, 1, 1, 1, 1], "strategy {strategy}");
        }
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&BinningStrategy::Exhaustive).unwrap();
        assert_eq!(json, "\"exhaustive\"");
        let parsed: BinningStrategy = serde_json::from_str("\"indexed\"").unwrap();
        assert_eq!(parsed, BinningStrategy::Indexed);
    }
}
