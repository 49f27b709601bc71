use super::Binner;
use crate::lattice::BinLattice;
use freq_core::{Error, Result};
use tracing::trace;

/// Single pass over sorted one-dimensional samples
///
/// A cursor walks the samples while the bin index walks the axis. Values
/// below the range are skipped, then each bin takes the run of values its
/// boundary policy accepts, and the sweep stops at the first value above
/// the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepBinner;

impl<const D: usize> Binner<D> for SweepBinner {
    fn assign(&self, samples: &[[f64; D]], lattice: &BinLattice<D>) -> Result<Vec<usize>> {
        if D != 1 {
            return Err(Error::InvalidOptions(format!(
                "sweep binning supports one dimension, got {D}"
            )));
        }
        debug_assert!(
            samples.windows(2).all(|pair| pair[0][0] <= pair[1][0]),
            "sweep binning requires sorted samples"
        );

        let axis = &lattice.axes()[0];
        let mut counts = vec![0; axis.bins()];
        let low = axis.range().low;
        let mut cursor = samples.partition_point(|sample| sample[0] < low);

        for (bin, count) in counts.iter_mut().enumerate() {
            let start = cursor;
            while cursor < samples.len() && axis.contains(bin, samples[cursor][0]) {
                cursor += 1;
            }
            *count = cursor - start;
        }

        trace!(
            "Sweep consumed {} of {} samples",
            counts.iter().sum::<usize>(),
            samples.len()
        );
        Ok(counts)
    }

    fn name(&self) -> &'static str {
        "sweep"
    }
}
