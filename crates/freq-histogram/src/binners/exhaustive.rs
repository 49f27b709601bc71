use super::Binner;
use crate::lattice::BinLattice;
use freq_core::Result;
use tracing::trace;

/// Tests every unclaimed sample against every cell
///
/// A claimed set guarantees a sample is counted at most once even if two
/// cells would both accept it. Works for unsorted data of any dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveBinner;

impl<const D: usize> Binner<D> for ExhaustiveBinner {
    fn assign(&self, samples: &[[f64; D]], lattice: &BinLattice<D>) -> Result<Vec<usize>> {
        let mut claimed = vec![false; samples.len()];
        let mut remaining = samples.len();
        let mut counts = Vec::with_capacity(lattice.len());

        for index in lattice.indices() {
            let mut count = 0;
            if remaining > 0 {
                for (sample, taken) in samples.iter().zip(claimed.iter_mut()) {
                    if !*taken && lattice.contains(&index, sample) {
                        *taken = true;
                        count += 1;
                    }
                }
                remaining -= count;
            }
            counts.push(count);
        }

        trace!(
            "Exhaustive pass left {} of {} samples unclaimed",
            remaining,
            samples.len()
        );
        Ok(counts)
    }

    fn name(&self) -> &'static str {
        "exhaustive"
    }
}
