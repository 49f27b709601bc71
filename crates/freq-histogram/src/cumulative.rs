//! Running totals over per-cell counts

/// Replace each count with the sum of itself and every earlier count
///
/// Counts are in lattice order, so for two and three dimensions the running
/// total follows the row-major cell order rather than sample order.
pub fn accumulate(counts: &mut [usize]) {
    let mut running = 0;
    for count in counts.iter_mut() {
        running += *count;
        *count = running;
    }
}

/// Cumulative copy of `counts`
pub fn cumulative(counts: &[usize]) -> Vec<usize> {
    let mut totals = counts.to_vec();
    accumulate(&mut totals);
    totals
}
