//! Selection of samples inside the bin range

use crate::lattice::BinRange;

/// Accepts samples whose every coordinate lies in its closed axis range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter<const D: usize> {
    ranges: [BinRange; D],
}

impl<const D: usize> RangeFilter<D> {
    pub fn new(ranges: [BinRange; D]) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[BinRange; D] {
        &self.ranges
    }

    #[inline]
    pub fn accepts(&self, sample: &[f64; D]) -> bool {
        self.ranges
            .iter()
            .zip(sample.iter())
            .all(|(range, &value)| range.contains(value))
    }

    /// In-range samples, in their original order
    pub fn filter(&self, samples: &[[f64; D]]) -> Vec<[f64; D]> {
        samples.iter().filter(|s| self.accepts(s)).copied().collect()
    }

    pub fn count(&self, samples: &[[f64; D]]) -> usize {
        samples.iter().filter(|s| self.accepts(s)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_inclusive() {
        let filter = RangeFilter::new([BinRange::new(0.0, 1.0, 4), BinRange::new(-1.0, 1.0, 4)]);
        let samples = [[0.0, -1.0], [1.0, 1.0], [0.5, 1.5], [-0.1, 0.0], [0.5, 0.0]];
        let kept = filter.filter(&samples);
        assert_eq!(kept, vec![[0.0, -1.0], [1.0, 1.0], [0.5, 0.0]]);
        assert_eq!(filter.count(&samples), 3);
    }

    #[test]
    fn test_filter_rejects_nan() {
        let filter = RangeFilter::new([BinRange::new(0.0, 1.0, 2)]);
        assert!(!filter.accepts(&[f64::NAN]));
    }
}
