//! Interval membership with per-end inclusion
//!
//! Bins along an axis share their internal boundaries. The first bin is
//! closed on both ends, every later bin is open below and closed above, so a
//! boundary value belongs to the lower of the two bins that touch it and both
//! ends of the axis range are covered.

/// Test whether `value` lies between `low` and `high`
///
/// Each end is inclusive or exclusive independently. NaN is never in range.
#[inline]
pub fn in_range(value: f64, low: f64, high: f64, low_inclusive: bool, high_inclusive: bool) -> bool {
    let above_low = if low_inclusive { value >= low } else { value > low };
    let below_high = if high_inclusive { value <= high } else { value < high };
    above_low && below_high
}

/// Boundary rule applied to a bin, chosen by its position along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// First bin: `[low, high]`
    First,
    /// Every later bin: `(low, high]`
    Subsequent,
}

impl BoundaryPolicy {
    /// Policy for the bin at `index` along its axis
    #[inline]
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            Self::First
        } else {
            Self::Subsequent
        }
    }

    #[inline]
    pub fn low_inclusive(self) -> bool {
        matches!(self, Self::First)
    }

    #[inline]
    pub fn high_inclusive(self) -> bool {
        true
    }

    /// Test membership of `value` in the interval bounded by `low` and `high`
    #[inline]
    pub fn contains(self, value: f64, low: f64, high: f64) -> bool {
        in_range(value, low, high, self.low_inclusive(), self.high_inclusive())
    }
}
