//! Collaborator traits consumed by the histogram engine

use crate::{Result, Statistics, StatsMode};

/// Computes descriptive statistics over a numeric sequence
///
/// The engine treats the returned mapping as opaque: it forwards the
/// requested [`StatsMode`] and stores whatever the provider reports.
///
/// Any closure `Fn(&[f64], StatsMode) -> Result<Statistics>` is a provider,
/// which keeps test doubles short.
///
/// # Example
///
/// ```rust
/// use freq_core::{Result, Statistics, StatisticsProvider, StatsMode};
///
/// let counter = |values: &[f64], _mode: StatsMode| -> Result<Statistics> {
///     let mut stats = Statistics::new();
///     stats.insert("count".to_string(), values.len() as f64);
///     Ok(stats)
/// };
///
/// let stats = counter.compute(&[1.0, 2.0, 3.0], StatsMode::Basic).unwrap();
/// assert_eq!(stats["count"], 3.0);
/// ```
pub trait StatisticsProvider {
    /// Compute statistics for `values`
    fn compute(&self, values: &[f64], mode: StatsMode) -> Result<Statistics>;

    /// Provider name for diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> StatisticsProvider for F
where
    F: Fn(&[f64], StatsMode) -> Result<Statistics>,
{
    fn compute(&self, values: &[f64], mode: StatsMode) -> Result<Statistics> {
        self(values, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_closure_provider_receives_mode() {
        let provider = |_: &[f64], mode: StatsMode| -> Result<Statistics> {
            let mut stats = Statistics::new();
            let flag = if mode == StatsMode::Full { 1.0 } else { 0.0 };
            stats.insert("full".to_string(), flag);
            Ok(stats)
        };

        assert_eq!(provider.compute(&[], StatsMode::Full).unwrap()["full"], 1.0);
        assert_eq!(provider.compute(&[], StatsMode::Basic).unwrap()["full"], 0.0);
    }

    #[test]
    fn test_failing_provider() {
        let provider = |_: &[f64], _: StatsMode| -> Result<Statistics> {
            Err(Error::Statistics("unavailable".to_string()))
        };
        assert!(matches!(
            provider.compute(&[1.0], StatsMode::Basic),
            Err(Error::Statistics(_))
        ));
    }
}
