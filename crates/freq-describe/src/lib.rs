//! Descriptive statistics for histogram datasets
//!
//! Provides [`Descriptive`], the default [`freq_core::StatisticsProvider`]
//! used by the histogram engine to report statistics over raw and
//! range-filtered data.
//!
//! # Example
//!
//! ```rust
//! use freq_core::{StatisticsProvider, StatsMode};
//! use freq_describe::Descriptive;
//!
//! let stats = Descriptive.compute(&[1.0, 2.0, 3.0, 4.0], StatsMode::Basic).unwrap();
//! assert_eq!(stats["mean"], 2.5);
//! assert_eq!(stats["range"], 3.0);
//! ```

pub mod descriptive;

pub use descriptive::{Descriptive, BASIC_STATISTICS, FULL_STATISTICS};
