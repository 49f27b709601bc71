//! Core types for frequency histograms
//!
//! This crate holds the pieces shared by every freq-stats crate:
//!
//! - [`Error`] and [`Result`], the error taxonomy reported by the engine
//! - [`Axis`], the named coordinates (`x`, `y`, `z`) of a sample
//! - [`StatsMode`] and [`Statistics`], the statistics vocabulary
//! - [`StatisticsProvider`], the seam through which descriptive statistics
//!   are computed

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::StatisticsProvider;
pub use types::{Axis, AxisStatistics, Statistics, StatsMode};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
