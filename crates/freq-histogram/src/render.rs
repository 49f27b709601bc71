//! Text rendering and delimited export of histogram results

use crate::types::{EdgeKind, Extent, HistogramResult};
use freq_core::{AxisStatistics, Error, Result};
use std::fmt::Write as _;

/// ASCII bar chart of a histogram result
///
/// Each cell is printed as `label (count) |*** (pct%)` where the label is the
/// selected edge. Bars are scaled so the tallest is at most `bar_width` stars
/// and percentages are relative to the number of in-range samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPrinter {
    edge: EdgeKind,
    output_stats: bool,
    bar_width: usize,
}

impl Default for TextPrinter {
    fn default() -> Self {
        Self {
            edge: EdgeKind::High,
            output_stats: false,
            bar_width: 40,
        }
    }
}

impl TextPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge used to label each cell
    pub fn edge(mut self, edge: EdgeKind) -> Self {
        self.edge = edge;
        self
    }

    /// Append the in-range statistics after the chart
    pub fn output_stats(mut self, output_stats: bool) -> Self {
        self.output_stats = output_stats;
        self
    }

    pub fn bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub fn render<const D: usize>(&self, result: &HistogramResult<D>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_report(&mut out, result);
        out
    }

    fn write_report<const D: usize>(
        &self,
        out: &mut String,
        result: &HistogramResult<D>,
    ) -> std::fmt::Result {
        let ranges = result.ranges();
        writeln!(out, "{}", result.kind())?;
        writeln!(out, "\tNumber of bins: {}", join(ranges.iter().map(|r| r.bins.to_string())))?;
        writeln!(
            out,
            "\tPlot range: {}",
            join(ranges.iter().map(|r| format!("[{}, {}]", r.low, r.high)))
        )?;
        match result.histogram_data_extent() {
            Some(extent) => writeln!(out, "\tData range: {}", extents(extent))?,
            None => writeln!(out, "\tData range: (no data in range)")?,
        }
        writeln!(out, "\tOriginal data range: {}", extents(result.data_extent()))?;
        writeln!(out, "BIN (FREQUENCY) ASCII_BAR (%)")?;

        let max_count = result.max_count();
        let total = result.histogram_data_count();
        for cell in result.cells() {
            let label = join(cell.edge(self.edge).iter().map(|v| format!("{v:<4.3}")));
            writeln!(
                out,
                "{label} ({:<4}) |{}",
                cell.count,
                self.bar(cell.count, max_count, total)
            )?;
        }

        if self.output_stats {
            writeln!(out, "\n --- Histogram Statistics ---")?;
            write_stats(out, result.histogram_data_stats())?;
        }
        Ok(())
    }

    fn bar(&self, count: usize, max_count: usize, total: usize) -> String {
        let scale = if max_count > self.bar_width {
            self.bar_width as f64 / max_count as f64
        } else {
            1.0
        };
        let stars = (count as f64 * scale).round() as usize;
        let percent = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        format!("{} ({percent:.1}%)", "*".repeat(stars))
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}

fn extents(extent: &[Extent]) -> String {
    join(extent.iter().map(|e| format!("[{}, {}]", e.min, e.max)))
}

fn write_stats(out: &mut String, stats: &AxisStatistics) -> std::fmt::Result {
    for (axis, values) in stats {
        writeln!(out, "{axis}:")?;
        for (name, value) in values {
            writeln!(out, "\t{name}: {value}")?;
        }
    }
    Ok(())
}

/// Delimited table of a histogram result
///
/// One header row `x_bin[,y_bin[,z_bin]],frequency` followed by one row per
/// cell with the selected edge coordinates and its count.
pub fn to_separated<const D: usize>(
    result: &HistogramResult<D>,
    edge: EdgeKind,
    delimiter: u8,
) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    let mut header: Vec<String> = freq_core::Axis::for_dimensions(D)
        .iter()
        .map(|axis| format!("{axis}_bin"))
        .collect();
    header.push("frequency".to_string());
    writer.write_record(&header).map_err(export_error)?;

    for cell in result.cells() {
        let mut row: Vec<String> = cell.edge(edge).iter().map(f64::to_string).collect();
        row.push(cell.count.to_string());
        writer.write_record(&row).map_err(export_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

fn export_error(error: csv::Error) -> Error {
    Error::Export(error.to_string())
}
