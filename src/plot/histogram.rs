use std::fmt;

use crate::error::{check_finite, Result};
use crate::format::{box_text, Alignment, Colour};
use crate::scale::{count_thresholds, Bins};
use crate::stats::Summary;

/// A struct holding the options to build an histogram (either vertical or
/// horizontal).
#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct HistogramOptions {
    /// Number of lines (vertical histogram) or columns (horizontal
    /// histogram) of the count axis.  If `None`, it is the span of bin
    /// counts, capped at 20.
    #[builder(setter(strip_option))]
    pub size: Option<usize>,
    /// Number of bins.  If `None`, `max(10, log2(samples + 1))` is used.
    #[builder(setter(strip_option))]
    pub bin_count: Option<usize>,
    /// Width of every bin.  Takes precedence over `bin_count`.
    #[builder(setter(strip_option))]
    pub bin_width: Option<f64>,
    /// Char used for drawing the bars.
    pub point_char: char,
    pub colour: Colour,
    #[builder(setter(into, strip_option))]
    pub title: Option<String>,
    /// Print labels along the secondary axis: bin boundaries under the bars of
    /// a vertical histogram, counts under the columns of a horizontal one.
    pub labels: bool,
    /// Print a box with summary statistics after the plot.
    pub summary: bool,
    /// Start the count axis at 1 instead of at the smallest bin count.
    pub regular: bool,
    #[builder(setter(into, strip_option))]
    pub x_title: Option<String>,
    #[builder(setter(into, strip_option))]
    pub y_title: Option<String>,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            size: None,
            bin_count: None,
            bin_width: None,
            point_char: 'o',
            colour: Colour::Default,
            title: None,
            labels: false,
            summary: false,
            regular: false,
            x_title: None,
            y_title: None,
        }
    }
}

/// Binned data shared by the vertical and horizontal histograms.
#[derive(Debug)]
pub(crate) struct Histogram {
    pub(crate) summary: Summary,
    pub(crate) bins: Bins,
    pub(crate) counts: Vec<usize>,
    /// Occupancy thresholds, ascending.
    pub(crate) thresholds: Vec<f64>,
    pub(crate) options: HistogramOptions,
}

impl Histogram {
    pub(crate) fn new(vec: &[f64], options: HistogramOptions) -> Result<Self> {
        check_finite(vec)?;
        let summary = Summary::new(vec)?;
        let mut bins = Bins::new_with_summary(&summary, options.bin_count, options.bin_width)?;
        bins.load(vec);
        let counts = bins.counts();
        let thresholds = count_thresholds(&counts, options.size, options.regular)?;
        Ok(Self {
            summary,
            bins,
            counts,
            thresholds,
            options,
        })
    }

    /// Width of the count labels: digits of the biggest count, plus one.
    pub(crate) fn count_width(&self) -> usize {
        let top = self.counts.iter().max().copied().unwrap_or(0);
        top.to_string().len() + 1
    }

    /// The bar char painted in the histogram colour.
    pub(crate) fn bar(&self) -> String {
        let mut buf = [0; 4];
        self.options
            .colour
            .paint(self.options.point_char.encode_utf8(&mut buf))
    }

    pub(crate) fn write_title(
        &self,
        f: &mut fmt::Formatter,
        width: usize,
        indent: usize,
    ) -> fmt::Result {
        if let Some(title) = &self.options.title {
            let width = width.max(title.chars().count() + 2);
            writeln!(
                f,
                "{}",
                box_text(&[title.as_str()], width, 1, Alignment::Center, indent)
            )?;
        }
        Ok(())
    }

    pub(crate) fn write_summary(
        &self,
        f: &mut fmt::Formatter,
        width: usize,
        indent: usize,
    ) -> fmt::Result {
        if self.options.summary {
            let text = self.summary.to_string();
            let lines: Vec<&str> = text.lines().collect();
            let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            let width = width.max(longest + 4);
            writeln!(
                f,
                "{}",
                box_text(&lines, width, 2, Alignment::Center, indent)
            )?;
        }
        Ok(())
    }
}
