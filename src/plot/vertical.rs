use std::fmt;

use crate::error::Result;
use crate::format::abbreviate;
use crate::plot::histogram::{Histogram, HistogramOptions};
use crate::stats::Summary;

/// A struct holding data to plot a vertical histogram: one column per bin,
/// one line per occupancy threshold.
#[derive(Debug)]
pub struct VerticalHistogram {
    hist: Histogram,
}

impl VerticalHistogram {
    /// Creates a VerticalHistogram from a slice of numerical data.
    ///
    /// `options.size` is the height of the plot in lines.
    pub fn new(vec: &[f64], options: HistogramOptions) -> Result<Self> {
        Ok(Self {
            hist: Histogram::new(vec, options)?,
        })
    }

    pub fn summary(&self) -> &Summary {
        &self.hist.summary
    }

    /// Occupancy of every bin, in bin order.
    pub fn counts(&self) -> &[usize] {
        &self.hist.counts
    }

    fn write_labels(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        let labels = abbreviate(&self.hist.bins.labels());
        let len = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        // Only even bins are labelled; every label char takes two columns,
        // so it lands right under its bar.
        for i in 0..len {
            let mut line = String::new();
            for label in labels.iter().step_by(2) {
                line.push(label.chars().nth(i).unwrap_or(' '));
                line.push(' ');
            }
            writeln!(f, "{:indent$}{}", "", line.trim_end(), indent = indent)?;
        }
        Ok(())
    }
}

impl fmt::Display for VerticalHistogram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hist = &self.hist;
        let options = &hist.options;
        let label_width = hist.count_width();
        let gutter = label_width + 2;
        let bins = hist.counts.len();
        let bar = hist.bar();

        hist.write_title(f, bins * 2, gutter)?;
        if let Some(y_title) = &options.y_title {
            writeln!(f, "{}", y_title)?;
        }
        let mut previous = None;
        for threshold in hist.thresholds.iter().rev() {
            let level = *threshold as usize;
            let label = if previous == Some(level) {
                String::new()
            } else {
                previous = Some(level);
                level.to_string()
            };
            let row: String = hist
                .counts
                .iter()
                .map(|count| if level <= *count { bar.as_str() } else { " " })
                .collect();
            writeln!(f, "{:>width$}| {}", label, row, width = label_width)?;
        }
        writeln!(f, "{:width$}+{}", "", "-".repeat(bins + 1), width = label_width)?;
        if options.labels {
            self.write_labels(f, gutter)?;
        }
        if let Some(x_title) = &options.x_title {
            writeln!(f, "{:>width$}", x_title, width = gutter + bins)?;
        }
        hist.write_summary(f, bins * 2, gutter)
    }
}
