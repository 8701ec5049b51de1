use std::collections::HashSet;
use std::fmt;

use crate::error::Result;
use crate::format::abbreviate;
use crate::plot::histogram::{Histogram, HistogramOptions};
use crate::stats::Summary;

/// A struct holding data to plot a horizontal histogram: one line per bin,
/// one column per occupancy threshold.
///
/// Bin labels are printed in reverse order relative to the bars (last bin
/// label on the first line), mirroring the layout of the vertical histogram.
#[derive(Debug)]
pub struct HorizontalHistogram {
    hist: Histogram,
}

impl HorizontalHistogram {
    /// Creates a HorizontalHistogram from a slice of numerical data.
    ///
    /// `options.size` is the width of the bars area in columns.
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

    fn write_count_labels(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        let labels: Vec<String> = self
            .hist
            .thresholds
            .iter()
            .map(|t| (*t as usize).to_string())
            .collect();
        let len = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        for i in 0..len {
            let mut line = String::new();
            for label in labels.iter().skip(1).step_by(2) {
                line.push(label.chars().nth(i).unwrap_or(' '));
                line.push(' ');
            }
            writeln!(f, "{:indent$}{}", "", line.trim_end(), indent = indent)?;
        }
        Ok(())
    }
}

impl fmt::Display for HorizontalHistogram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hist = &self.hist;
        let options = &hist.options;
        let mut labels = abbreviate(&hist.bins.labels());
        labels.reverse();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let gutter = label_width + 2;
        let columns = hist.thresholds.len();
        let bar = hist.bar();

        hist.write_title(f, columns * 2, gutter)?;
        if let Some(y_title) = &options.y_title {
            writeln!(f, "{}", y_title)?;
        }
        let mut used = HashSet::new();
        for (label, count) in labels.iter().zip(hist.counts.iter()) {
            let label = if used.insert(label) { label.as_str() } else { "" };
            let row: String = hist
                .thresholds
                .iter()
                .map(|t| if *count >= *t as usize { bar.as_str() } else { " " })
                .collect();
            writeln!(f, "{:>width$}| {}", label, row, width = label_width)?;
        }
        writeln!(f, "{:width$}+{}", "", "-".repeat(columns + 1), width = label_width)?;
        if options.labels {
            // Odd columns only, two chars per label char.
            self.write_count_labels(f, gutter + 1)?;
        }
        if let Some(x_title) = &options.x_title {
            writeln!(f, "{:>width$}", x_title, width = gutter + columns)?;
        }
        hist.write_summary(f, columns * 2, gutter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_display() {
        let hist = HorizontalHistogram::new(
            &[1.0, 2.0, 2.0, 3.0, 3.0, 3.0],
            HistogramOptions {
                bin_count: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(hist.counts(), [1, 2, 3]);
        // Labels are reversed relative to the bars.
        assert_eq!(
            format!("{}", hist),
            "3| o  \n2| oo \n1| ooo\n +----\n"
        );
    }

    #[test]
    fn count_labels() {
        let vec: Vec<f64> = (0..12).map(|i| if i < 11 { 0.0 } else { 1.0 }).collect();
        let hist = HorizontalHistogram::new(
            &vec,
            HistogramOptions {
                bin_count: Some(1),
                labels: true,
                x_title: Some(String::from("count")),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(hist.counts(), [11, 1]);
        let display = format!("{}", hist);
        let lines: Vec<&str> = display.lines().collect();
        assert_eq!(lines[0], "1| ooooooooooo");
        assert_eq!(lines[1], "0| o          ");
        assert_eq!(lines[2], " +------------");
        // Columns 1, 3, 5, 7 and 9 hold thresholds 2, 4, 6, 8 and 10.
        assert_eq!(lines[3], "    2 4 6 8 1");
        assert_eq!(lines[4], "            0");
        assert_eq!(lines[5], "         count");
    }

    #[test]
    fn explicit_width() {
        let hist = HorizontalHistogram::new(
            &[1.0, 2.0, 2.0, 3.0, 3.0, 3.0],
            HistogramOptions {
                bin_count: Some(2),
                size: Some(6),
                point_char: '*',
                ..Default::default()
            },
        )
        .unwrap();
        let display = format!("{}", hist);
        let lines: Vec<&str> = display.lines().collect();
        assert_eq!(lines[0], "3| **    ");
        assert_eq!(lines[1], "2| ****  ");
        assert_eq!(lines[2], "1| ******");
        assert_eq!(lines[3], " +-------");
    }

    #[test]
    fn summary_box() {
        let hist = HorizontalHistogram::new(
            &[7.0],
            HistogramOptions {
                summary: true,
                ..Default::default()
            },
        )
        .unwrap();
        let display = format!("{}", hist);
        assert!(display.contains("|    observations: 1    |"));
        assert!(display.contains("std dev : n/a"));
        assert_eq!(display.lines().filter(|l| l.contains('|')).count(), 7);
    }
}
