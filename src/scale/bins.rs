use std::ops::Range;

use crate::error::{PlotError, Result};
use crate::format::format_boundary;
use crate::scale::ticks::snap;
use crate::stats::Summary;

/// Upper limit for the number of bins a bin width may produce.
pub const MAX_BINS: usize = 10_000;

#[derive(Debug)]
/// A struct that represents a bin of an histogram.
///
/// A value belongs to the bin if it is bigger than `range.start` and not
/// bigger than `range.end` (first bin holds the values equal to the minimum).
struct Bucket {
    range: Range<f64>,
    count: usize,
}

impl Bucket {
    fn new(range: Range<f64>) -> Self {
        Self { range, count: 0 }
    }

    fn inc(&mut self) {
        self.count += 1;
    }
}

#[derive(Debug)]
/// The bins of an histogram along with their occupancy.
pub struct Bins {
    vec: Vec<Bucket>,
    max: f64,
    last: usize,
}

impl Bins {
    /// Creates the bins for a slice of numerical data, and loads the data.
    pub fn new(vec: &[f64], bin_count: Option<usize>, bin_width: Option<f64>) -> Result<Self> {
        let summary = Summary::new(vec)?;
        let mut bins = Self::new_with_summary(&summary, bin_count, bin_width)?;
        bins.load(vec);
        Ok(bins)
    }

    /// Creates empty bins able to hold the data described by `summary`.
    ///
    /// `bin_count` defaults to `max(10, log2(samples + 1))` and `bin_width`
    /// defaults to the value range divided by the bin count.  A zero
    /// `bin_width` is taken as `0.1`.
    pub fn new_with_summary(
        summary: &Summary,
        bin_count: Option<usize>,
        bin_width: Option<f64>,
    ) -> Result<Self> {
        let boundaries = Self::boundaries(summary, bin_count, bin_width)?;
        let mut vec = Vec::with_capacity(boundaries.len());
        let mut lower = summary.min;
        for upper in boundaries {
            vec.push(Bucket::new(lower..upper));
            lower = upper;
        }
        Ok(Self {
            last: vec.len() - 1,
            vec,
            max: summary.max,
        })
    }

    fn boundaries(
        summary: &Summary,
        bin_count: Option<usize>,
        bin_width: Option<f64>,
    ) -> Result<Vec<f64>> {
        if summary.is_degenerate() {
            debug!("All samples equal {}: using a single bin", summary.min);
            return Ok(vec![summary.min]);
        }
        let intervals = match bin_count {
            Some(h) if h > 0 => h as f64,
            _ => 10_f64.max(((summary.samples + 1) as f64).log2()),
        };
        let width = match bin_width {
            Some(w) if w == 0.0 => 0.1,
            Some(w) => w,
            None => (summary.max - summary.min) / intervals,
        };
        if !(width > 0.0 && width.is_finite()) {
            return Err(PlotError::InvalidOption(format!(
                "bin width must be a positive number, got {}",
                width
            )));
        }
        if (summary.max - summary.min) / width >= MAX_BINS as f64 {
            return Err(PlotError::InvalidOption(format!(
                "bin width {} produces more than {} bins",
                width, MAX_BINS
            )));
        }
        let mut vec = Vec::new();
        for i in 0..=MAX_BINS {
            let boundary = snap(summary.min + i as f64 * width, width);
            if boundary > summary.max {
                break;
            }
            vec.push(boundary);
        }
        debug!("Using {} bins of width {}", vec.len(), width);
        Ok(vec)
    }

    /// Add to the bins the values of a slice of numerical data.
    pub fn load(&mut self, vec: &[f64]) {
        for x in vec {
            self.add(*x);
        }
    }

    /// Add to the bins a single piece of numerical data.
    pub fn add(&mut self, n: f64) {
        let slot = self.find_slot(n);
        self.vec[slot].inc();
    }

    // Values past the last boundary (float drift on the maximum) go to the
    // last bin.
    fn find_slot(&self, n: f64) -> usize {
        self.vec
            .iter()
            .position(|bucket| n <= bucket.range.end)
            .unwrap_or(self.last)
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Occupancy of every bin, in bin order.
    pub fn counts(&self) -> Vec<usize> {
        self.vec.iter().map(|b| b.count).collect()
    }

    /// Total number of values loaded.
    pub fn total(&self) -> usize {
        self.vec.iter().map(|b| b.count).sum()
    }

    /// Upper boundary of every bin, in bin order.
    pub fn boundaries_iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.vec.iter().map(|b| b.range.end)
    }

    /// Effective upper bound of bin `i`: the last bin always reaches the
    /// maximum of the data.
    pub fn upper_bound(&self, i: usize) -> f64 {
        let end = self.vec[i].range.end;
        if i == self.last {
            end.max(self.max)
        } else {
            end
        }
    }

    /// Labels for the bins: their upper boundaries, as integers when they are
    /// whole numbers.
    pub fn labels(&self) -> Vec<String> {
        self.boundaries_iter().map(format_boundary).collect()
    }
}
