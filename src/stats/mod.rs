use std::fmt;

use crate::error::{PlotError, Result};
use crate::format::F64Formatter;

#[derive(Debug, Clone, PartialEq)]
/// A struct holding summary statistics of an unsorted set of numerical
/// values.
pub struct Summary {
    /// Number of samples of the input values.
    pub samples: usize,
    /// Minimum of the input values.
    pub min: f64,
    /// Maximum of the input values.
    pub max: f64,
    /// Average of the input values.
    pub mean: f64,
    /// Sample standard deviation (divisor `samples - 1`) of the input values.
    ///
    /// It is `None` when there is a single sample, as the sample standard
    /// deviation is not defined then.
    pub std: Option<f64>,
}

impl Summary {
    /// Creates a Summary from a slice of numerical data.
    ///
    /// Fails with `PlotError::EmptyInput` if the slice is empty.
    pub fn new(vec: &[f64]) -> Result<Self> {
        let first = *vec.first().ok_or(PlotError::EmptyInput)?;
        let mut max = first;
        let mut min = first;
        let mut sum = 0.0;
        for val in vec.iter() {
            max = max.max(*val);
            min = min.min(*val);
            sum += *val;
        }
        let mean = sum / vec.len() as f64;
        let std = if vec.len() > 1 {
            let temp: f64 = vec.iter().map(|val| (mean - *val).powi(2)).sum();
            Some((temp / (vec.len() - 1) as f64).sqrt())
        } else {
            None
        };
        Ok(Self {
            samples: vec.len(),
            min,
            max,
            mean,
            std,
        })
    }

    /// Returns true when every sample has the same value.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatter = F64Formatter::new(6);
        writeln!(f, "Summary")?;
        writeln!(f, "observations: {}", self.samples)?;
        writeln!(f, "min value: {}", formatter.format(self.min))?;
        writeln!(f, "mean : {}", formatter.format(self.mean))?;
        match self.std {
            Some(std) => writeln!(f, "std dev : {}", formatter.format(std))?,
            None => writeln!(f, "std dev : n/a")?,
        }
        writeln!(f, "max value: {}", formatter.format(self.max))
    }
}
