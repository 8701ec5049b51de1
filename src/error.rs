use std::io;

use thiserror::Error;

/// Errors raised while reading samples or preparing a plot.
///
/// Any of these aborts the plot: nothing is rendered once one is returned.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("No data to process")]
    EmptyInput,

    #[error("Cannot parse a number at line {line}: '{text}'")]
    Parse { line: usize, text: String },

    #[error("Sample {index} is not a finite number ({value})")]
    InvalidSample { index: usize, value: f64 },

    #[error("Series lengths differ: {x} x-values and {y} y-values")]
    LengthMismatch { x: usize, y: usize },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PlotError>;

/// Checks that every in-memory sample is a finite number.
pub(crate) fn check_finite(vec: &[f64]) -> Result<()> {
    match vec.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PlotError::InvalidSample {
            index,
            value: vec[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_samples() {
        assert!(check_finite(&[1.0, -2.5, 0.0]).is_ok());
        assert!(check_finite(&[]).is_ok());
        match check_finite(&[1.0, f64::NAN, 3.0]) {
            Err(PlotError::InvalidSample { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn messages() {
        let error = PlotError::Parse {
            line: 3,
            text: String::from("foo"),
        };
        assert_eq!(error.to_string(), "Cannot parse a number at line 3: 'foo'");
        assert_eq!(PlotError::EmptyInput.to_string(), "No data to process");
    }
}
