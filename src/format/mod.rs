pub use self::colour::Colour;
pub use self::text::{abbreviate, box_text, Alignment};

mod colour;
mod text;

#[derive(Debug)]
pub struct F64Formatter {
    /// Decimals digits to be used
    decimals: usize,
}

impl F64Formatter {
    /// Initializes a new `F64Formatter` printing that many decimals.
    pub fn new(decimals: usize) -> F64Formatter {
        F64Formatter { decimals }
    }

    pub fn format(&self, number: f64) -> String {
        format!("{:.*}", self.decimals, number)
    }
}

/// Formats a bin boundary as an integer when it is a whole number, and with
/// the shortest exact representation otherwise.
pub fn format_boundary(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        format!("{}", number as i64)
    } else {
        format!("{}", number)
    }
}
