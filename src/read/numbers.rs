use std::io::{self, BufRead};

use crate::error::{PlotError, Result};
use crate::read::open_file;

/// Reads one number per line from a file or stdin.
#[derive(Debug, Default)]
pub struct DataReader {}

impl DataReader {
    /// Reads every sample of `path` ("-" for stdin).
    ///
    /// Blank lines are skipped.  Any other line that is not a finite number
    /// fails the whole read.
    pub fn read(&self, path: &str) -> Result<Vec<f64>> {
        self.read_from(open_file(path)?, path)
    }

    fn read_from<R: BufRead>(&self, reader: R, path: &str) -> Result<Vec<f64>> {
        let mut vec: Vec<f64> = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| match source.kind() {
                io::ErrorKind::InvalidData => PlotError::Parse {
                    line: index + 1,
                    text: String::from("<invalid UTF-8>"),
                },
                _ => PlotError::Io {
                    path: path.to_owned(),
                    source,
                },
            })?;
            let text = line.trim();
            if text.is_empty() {
                debug!("Skipping blank line {} of {}", index + 1, path);
                continue;
            }
            vec.push(Self::parse_float(text, index + 1)?);
        }
        Ok(vec)
    }

    fn parse_float(text: &str, line: usize) -> Result<f64> {
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(PlotError::Parse {
                line,
                text: text.to_owned(),
            }),
        }
    }
}
