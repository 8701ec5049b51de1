pub use self::numbers::DataReader;
pub use self::points::PointReader;

mod numbers;
mod points;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::error::{PlotError, Result};

/// Return io::BufRead from a path, falling back to using stdin if path is "-".
fn open_file(path: &str) -> Result<Box<dyn BufRead>> {
    match path {
        "-" => Ok(Box::new(BufReader::new(io::stdin()))),
        _ => match File::open(path) {
            Ok(fd) => Ok(Box::new(BufReader::new(fd))),
            Err(source) => Err(PlotError::Io {
                path: path.to_owned(),
                source,
            }),
        },
    }
}
