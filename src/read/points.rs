use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{PlotError, Result};
use crate::format::Colour;
use crate::plot::Point;
use crate::read::open_file;

/// Reads `x,y[,colour]` records from a file or stdin.
///
/// A colour column is only honoured when the first record carries one; from
/// then on, records without a colour get the default one.
#[derive(Debug, Default)]
pub struct PointReader {}

impl PointReader {
    pub fn read(&self, path: &str) -> Result<Vec<Point>> {
        self.read_from(open_file(path)?, path)
    }

    fn read_from<R: Read>(&self, reader: R, path: &str) -> Result<Vec<Point>> {
        let mut csv = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let mut points = Vec::new();
        let mut coloured = None;
        for record in csv.records() {
            let record = record.map_err(|e| Self::csv_error(e, path))?;
            let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
            if record.len() < 2 {
                return Err(PlotError::Parse {
                    line,
                    text: Self::joined(&record),
                });
            }
            let x = Self::parse_float(&record[0], line)?;
            let y = Self::parse_float(&record[1], line)?;
            let coloured = *coloured.get_or_insert(record.len() > 2);
            if coloured {
                let colour = record.get(2).map(Colour::from_name).unwrap_or_default();
                points.push(Point::with_colour(x, y, colour));
            } else {
                points.push(Point::new(x, y));
            }
        }
        debug!("Read {} points from {}", points.len(), path);
        Ok(points)
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

    fn joined(record: &StringRecord) -> String {
        record.iter().collect::<Vec<&str>>().join(",")
    }

    fn csv_error(error: csv::Error, path: &str) -> PlotError {
        let line = error.position().map(|p| p.line() as usize).unwrap_or(0);
        let text = error.to_string();
        match error.into_kind() {
            csv::ErrorKind::Io(source) => PlotError::Io {
                path: path.to_owned(),
                source,
            },
            _ => PlotError::Parse { line, text },
        }
    }
}
