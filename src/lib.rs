//! # Getting Started
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! termplots = "*"
//! ```
//!
//! ```rust,no_run
//! use termplots::plot;
//!
//! let vec = [-1.0, -1.1, 2.0, 2.0, 2.1, -0.9, 11.0, 11.2, 1.9, 1.99];
//! // Plot a vertical histogram of the above vector, with 4 bins and a
//! // summary box
//! let options = plot::HistogramOptions {
//!     bin_count: Some(4),
//!     summary: true,
//!     ..Default::default()
//! };
//! let histogram = plot::VerticalHistogram::new(&vec, options).unwrap();
//! print!("{}", histogram);
//!
//! // Scatterplot of a few points, drawing the axes crossed by the data
//! let points = plot::Point::zip(&[-1.0, 2.0, 3.0], &[4.0, -2.0, 1.0]).unwrap();
//! let options = plot::ScatterOptions { axes: true, ..Default::default() };
//! print!("{}", plot::Scatterplot::new(&points, options).unwrap());
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate derive_builder;

pub mod error;
pub mod format;
pub mod plot;
pub mod read;
pub mod scale;
pub mod stats;

pub use error::{PlotError, Result};
