pub use self::histogram::{HistogramOptions, HistogramOptionsBuilder};
pub use self::horizontal::HorizontalHistogram;
pub use self::scatter::{Point, ScatterOptions, ScatterOptionsBuilder, Scatterplot};
pub use self::vertical::VerticalHistogram;

mod histogram;
mod horizontal;
mod scatter;
mod vertical;
