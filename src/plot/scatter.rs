use std::collections::HashSet;
use std::fmt;

use crate::error::{PlotError, Result};
use crate::format::{box_text, Alignment, Colour};
use crate::scale::{Scale, DEFAULT_STEPS};

/// A point of a scatterplot, with an optional colour of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub colour: Option<Colour>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, colour: None }
    }

    pub fn with_colour(x: f64, y: f64, colour: Colour) -> Self {
        Self {
            x,
            y,
            colour: Some(colour),
        }
    }

    /// Pairs two separate series of x and y values.
    pub fn zip(xs: &[f64], ys: &[f64]) -> Result<Vec<Point>> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        Ok(xs.iter().zip(ys).map(|(x, y)| Point::new(*x, *y)).collect())
    }

    // Points with the same coordinates share identity (-0.0 is taken as 0.0).
    fn key(&self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

/// A struct holding the options to build a scatterplot.
#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct ScatterOptions {
    /// Number of steps of each axis: the grid has `size + 1` rows and
    /// columns (plus one if the zero line had to be added).
    pub size: usize,
    pub point_char: char,
    /// Colour for points without a colour of their own, and for the axes.
    pub colour: Colour,
    #[builder(setter(into, strip_option))]
    pub title: Option<String>,
    #[builder(setter(into, strip_option))]
    pub x_title: Option<String>,
    #[builder(setter(into, strip_option))]
    pub y_title: Option<String>,
    /// Alignment of the title inside its box.
    pub alignment: Alignment,
    /// Draw the zero lines of the axes crossed by the data.
    pub axes: bool,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_STEPS,
            point_char: 'x',
            colour: Colour::Default,
            title: None,
            x_title: None,
            y_title: None,
            alignment: Alignment::Center,
            axes: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Blank,
    Point(Colour),
    Origin,
    HorizontalAxis,
    VerticalAxis,
}

#[derive(Debug)]
/// A struct holding data to plot a scatterplot of (x, y) points.
///
/// Rows are the ticks of the y scale (biggest on top) and columns the ticks
/// of the x scale.  A point is drawn at the first cell (scanning rows top to
/// bottom and columns left to right) with `x >= point.x` and
/// `y <= point.y`; points with identical coordinates are drawn once.
pub struct Scatterplot {
    x_scale: Scale,
    y_scale: Scale,
    grid: Vec<Vec<Cell>>,
    options: ScatterOptions,
}

impl Scatterplot {
    /// Creates a Scatterplot from a slice of points.
    pub fn new(points: &[Point], options: ScatterOptions) -> Result<Self> {
        if points.is_empty() {
            return Err(PlotError::EmptyInput);
        }
        for (index, point) in points.iter().enumerate() {
            for value in [point.x, point.y] {
                if !value.is_finite() {
                    return Err(PlotError::InvalidSample { index, value });
                }
            }
        }
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let x_scale = Scale::ascending(&xs, options.size)?;
        let y_scale = Scale::descending(&ys, options.size)?;
        let grid = Self::build_grid(points, &x_scale, &y_scale, &options);
        Ok(Self {
            x_scale,
            y_scale,
            grid,
            options,
        })
    }

    fn build_grid(
        points: &[Point],
        x_scale: &Scale,
        y_scale: &Scale,
        options: &ScatterOptions,
    ) -> Vec<Vec<Cell>> {
        let both_cross = x_scale.crosses_zero() && y_scale.crosses_zero();
        let mut plotted = HashSet::new();
        let mut grid = Vec::with_capacity(y_scale.len());
        for &y in y_scale.ticks() {
            let mut row = Vec::with_capacity(x_scale.len());
            for &x in x_scale.ticks() {
                let mut cell = Cell::Blank;
                for point in points {
                    if point.x <= x && point.y >= y && plotted.insert(point.key()) {
                        // First point claiming the cell sets its colour.
                        if cell == Cell::Blank {
                            cell = Cell::Point(point.colour.unwrap_or(options.colour));
                        }
                    }
                }
                if cell == Cell::Blank && options.axes {
                    if x == 0.0 && y == 0.0 && both_cross {
                        cell = Cell::Origin;
                    } else if y == 0.0 && y_scale.crosses_zero() {
                        cell = Cell::HorizontalAxis;
                    } else if x == 0.0 && x_scale.crosses_zero() {
                        cell = Cell::VerticalAxis;
                    }
                }
                row.push(cell);
            }
            grid.push(row);
        }
        grid
    }

    /// Number of (rows, columns) of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.y_scale.len(), self.x_scale.len())
    }

    fn glyph(&self, cell: Cell) -> String {
        let mut buf = [0; 4];
        let axes = self.options.colour;
        match cell {
            Cell::Blank => String::from(" "),
            Cell::Point(colour) => colour.paint(self.options.point_char.encode_utf8(&mut buf)),
            Cell::Origin => axes.paint("0"),
            Cell::HorizontalAxis => axes.paint("-"),
            Cell::VerticalAxis => axes.paint("|"),
        }
    }
}

impl fmt::Display for Scatterplot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let columns = self.x_scale.len();
        if let Some(title) = &self.options.title {
            writeln!(
                f,
                "{}",
                box_text(&[title.as_str()], 2 * (columns + 1), 2, self.options.alignment, 0)
            )?;
        }
        if let Some(y_title) = &self.options.y_title {
            writeln!(f, "y: {}", y_title)?;
        }
        let border = format!("+{}+", "-".repeat(2 * columns + 2));
        writeln!(f, "{}", border)?;
        for row in &self.grid {
            write!(f, "| ")?;
            for cell in row {
                write!(f, "{} ", self.glyph(*cell))?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "{}", border)?;
        if let Some(x_title) = &self.options.x_title {
            writeln!(
                f,
                "{:>width$}",
                format!("x: {}", x_title),
                width = 2 * (columns + 2)
            )?;
        }
        Ok(())
    }
}
