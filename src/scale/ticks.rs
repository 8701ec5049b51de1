use crate::error::{PlotError, Result};
use crate::scale::round10;

/// Default number of steps of a scatterplot axis.
pub const DEFAULT_STEPS: usize = 20;

/// Biggest number of steps of a scale, or of thresholds of a count axis.
pub const MAX_STEPS: usize = 1_000;

fn check_steps(steps: usize) -> Result<()> {
    if steps > MAX_STEPS {
        return Err(PlotError::InvalidOption(format!(
            "size {} is bigger than the maximum of {}",
            steps, MAX_STEPS
        )));
    }
    Ok(())
}

/// Rounds `value` to 10 decimals unless `step` is too small for that to keep
/// consecutive values apart.
pub(crate) fn snap(value: f64, step: f64) -> f64 {
    if step.abs() >= 1e-8 {
        round10(value)
    } else {
        value
    }
}

#[derive(Debug, Clone)]
/// The ticks of a scatterplot axis, one per row or column of the grid.
pub struct Scale {
    ticks: Vec<f64>,
    crosses_zero: bool,
}

impl Scale {
    /// Builds an ascending scale (x axis): `steps + 1` evenly spaced ticks
    /// from the minimum to the maximum of `series`.
    ///
    /// If the series goes from negative to positive values and no tick lands
    /// on zero, a `0.0` tick is inserted where the sign changes.
    pub fn ascending(series: &[f64], steps: usize) -> Result<Self> {
        check_steps(steps)?;
        let (min, max) = bounds(series)?;
        let steps = steps.max(1);
        let mut ticks: Vec<f64> = Vec::with_capacity(steps + 2);
        if min == max {
            ticks.push(min);
        } else {
            let step = (max - min) / steps as f64;
            for i in 0..=steps {
                let tick = if i == steps {
                    max
                } else {
                    snap(min + i as f64 * step, step)
                };
                if let Some(&last) = ticks.last() {
                    if tick > 0.0 && last < 0.0 {
                        ticks.push(0.0);
                    }
                }
                ticks.push(tick);
            }
        }
        Ok(Self {
            ticks,
            crosses_zero: max > 0.0 && 0.0 > min,
        })
    }

    /// Builds a descending scale (y axis), so first row is the biggest value.
    pub fn descending(series: &[f64], steps: usize) -> Result<Self> {
        let mut scale = Self::ascending(series, steps)?;
        scale.ticks.reverse();
        Ok(scale)
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// True when the series has both negative and positive values.
    pub fn crosses_zero(&self) -> bool {
        self.crosses_zero
    }
}

fn bounds(series: &[f64]) -> Result<(f64, f64)> {
    let first = *series.first().ok_or(PlotError::EmptyInput)?;
    Ok(series
        .iter()
        .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))))
}

/// Occupancy thresholds of an histogram, in ascending order.
///
/// Thresholds go from the smallest non-zero bin count (or 1 if `regular`) up
/// to the biggest one.  `size` is the number of thresholds; if not given it
/// is the span of counts, capped at 20.  Fails if `size` is bigger than
/// `MAX_STEPS`.
pub fn count_thresholds(
    counts: &[usize],
    size: Option<usize>,
    regular: bool,
) -> Result<Vec<f64>> {
    if let Some(size) = size {
        check_steps(size)?;
    }
    let (bottom, top) = match (counts.iter().min(), counts.iter().max()) {
        (Some(bottom), Some(top)) => (*bottom, *top),
        _ => return Ok(Vec::new()),
    };
    let start = if regular { 1 } else { bottom.max(1) };
    let stop = (top + 1).max(start + 1);
    let size = match size {
        Some(size) if size > 0 => size,
        _ => (stop - start).min(20),
    };
    let step = (stop - start) as f64 / size as f64;
    Ok((0..size)
        .map(|i| snap(start as f64 + i as f64 * step, step))
        .collect())
}
