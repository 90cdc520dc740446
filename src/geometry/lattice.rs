//! Index-based sampling of a coordinate axis.
//!
//! Coordinates are computed as `start + i·step` from an integer index instead
//! of accumulating `x += step`, so thousands of steps do not drift. Bound
//! checks allow a small tolerance, expressed as a fraction of the step.

/// Bound tolerance as a fraction of the step
pub const LATTICE_TOLERANCE: f64 = 1e-6;

/// Finite, restartable sequence of evenly spaced coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    start: f64,
    step: f64,
    count: usize,
}

impl AxisRange {
    /// Samples `start, start + step, ...` up to and including `end`.
    ///
    /// `None` when the sample count is not representable.
    pub fn inclusive(start: f64, end: f64, step: f64) -> Option<Self> {
        let span = (end - start) / step;
        if span.is_nan() {
            return None;
        }
        let count = if span < -LATTICE_TOLERANCE {
            0
        } else {
            sample_count((span + LATTICE_TOLERANCE).floor())?.checked_add(1)?
        };
        Some(Self { start, step, count })
    }

    /// Samples `start, start + step, ...` strictly below `end`.
    ///
    /// `None` when the sample count is not representable.
    pub fn half_open(start: f64, end: f64, step: f64) -> Option<Self> {
        let span = (end - start) / step;
        if span.is_nan() {
            return None;
        }
        let count = if span <= LATTICE_TOLERANCE {
            0
        } else {
            sample_count((span - LATTICE_TOLERANCE).ceil())?
        };
        Some(Self { start, step, count })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Coordinate of sample `index`
    pub fn at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Lazily yields `(index, coordinate)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + Clone {
        let range = *self;
        (0..range.count).map(move |i| (i, range.at(i)))
    }
}

/// Converts a whole, non-negative float to a count without saturating
pub(crate) fn sample_count(value: f64) -> Option<usize> {
    // usize::MAX rounds up to 2^64 as f64, so the bound is exclusive
    if value.is_finite() && value >= 0.0 && value < usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}
