use core::fmt;

use serde::Serialize;

use crate::precision::round;

/// A rounded `(start, size)` span along one axis.
///
/// The size is never negative: a negative size moves `start` back by that
/// amount and keeps the magnitude.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize)]
pub struct Interval {
    start: f64,
    size: f64,
}

impl Interval {
    pub fn new(start: f64, size: f64) -> Self {
        let (start, size) = if size < 0.0 {
            (start + size, -size)
        } else {
            (start, size)
        };
        Self {
            start: round(start),
            size: round(size),
        }
    }

    pub const fn start(self) -> f64 {
        self.start
    }

    pub const fn size(self) -> f64 {
        self.size
    }

    pub fn end(self) -> f64 {
        round(self.start + self.size)
    }

    pub fn translate(self, offset: f64) -> Self {
        Self::new(self.start + offset, self.size)
    }

    /// Scale about the origin. A negative factor flips the interval.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.start * factor, self.size * factor)
    }

    pub fn resize(self, size: f64) -> Self {
        Self::new(self.start, size)
    }

    /// Reflect inside `[lower, upper]`, keeping the size.
    pub fn mirror_within(self, lower: f64, upper: f64) -> Self {
        Self::new(lower + upper - self.end(), self.size)
    }

    /// Smallest interval covering both.
    pub fn union(self, other: Self) -> Self {
        let start = self.start.min(other.start);
        Self::new(start, self.end().max(other.end()) - start)
    }

    /// Overlap of both, or `None` when they only touch or are apart.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end().min(other.end());
        (end > start).then(|| Self::new(start, end - start))
    }

    pub fn contains(self, point: f64) -> bool {
        point >= self.start && point <= self.end()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}, {}]", self.start, self.end())
    }
}
