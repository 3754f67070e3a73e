use core::fmt;
use core::slice::Iter;
use std::error::Error;

use crate::interval::Interval;
use crate::precision::round;

/// Errors raised while resolving a track.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackError {
    /// A track must hold at least one interval.
    EmptyTrack,
    /// A placement, spacing or stretch ratio outside `[0, 1]`.
    RatioOutOfRange { name: &'static str, value: f64 },
}

impl fmt::Display for TrackError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTrack => write!(formatter, "a track needs at least one item"),
            Self::RatioOutOfRange { name, value } => {
                write!(formatter, "{name} must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for TrackError {}

/// Validate a ratio that must lie in `[0, 1]`.
///
/// # Errors
/// Returns [`TrackError::RatioOutOfRange`] naming the offending input.
pub fn check_ratio(name: &'static str, value: f64) -> Result<f64, TrackError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(TrackError::RatioOutOfRange { name, value })
    }
}

/// Ordered, non-empty list of resolved intervals.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    intervals: Vec<Interval>,
    start: f64,
    end: f64,
}

impl Track {
    /// # Errors
    /// Returns [`TrackError::EmptyTrack`] when `intervals` is empty.
    pub fn new(intervals: Vec<Interval>) -> Result<Self, TrackError> {
        let Some(first) = intervals.first().copied() else {
            return Err(TrackError::EmptyTrack);
        };
        let (start, end) = intervals
            .iter()
            .fold((first.start(), first.end()), |(start, end), interval| {
                (start.min(interval.start()), end.max(interval.end()))
            });
        Ok(Self {
            intervals,
            start,
            end,
        })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn get(&self, index: usize) -> Option<Interval> {
        self.intervals.get(index).copied()
    }

    pub fn iter(&self) -> Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub const fn start(&self) -> f64 {
        self.start
    }

    pub const fn end(&self) -> f64 {
        self.end
    }

    pub fn size(&self) -> f64 {
        round(self.end - self.start)
    }

    /// The extent covered by every interval.
    pub fn extent(&self) -> Interval {
        Interval::new(self.start, self.end - self.start)
    }

    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }
}

impl<'track> IntoIterator for &'track Track {
    type Item = &'track Interval;
    type IntoIter = Iter<'track, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
