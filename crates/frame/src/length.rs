//! Typed lengths, aspect ratios and per-edge values.

use cadre_flex::Axis;
use cadre_track::AutoOr;
use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// A length along one axis.
///
/// `Percent` holds a fraction of the reference size: `Percent(0.5)` is half.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    #[default]
    Auto,
    Px(f64),
    Percent(f64),
}

impl Length {
    pub const ZERO: Self = Self::Px(0.0);

    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Resolve against `reference`; `None` when auto or when a percentage has
    /// nothing to resolve against.
    pub fn resolve(self, reference: Option<f64>) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Px(value) => Some(value),
            Self::Percent(fraction) => reference
                .filter(|size| size.is_finite())
                .map(|size| size * fraction),
        }
    }

    /// Resolve as an offset: auto stays auto, an unresolvable percentage is zero.
    pub fn resolve_offset(self, reference: Option<f64>) -> AutoOr<f64> {
        if self.is_auto() {
            AutoOr::Auto
        } else {
            AutoOr::Value(self.resolve(reference).unwrap_or(0.0))
        }
    }
}

/// Width over height.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// # Errors
    /// Returns [`FrameError::InvalidAspectRatio`] for a zero or non-finite
    /// denominator, or a ratio that is not positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, FrameError> {
        // A zero or infinite denominator gives a non-finite or zero ratio.
        let ratio = width / height;
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(FrameError::InvalidAspectRatio { width, height })
        }
    }

    /// # Errors
    /// Returns [`FrameError::InvalidAspectRatio`] unless `ratio` is positive and finite.
    pub fn from_ratio(ratio: f64) -> Result<Self, FrameError> {
        Self::new(ratio, 1.0)
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    pub fn height_for(self, width: f64) -> f64 {
        width / self.0
    }

    pub fn width_for(self, height: f64) -> f64 {
        height * self.0
    }
}

impl TryFrom<f64> for AspectRatio {
    type Error = FrameError;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        Self::from_ratio(ratio)
    }
}

impl From<AspectRatio> for f64 {
    fn from(ratio: AspectRatio) -> Self {
        ratio.0
    }
}

/// One value per box edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Edges<T> {
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Leading edge along `axis`: left for rows, top for columns.
    pub const fn start(&self, axis: Axis) -> T {
        match axis {
            Axis::Row => self.left,
            Axis::Column => self.top,
        }
    }

    /// Trailing edge along `axis`.
    pub const fn end(&self, axis: Axis) -> T {
        match axis {
            Axis::Row => self.right,
            Axis::Column => self.bottom,
        }
    }
}
