//! Container and item inputs for flex composition.

use cadre_track::{SequenceTrackItem, StackTrackItem, TrackError, check_ratio};
use serde::{Deserialize, Serialize};

/// Main axis of a flex container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Row,
    Column,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }

    /// Order a horizontal/vertical pair as `(main, cross)`.
    pub fn split<T>(self, horizontal: T, vertical: T) -> (T, T) {
        match self {
            Self::Row => (horizontal, vertical),
            Self::Column => (vertical, horizontal),
        }
    }

    /// Inverse of [`Axis::split`]: order a `(main, cross)` pair as `(horizontal, vertical)`.
    pub fn join<T>(self, main: T, cross: T) -> (T, T) {
        self.split(main, cross)
    }
}

/// Line wrapping mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    pub const fn wraps(self) -> bool {
        !matches!(self, Self::NoWrap)
    }
}

/// Placement and spacing of leftover space along one axis.
///
/// `place` anchors what is not spread (0 start, 0.5 center, 1 end), `space` is
/// the share spread between items, and `space_outer` weighs the two outer edges
/// against each interior gap.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    pub place: f64,
    pub space: f64,
    pub space_outer: f64,
}

impl Distribution {
    pub const START: Self = Self::placed(0.0);
    pub const CENTER: Self = Self::placed(0.5);
    pub const END: Self = Self::placed(1.0);
    pub const SPACE_BETWEEN: Self = Self::spaced(0.0);
    pub const SPACE_AROUND: Self = Self::spaced(0.5);
    pub const SPACE_EVENLY: Self = Self::spaced(1.0);

    pub const fn placed(place: f64) -> Self {
        Self {
            place,
            space: 0.0,
            space_outer: 0.0,
        }
    }

    pub const fn spaced(space_outer: f64) -> Self {
        Self {
            place: 0.0,
            space: 1.0,
            space_outer,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TrackError> {
        check_ratio("place", self.place)?;
        check_ratio("space", self.space)?;
        check_ratio("space_outer", self.space_outer)?;
        Ok(())
    }
}

/// One flex item: its main-axis and cross-axis sizing.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct FlexItem {
    pub main: SequenceTrackItem,
    pub cross: StackTrackItem,
}

impl FlexItem {
    pub const fn new(main: SequenceTrackItem, cross: StackTrackItem) -> Self {
        Self { main, cross }
    }
}

/// Container inputs for [`layout`](crate::layout).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexOptions {
    pub direction: Axis,
    pub reverse: bool,
    pub wrap: FlexWrap,
    pub main_size: Option<f64>,
    pub cross_size: Option<f64>,
    /// Space between items on a line.
    pub gap: f64,
    /// Space between lines.
    pub line_gap: f64,
    pub justify: Distribution,
    pub align_content: Distribution,
    /// Share of leftover cross space lines grow into.
    pub line_stretch: f64,
    pub align_items: f64,
    pub stretch_items: f64,
}

impl Default for FlexOptions {
    fn default() -> Self {
        Self {
            direction: Axis::Row,
            reverse: false,
            wrap: FlexWrap::NoWrap,
            main_size: None,
            cross_size: None,
            gap: 0.0,
            line_gap: 0.0,
            justify: Distribution::START,
            align_content: Distribution::START,
            line_stretch: 0.0,
            align_items: 0.0,
            stretch_items: 1.0,
        }
    }
}

impl FlexOptions {
    /// # Errors
    /// Returns [`TrackError::RatioOutOfRange`] for the first ratio outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), TrackError> {
        self.justify.validate()?;
        self.align_content.validate()?;
        check_ratio("line_stretch", self.line_stretch)?;
        check_ratio("align_items", self.align_items)?;
        check_ratio("stretch_items", self.stretch_items)?;
        Ok(())
    }

    pub(crate) fn definite_main_size(&self) -> Option<f64> {
        self.main_size.filter(|size| size.is_finite())
    }

    pub(crate) fn definite_cross_size(&self) -> Option<f64> {
        self.cross_size.filter(|size| size.is_finite())
    }
}
