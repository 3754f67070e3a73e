//! Per-frame sizing configuration and per-container flex configuration.

use cadre_flex::{Axis, Distribution, FlexWrap};
use cadre_track::{AutoOr, TrackError, check_ratio};
use serde::{Deserialize, Serialize};

use crate::length::{AspectRatio, Edges, Length};
use crate::property::Property;

/// Sizing inputs of one frame.
///
/// Every field is a [`Property`], so a write can tell whether anything
/// actually changed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Offset from the parent origin, used by absolute layout.
    pub x: Property<Length>,
    pub y: Property<Length>,
    pub width: Property<Length>,
    pub height: Property<Length>,
    pub min_width: Property<Length>,
    pub min_height: Property<Length>,
    pub max_width: Property<Length>,
    pub max_height: Property<Length>,
    pub aspect_ratio: Property<Option<AspectRatio>>,
    /// `Length::Auto` margins absorb free space.
    pub margin: Property<Edges<Length>>,
    pub grow: Property<f64>,
    pub shrink: Property<f64>,
    /// Cross-axis placement overriding the container's `align_items`.
    pub align_self: Property<AutoOr<f64>>,
    /// Cross-axis stretch overriding the container's `stretch_items`.
    pub stretch_self: Property<AutoOr<f64>>,
}

/// Fresh default configuration: auto sizes, zero margins, no flex factors.
pub fn default_config() -> FrameConfig {
    FrameConfig {
        x: Property::new(Length::ZERO),
        y: Property::new(Length::ZERO),
        width: Property::new(Length::Auto),
        height: Property::new(Length::Auto),
        min_width: Property::new(Length::Auto),
        min_height: Property::new(Length::Auto),
        max_width: Property::new(Length::Auto),
        max_height: Property::new(Length::Auto),
        aspect_ratio: Property::new(None),
        margin: Property::new(Edges::all(Length::ZERO)),
        grow: Property::new(0.0),
        shrink: Property::new(0.0),
        align_self: Property::new(AutoOr::Auto),
        stretch_self: Property::new(AutoOr::Auto),
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        default_config()
    }
}

impl FrameConfig {
    /// Fixed pixel width and height.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width: Property::new(Length::Px(width)),
            height: Property::new(Length::Px(height)),
            ..default_config()
        }
    }

    /// # Errors
    /// Returns [`TrackError::RatioOutOfRange`] when `align_self` or
    /// `stretch_self` is outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), TrackError> {
        if let Some(place) = self.align_self.value().value() {
            check_ratio("align_self", place)?;
        }
        if let Some(stretch) = self.stretch_self.value().value() {
            check_ratio("stretch_self", stretch)?;
        }
        Ok(())
    }
}

/// Container options of a flex layout.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexConfig {
    pub direction: Axis,
    pub reverse: bool,
    pub wrap: FlexWrap,
    pub gap: Length,
    pub line_gap: Length,
    pub justify: Distribution,
    pub align_content: Distribution,
    pub line_stretch: f64,
    pub align_items: f64,
    pub stretch_items: f64,
}

impl Default for FlexConfig {
    fn default() -> Self {
        Self {
            direction: Axis::Row,
            reverse: false,
            wrap: FlexWrap::NoWrap,
            gap: Length::ZERO,
            line_gap: Length::ZERO,
            justify: Distribution::START,
            align_content: Distribution::START,
            line_stretch: 0.0,
            align_items: 0.0,
            stretch_items: 1.0,
        }
    }
}

impl FlexConfig {
    pub fn row() -> Self {
        Self::default()
    }

    pub fn column() -> Self {
        Self {
            direction: Axis::Column,
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns [`TrackError::RatioOutOfRange`] for the first ratio outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), TrackError> {
        for (name, value) in [
            ("justify.place", self.justify.place),
            ("justify.space", self.justify.space),
            ("justify.space_outer", self.justify.space_outer),
            ("align_content.place", self.align_content.place),
            ("align_content.space", self.align_content.space),
            ("align_content.space_outer", self.align_content.space_outer),
            ("line_stretch", self.line_stretch),
            ("align_items", self.align_items),
            ("stretch_items", self.stretch_items),
        ] {
            check_ratio(name, value)?;
        }
        Ok(())
    }
}
