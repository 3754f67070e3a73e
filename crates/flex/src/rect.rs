use cadre_track::{Interval, round};
use serde::{Deserialize, Serialize};

use crate::container::Axis;

/// A rounded rectangle; width and height are never negative.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: round(x),
            y: round(y),
            width: round(width.max(0.0)),
            height: round(height.max(0.0)),
        }
    }

    /// Build from main/cross intervals of a container laid out along `axis`.
    pub fn from_axes(axis: Axis, main: Interval, cross: Interval) -> Self {
        let (horizontal, vertical) = axis.join(main, cross);
        Self::new(
            horizontal.start(),
            vertical.start(),
            horizontal.size(),
            vertical.size(),
        )
    }

    pub fn horizontal(&self) -> Interval {
        Interval::new(self.x, self.width)
    }

    pub fn vertical(&self) -> Interval {
        Interval::new(self.y, self.height)
    }

    /// Whether both rectangles have the same width and height.
    pub fn same_size(&self, other: &Self) -> bool {
        self.width.total_cmp(&other.width).is_eq() && self.height.total_cmp(&other.height).is_eq()
    }
}
