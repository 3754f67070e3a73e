//! Typed setters over [`FrameTree::configure`].

use cadre_track::AutoOr;

use super::{FrameId, FrameTree};
use crate::error::FrameError;
use crate::length::{AspectRatio, Edges, Length};

/// One setter per config field. Each returns whether the value changed; an
/// unchanged write invalidates nothing.
macro_rules! setters {
    ($($(#[$meta:meta])* $name:ident => $field:ident: $value:ty;)*) => {
        impl FrameTree {
            $(
                $(#[$meta])*
                ///
                /// # Errors
                /// As [`FrameTree::configure`].
                pub fn $name(&mut self, id: FrameId, value: $value) -> Result<bool, FrameError> {
                    self.configure(id, |config| config.$field.set(value))
                }
            )*
        }
    };
}

setters! {
    /// Offset from the parent origin under absolute layout.
    set_x => x: Length;
    set_y => y: Length;
    set_width => width: Length;
    set_height => height: Length;
    set_min_width => min_width: Length;
    set_min_height => min_height: Length;
    set_max_width => max_width: Length;
    set_max_height => max_height: Length;
    /// `None` removes the ratio.
    set_aspect_ratio => aspect_ratio: Option<AspectRatio>;
    set_margin => margin: Edges<Length>;
    set_grow => grow: f64;
    set_shrink => shrink: f64;
    set_align_self => align_self: AutoOr<f64>;
    set_stretch_self => stretch_self: AutoOr<f64>;
}
