//! Multi-line flexible box composition.
//!
//! Items are broken into lines along the main axis, every line is resolved
//! with [`sequence`](cadre_track::sequence), the lines themselves are placed
//! along the cross axis with one more sequence, and items are aligned inside
//! their line with [`stack`](cadre_track::stack).

mod container;
mod lines;
mod rect;

#[cfg(test)]
mod tests;

use cadre_track::{Interval, StackOptions, StackTrackItem, TrackError, stack};
use log::debug;

pub use container::{Axis, Distribution, FlexItem, FlexOptions, FlexWrap};
pub use lines::FlexLine;
pub use rect::Rect;

use lines::{break_into_lines, place_lines};

/// Resolved rectangles (in input order) and the lines they were placed on.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FlexOutput {
    pub rects: Vec<Rect>,
    pub lines: Vec<FlexLine>,
}

/// Lay out `items` inside a flex container.
///
/// # Errors
/// Returns [`TrackError::RatioOutOfRange`] when a container or item ratio is
/// outside `[0, 1]`.
pub fn layout(items: &[FlexItem], options: &FlexOptions) -> Result<FlexOutput, TrackError> {
    options.validate()?;
    let mut lines = break_into_lines(items, options)?;
    if lines.is_empty() {
        return Ok(FlexOutput::default());
    }
    let line_track = place_lines(&mut lines, options)?;

    let main_extent = options.definite_main_size().map_or_else(
        || {
            lines
                .iter()
                .map(|line| line.main().extent())
                .reduce(Interval::union)
                .unwrap_or_default()
        },
        |size| Interval::new(0.0, size),
    );
    let cross_extent = options
        .definite_cross_size()
        .map_or_else(|| line_track.extent(), |size| Interval::new(0.0, size));
    if matches!(options.wrap, FlexWrap::WrapReverse) {
        for line in &mut lines {
            let mirrored = line
                .cross()
                .mirror_within(cross_extent.start(), cross_extent.end());
            line.set_cross(mirrored);
        }
    }

    let mut rects = Vec::with_capacity(items.len());
    for line in &lines {
        let line_cross = line.cross();
        let cross_items: Vec<StackTrackItem> = items
            .get(line.range())
            .unwrap_or_default()
            .iter()
            .map(|item| item.cross)
            .collect();
        let cross_track = stack(
            &cross_items,
            &StackOptions {
                place: options.align_items,
                stretch: options.stretch_items,
                size: Some(line_cross.size()),
            },
        )?;
        for (main, cross) in line.main().iter().zip(cross_track.iter()) {
            let main = if options.reverse {
                main.mirror_within(main_extent.start(), main_extent.end())
            } else {
                *main
            };
            rects.push(Rect::from_axes(
                options.direction,
                main,
                cross.translate(line_cross.start()),
            ));
        }
    }

    debug!(
        target: "cadre::flex",
        "[FLEX] items={} lines={} direction={:?} reverse={} wrap={:?}",
        items.len(),
        lines.len(),
        options.direction,
        options.reverse,
        options.wrap
    );
    Ok(FlexOutput { rects, lines })
}
