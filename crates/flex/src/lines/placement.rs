//! Cross-axis placement of lines.
//!
//! Lines are resolved as one more sequence whose items are the lines
//! themselves. Stretching is expressed through the flex factors: each line
//! grows with factor 1 up to `basis + line_stretch * free / count`, so the
//! capping loop hands out exactly the requested share.

use cadre_track::{SequenceOptions, SequenceTrackItem, Track, TrackError, sequence};
use log::debug;

use super::FlexLine;
use crate::container::FlexOptions;

/// Resolve each line's cross interval and return the resulting track.
pub fn place_lines(lines: &mut [FlexLine], options: &FlexOptions) -> Result<Track, TrackError> {
    let count = lines.len();
    // A lone unwrapped line always fills the container.
    let line_stretch = if count == 1 && !options.wrap.wraps() {
        1.0
    } else {
        options.line_stretch
    };
    let content: f64 = lines.iter().map(FlexLine::items_cross_size).sum::<f64>()
        + options.line_gap * count.saturating_sub(1) as f64;
    let free = options
        .definite_cross_size()
        .map_or(0.0, |size| (size - content).max(0.0));

    let pseudo_items: Vec<SequenceTrackItem> = lines
        .iter()
        .map(|line| {
            let basis = line.items_cross_size();
            if line_stretch > 0.0 && free > 0.0 {
                SequenceTrackItem::new(basis)
                    .with_grow(1.0)
                    .with_max(basis + line_stretch * free / count as f64)
            } else {
                SequenceTrackItem::new(basis)
            }
        })
        .collect();

    let track = sequence(
        &pseudo_items,
        &SequenceOptions {
            gap: options.line_gap,
            size: options.definite_cross_size(),
            place: options.align_content.place,
            space: options.align_content.space,
            space_outer: options.align_content.space_outer,
        },
    )?;
    for (line, interval) in lines.iter_mut().zip(track.iter()) {
        line.set_cross(*interval);
    }
    debug!(
        target: "cadre::flex",
        "[FLEX-LINES] count={count} content={content:.4} free={free:.4} stretch={line_stretch}"
    );
    Ok(track)
}
