//! Cross-axis resolution: items aligned inside one shared extent.

use log::debug;

use crate::interval::Interval;
use crate::item::StackTrackItem;
use crate::track::{Track, TrackError, check_ratio};

/// Container defaults for [`stack`]. A `size` of `None` sizes the stack to its
/// largest item.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct StackOptions {
    pub place: f64,
    pub stretch: f64,
    pub size: Option<f64>,
}

impl StackOptions {
    fn validate(&self) -> Result<(), TrackError> {
        check_ratio("place", self.place)?;
        check_ratio("stretch", self.stretch)?;
        Ok(())
    }
}

/// Resolve `items` so that each is aligned within the same extent.
///
/// Stretchable items first grow toward the extent by their stretch ratio.
/// Items with auto offsets then split the leftover space between those slots;
/// the others are placed at `place * free` after their start offset.
///
/// # Errors
/// Returns [`TrackError::EmptyTrack`] for an empty item list and
/// [`TrackError::RatioOutOfRange`] for an invalid container or item ratio.
pub fn stack(items: &[StackTrackItem], options: &StackOptions) -> Result<Track, TrackError> {
    options.validate()?;
    for entry in items {
        if let Some(stretch) = entry.stretch().value() {
            check_ratio("stretch", stretch)?;
        }
        if let Some(place) = entry.place().value() {
            check_ratio("place", place)?;
        }
    }
    let size = options
        .size
        .filter(|size| size.is_finite())
        .unwrap_or_else(|| {
            items
                .iter()
                .map(|entry| entry.item().constrained_size())
                .fold(0.0, f64::max)
        });

    let intervals: Vec<Interval> = items
        .iter()
        .map(|entry| align(entry, size, options))
        .collect();

    debug!(
        target: "cadre::track::stack",
        "[STACK] items={} size={size:.4} place={} stretch={}",
        items.len(),
        options.place,
        options.stretch
    );

    Track::new(intervals)
}

fn align(entry: &StackTrackItem, size: f64, options: &StackOptions) -> Interval {
    let mut item = *entry.item();
    item.reset();
    if entry.stretchable() {
        let free = size - item.definite_outer_size();
        if free > 0.0 {
            item.grow_by(entry.stretch().value_or(options.stretch) * free);
        }
    }
    let free = size - item.resolved_outer_size();
    let slots = item.auto_offset_count();
    let start = if slots > 0 {
        item.resolved_start(free.max(0.0) / slots as f64)
    } else {
        entry.place().value_or(options.place) * free + item.definite_start()
    };
    Interval::new(start, item.size())
}
