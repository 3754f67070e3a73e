//! Line breaking and per-line main-axis resolution.

mod placement;

use core::ops::Range;

use cadre_track::{Interval, SequenceOptions, SequenceTrackItem, TOLERANCE, Track, TrackError, sequence};
use log::debug;

use crate::container::{FlexItem, FlexOptions};

pub use placement::place_lines;

/// A contiguous run of items that share one line.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLine {
    range: Range<usize>,
    total_main_size: f64,
    items_cross_size: f64,
    main: Track,
    cross: Interval,
}

impl FlexLine {
    fn resolve(
        items: &[FlexItem],
        range: Range<usize>,
        total_main_size: f64,
        options: &FlexOptions,
    ) -> Result<Self, TrackError> {
        let members = items.get(range.clone()).unwrap_or_default();
        let main_items: Vec<SequenceTrackItem> = members.iter().map(|item| item.main).collect();
        let sequence_options = SequenceOptions {
            gap: options.gap,
            size: options.definite_main_size(),
            place: options.justify.place,
            space: options.justify.space,
            space_outer: options.justify.space_outer,
        };
        let main = sequence(&main_items, &sequence_options)?;
        let items_cross_size = members
            .iter()
            .map(|item| item.cross.item().definite_outer_size())
            .fold(0.0, f64::max);
        debug!(
            target: "cadre::flex",
            "[FLEX-LINE] items={range:?} main_total={total_main_size:.4} cross={items_cross_size:.4}"
        );
        Ok(Self {
            range,
            total_main_size,
            items_cross_size,
            main,
            cross: Interval::new(0.0, items_cross_size),
        })
    }

    /// Indices of the items on this line.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Outer main sizes of the line's items plus the gaps between them.
    pub const fn total_main_size(&self) -> f64 {
        self.total_main_size
    }

    /// Largest cross outer size among the line's items.
    pub const fn items_cross_size(&self) -> f64 {
        self.items_cross_size
    }

    /// Resolved main-axis intervals, in item order.
    pub const fn main(&self) -> &Track {
        &self.main
    }

    /// The line's cross-axis interval once lines are placed.
    pub const fn cross(&self) -> Interval {
        self.cross
    }

    pub(crate) fn set_cross(&mut self, cross: Interval) {
        self.cross = cross;
    }
}

/// Group items into lines and resolve each line's main axis as it closes.
///
/// A line closes when wrapping is on, the main size is definite, the line
/// already holds an item, and the next item would overflow it. Every item
/// lands on exactly one line, so a non-empty list never yields zero lines.
pub fn break_into_lines(
    items: &[FlexItem],
    options: &FlexOptions,
) -> Result<Vec<FlexLine>, TrackError> {
    let mut lines = Vec::new();
    if items.is_empty() {
        return Ok(lines);
    }
    let limit = options
        .definite_main_size()
        .filter(|_| options.wrap.wraps());
    let mut start = 0_usize;
    let mut total = 0.0_f64;
    for (index, item) in items.iter().enumerate() {
        let outer = item.main.item().definite_outer_size();
        let gap = if index == start { 0.0 } else { options.gap };
        let next = total + gap + outer;
        if let Some(limit) = limit
            && index > start
            && next > limit + TOLERANCE
        {
            lines.push(FlexLine::resolve(items, start..index, total, options)?);
            start = index;
            total = outer;
        } else {
            total = next;
        }
    }
    lines.push(FlexLine::resolve(items, start..items.len(), total, options)?);
    Ok(lines)
}
