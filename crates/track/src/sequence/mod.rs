//! Main-axis resolution: items laid out one after another.

mod distribution;
mod spacing;

#[cfg(test)]
mod tests;

use log::debug;

use crate::interval::Interval;
use crate::item::SequenceTrackItem;
use crate::track::{Track, TrackError, check_ratio};

use distribution::{distribute_growth, distribute_shrinkage};
use spacing::Spacing;

/// Options for [`sequence`].
///
/// With `size` absent (or infinite) items keep their constrained sizes and
/// the run is anchored at `place * -total`. `space` is the share of leftover
/// space handed to the gaps between and around items; `space_outer` weights
/// the two outer edges against the interior gaps.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct SequenceOptions {
    pub gap: f64,
    pub size: Option<f64>,
    pub place: f64,
    pub space: f64,
    pub space_outer: f64,
}

impl SequenceOptions {
    /// Options resolving into a definite `size`.
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), TrackError> {
        check_ratio("place", self.place)?;
        check_ratio("space", self.space)?;
        check_ratio("space_outer", self.space_outer)?;
        Ok(())
    }

    fn definite_size(&self) -> Option<f64> {
        self.size.filter(|size| size.is_finite())
    }
}

/// Running totals over the input items.
#[derive(Debug, Default)]
struct Totals {
    outer: f64,
    auto_offsets: usize,
    grow: f64,
    scaled_shrink: f64,
}

impl Totals {
    fn collect(items: &[SequenceTrackItem]) -> Self {
        items.iter().fold(Self::default(), |mut totals, entry| {
            totals.outer += entry.item().definite_outer_size();
            totals.auto_offsets += entry.item().auto_offset_count();
            if entry.grow() > 0.0 {
                totals.grow += entry.grow();
            }
            if entry.shrink() > 0.0 {
                totals.scaled_shrink += entry.scaled_shrink_factor();
            }
            totals
        })
    }
}

/// Resolve `items` into back-to-back intervals along one axis.
///
/// # Errors
/// Returns [`TrackError::EmptyTrack`] for an empty item list and
/// [`TrackError::RatioOutOfRange`] for an invalid placement or spacing ratio.
pub fn sequence(
    items: &[SequenceTrackItem],
    options: &SequenceOptions,
) -> Result<Track, TrackError> {
    options.validate()?;
    if items.is_empty() {
        return Err(TrackError::EmptyTrack);
    }
    let mut resolved = items.to_vec();
    for entry in &mut resolved {
        entry.item_mut().reset();
    }
    let totals = Totals::collect(&resolved);
    let gaps = options.gap * (resolved.len() - 1) as f64;

    let spacing = match options.definite_size() {
        None => {
            let total = totals.outer + gaps;
            Spacing::anchored(options.place * -total)
        }
        Some(size) => {
            let delta = size - totals.outer - gaps;
            if totals.auto_offsets > 0 {
                Spacing::auto_offsets(delta, totals.auto_offsets, options.place)
            } else {
                if delta > 0.0 && totals.grow > 0.0 {
                    distribute_growth(&mut resolved, delta);
                } else if delta < 0.0 && totals.scaled_shrink > 0.0 {
                    distribute_shrinkage(&mut resolved, -delta);
                }
                let consumed = resolved
                    .iter()
                    .map(|entry| entry.item().resolved_outer_size())
                    .sum::<f64>()
                    + gaps;
                Spacing::justify(size - consumed, options, resolved.len())
            }
        }
    };

    debug!(
        target: "cadre::track::sequence",
        "[SEQUENCE] items={} size={:?} outer={:.4} autos={} grow={:.4} shrink={:.4} lead={:.4} interior={:.4}",
        resolved.len(),
        options.size,
        totals.outer,
        totals.auto_offsets,
        totals.grow,
        totals.scaled_shrink,
        spacing.leading,
        spacing.interior
    );

    Track::new(walk(&resolved, options.gap, &spacing))
}

/// Emit one interval per item, advancing a cursor over offsets, gaps and spacing.
fn walk(items: &[SequenceTrackItem], gap: f64, spacing: &Spacing) -> Vec<Interval> {
    let mut cursor = spacing.leading;
    items
        .iter()
        .map(|entry| {
            let item = entry.item();
            cursor += item.resolved_start(spacing.auto_share);
            let interval = Interval::new(cursor, item.size());
            cursor += item.size() + item.resolved_end(spacing.auto_share) + gap + spacing.interior;
            interval
        })
        .collect()
}
