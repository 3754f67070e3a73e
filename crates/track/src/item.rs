//! Per-item sizing state consumed by the resolvers.

use log::warn;

use crate::auto::AutoOr;

/// Sizing input for one item along one axis.
///
/// `basis`, `min` and `max` are normalized on every write: negatives become
/// zero and a `max` below `min` is raised to `min`. The mutable `size` always
/// stays inside `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackItem {
    basis: f64,
    min: f64,
    max: f64,
    start: AutoOr<f64>,
    end: AutoOr<f64>,
    size: f64,
}

impl Default for TrackItem {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl TrackItem {
    /// Item with the given basis, no minimum, no maximum and zero offsets.
    pub fn new(basis: f64) -> Self {
        let mut item = Self {
            basis: 0.0,
            min: 0.0,
            max: f64::INFINITY,
            start: AutoOr::Value(0.0),
            end: AutoOr::Value(0.0),
            size: 0.0,
        };
        item.basis = non_negative("basis", basis);
        item.reset();
        item
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = non_negative("min", min);
        if self.max < self.min {
            self.max = self.min;
        }
        self.reset();
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        let max = if max.is_nan() { f64::INFINITY } else { max };
        if max < self.min {
            warn!("[TRACK-ITEM] max {max} below min {}, raised to min", self.min);
        }
        self.max = max.max(self.min);
        self.reset();
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: impl Into<AutoOr<f64>>) -> Self {
        self.start = start.into();
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: impl Into<AutoOr<f64>>) -> Self {
        self.end = end.into();
        self
    }

    pub const fn basis(&self) -> f64 {
        self.basis
    }

    pub const fn min(&self) -> f64 {
        self.min
    }

    pub const fn max(&self) -> f64 {
        self.max
    }

    pub const fn start(&self) -> AutoOr<f64> {
        self.start
    }

    pub const fn end(&self) -> AutoOr<f64> {
        self.end
    }

    /// Current resolved size.
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// `basis` clamped into `[min, max]`.
    pub fn constrained_size(&self) -> f64 {
        self.basis.max(self.min).min(self.max)
    }

    pub fn definite_start(&self) -> f64 {
        self.start.value_or(0.0)
    }

    pub fn definite_end(&self) -> f64 {
        self.end.value_or(0.0)
    }

    fn definite_offsets(&self) -> f64 {
        self.definite_start() + self.definite_end()
    }

    /// Constrained size plus definite offsets; auto offsets count as zero.
    pub fn definite_outer_size(&self) -> f64 {
        self.constrained_size() + self.definite_offsets()
    }

    pub fn definite_outer_size_min(&self) -> f64 {
        self.min + self.definite_offsets()
    }

    pub fn definite_outer_size_max(&self) -> f64 {
        self.max + self.definite_offsets()
    }

    /// Current size plus definite offsets.
    pub fn resolved_outer_size(&self) -> f64 {
        self.size + self.definite_offsets()
    }

    pub fn auto_offset_count(&self) -> usize {
        usize::from(self.start.is_auto()) + usize::from(self.end.is_auto())
    }

    /// Start offset with auto slots receiving `auto_share`.
    pub fn resolved_start(&self, auto_share: f64) -> f64 {
        self.start.value_or(auto_share)
    }

    /// End offset with auto slots receiving `auto_share`.
    pub fn resolved_end(&self, auto_share: f64) -> f64 {
        self.end.value_or(auto_share)
    }

    /// Write the resolved size, bounded to `[min, max]`.
    pub fn set_size(&mut self, size: f64) {
        self.size = size.max(self.min).min(self.max);
    }

    pub fn grow_by(&mut self, amount: f64) {
        self.set_size(self.size + amount);
    }

    /// Return the size to the constrained basis.
    pub fn reset(&mut self) {
        self.size = self.constrained_size();
    }
}

fn non_negative(name: &str, value: f64) -> f64 {
    if value < 0.0 {
        warn!("[TRACK-ITEM] negative {name} {value} coerced to 0");
        0.0
    } else if value.is_nan() {
        0.0
    } else {
        value
    }
}

fn non_negative_factor(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Item resolved by [`sequence`](crate::sequence): a [`TrackItem`] with flex factors.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct SequenceTrackItem {
    item: TrackItem,
    grow: f64,
    shrink: f64,
}

impl From<TrackItem> for SequenceTrackItem {
    fn from(item: TrackItem) -> Self {
        Self {
            item,
            grow: 0.0,
            shrink: 0.0,
        }
    }
}

impl SequenceTrackItem {
    pub fn new(basis: f64) -> Self {
        Self::from(TrackItem::new(basis))
    }

    #[must_use]
    pub fn with_grow(mut self, grow: f64) -> Self {
        self.grow = non_negative_factor(grow);
        self
    }

    #[must_use]
    pub fn with_shrink(mut self, shrink: f64) -> Self {
        self.shrink = non_negative_factor(shrink);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.item = self.item.with_min(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.item = self.item.with_max(max);
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: impl Into<AutoOr<f64>>) -> Self {
        self.item = self.item.with_start(start);
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: impl Into<AutoOr<f64>>) -> Self {
        self.item = self.item.with_end(end);
        self
    }

    pub const fn item(&self) -> &TrackItem {
        &self.item
    }

    pub(crate) const fn item_mut(&mut self) -> &mut TrackItem {
        &mut self.item
    }

    pub const fn grow(&self) -> f64 {
        self.grow
    }

    pub const fn shrink(&self) -> f64 {
        self.shrink
    }

    /// `shrink * basis`; larger items give up more space.
    pub fn scaled_shrink_factor(&self) -> f64 {
        self.shrink * self.item.basis()
    }

    /// Room left before the item reaches `max`.
    pub fn available_growth(&self) -> f64 {
        self.item.max() - self.item.size()
    }

    /// Room left before the item reaches `min`.
    pub fn available_shrinkage(&self) -> f64 {
        self.item.size() - self.item.min()
    }
}

/// Item resolved by [`stack`](crate::stack): a [`TrackItem`] with optional
/// alignment overrides.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct StackTrackItem {
    item: TrackItem,
    stretch: AutoOr<f64>,
    place: AutoOr<f64>,
}

impl From<TrackItem> for StackTrackItem {
    fn from(item: TrackItem) -> Self {
        Self {
            item,
            stretch: AutoOr::Auto,
            place: AutoOr::Auto,
        }
    }
}

impl StackTrackItem {
    pub fn new(basis: f64) -> Self {
        Self::from(TrackItem::new(basis))
    }

    #[must_use]
    pub fn with_stretch(mut self, stretch: impl Into<AutoOr<f64>>) -> Self {
        self.stretch = stretch.into();
        self
    }

    #[must_use]
    pub fn with_place(mut self, place: impl Into<AutoOr<f64>>) -> Self {
        self.place = place.into();
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.item = self.item.with_min(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.item = self.item.with_max(max);
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: impl Into<AutoOr<f64>>) -> Self {
        self.item = self.item.with_start(start);
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: impl Into<AutoOr<f64>>) -> Self {
        self.item = self.item.with_end(end);
        self
    }

    pub const fn item(&self) -> &TrackItem {
        &self.item
    }

    pub const fn stretch(&self) -> AutoOr<f64> {
        self.stretch
    }

    pub const fn place(&self) -> AutoOr<f64> {
        self.place
    }

    /// Items with an auto offset are positioned by their free slots instead.
    pub const fn stretchable(&self) -> bool {
        !(self.item.start().is_auto() || self.item.end().is_auto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::approx_eq;

    #[test]
    fn negative_inputs_coerce_to_zero() {
        let item = TrackItem::new(-10.0).with_min(-5.0);
        assert!(approx_eq(item.basis(), 0.0));
        assert!(approx_eq(item.min(), 0.0));
        assert!(item.max().is_infinite());
    }

    #[test]
    fn max_below_min_is_raised() {
        let item = TrackItem::new(10.0).with_min(40.0).with_max(20.0);
        assert!(approx_eq(item.max(), 40.0));
        assert!(approx_eq(item.constrained_size(), 40.0));
        assert!(approx_eq(item.size(), 40.0));
    }

    #[test]
    fn outer_sizes_skip_auto_offsets() {
        let item = TrackItem::new(50.0)
            .with_min(10.0)
            .with_max(80.0)
            .with_start(5.0)
            .with_end(AutoOr::Auto);
        assert!(approx_eq(item.definite_outer_size(), 55.0));
        assert!(approx_eq(item.definite_outer_size_min(), 15.0));
        assert!(approx_eq(item.definite_outer_size_max(), 85.0));
        assert_eq!(item.auto_offset_count(), 1);
    }

    #[test]
    fn size_writes_are_bounded() {
        let mut item = TrackItem::new(50.0).with_min(20.0).with_max(60.0);
        item.set_size(100.0);
        assert!(approx_eq(item.size(), 60.0));
        item.grow_by(-100.0);
        assert!(approx_eq(item.size(), 20.0));
        item.reset();
        assert!(approx_eq(item.size(), 50.0));
    }

    #[test]
    fn sequence_item_derived_values() {
        let item = SequenceTrackItem::new(100.0)
            .with_shrink(2.0)
            .with_grow(-1.0)
            .with_max(150.0);
        assert!(approx_eq(item.grow(), 0.0));
        assert!(approx_eq(item.scaled_shrink_factor(), 200.0));
        assert!(approx_eq(item.available_growth(), 50.0));
        assert!(approx_eq(item.available_shrinkage(), 100.0));
    }

    #[test]
    fn auto_offsets_disable_stretch() {
        assert!(StackTrackItem::new(10.0).stretchable());
        assert!(!StackTrackItem::new(10.0).with_start(AutoOr::Auto).stretchable());
        assert!(!StackTrackItem::new(10.0).with_end(AutoOr::Auto).stretchable());
    }
}
