//! Leading offset, interior spacing and auto-slot share for a resolved run.

use super::SequenceOptions;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    /// Cursor position before the first item.
    pub leading: f64,
    /// Extra space after every item.
    pub interior: f64,
    /// Space given to each auto offset slot.
    pub auto_share: f64,
}

impl Spacing {
    pub const fn anchored(leading: f64) -> Self {
        Self {
            leading,
            interior: 0.0,
            auto_share: 0.0,
        }
    }

    /// Auto offsets absorb positive free space evenly; overflow is anchored by `place`.
    pub fn auto_offsets(delta: f64, slots: usize, place: f64) -> Self {
        Self {
            leading: place * delta.min(0.0),
            interior: 0.0,
            auto_share: delta.max(0.0) / slots as f64,
        }
    }

    /// Split `free` between the edges and interior gaps, anchoring the rest by `place`.
    ///
    /// Each outer edge weighs `space_outer` and each of the `count - 1` interior
    /// gaps weighs one. Only the `space` share of positive free space is handed
    /// out this way.
    pub fn justify(free: f64, options: &SequenceOptions, count: usize) -> Self {
        let distributed = free.max(0.0) * options.space;
        let interior_slots = count.saturating_sub(1) as f64;
        let weight = 2.0 * options.space_outer + interior_slots;
        let (edge, interior) = if distributed > 0.0 && weight > 0.0 {
            let edge = distributed * options.space_outer / weight;
            let interior = if interior_slots > 0.0 {
                (distributed - 2.0 * edge) / interior_slots
            } else {
                0.0
            };
            (edge, interior)
        } else {
            (0.0, 0.0)
        };
        let remainder = free - 2.0 * edge - interior * interior_slots;
        Self {
            leading: options.place * remainder + edge,
            interior,
            auto_share: 0.0,
        }
    }
}
