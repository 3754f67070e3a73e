//! Iterative grow and shrink distribution.
//!
//! Every pass computes a unit share from what is still unresolved. Items whose
//! share would reach their limit are frozen at that limit and the pass is
//! repeated with the rest; once a pass freezes nothing, the unit is applied to
//! every remaining item.

use log::trace;

use crate::item::SequenceTrackItem;

/// Hand `free_space` to items in proportion to their grow factors.
pub fn distribute_growth(items: &mut [SequenceTrackItem], free_space: f64) {
    debug_assert!(free_space >= 0.0, "growth called with negative free space");
    let mut remaining = free_space;
    let mut frozen: Vec<bool> = items.iter().map(|entry| entry.grow() <= 0.0).collect();
    for _ in 0..=items.len() {
        let total_grow: f64 = items
            .iter()
            .zip(&frozen)
            .filter(|&(_, is_frozen)| !is_frozen)
            .map(|(entry, _)| entry.grow())
            .sum();
        if total_grow <= 0.0 || remaining <= 0.0 {
            break;
        }
        let unit = remaining / total_grow;
        let mut any_frozen = false;
        for (entry, frozen_ref) in items.iter_mut().zip(frozen.iter_mut()) {
            if *frozen_ref {
                continue;
            }
            let available = entry.available_growth();
            if unit * entry.grow() >= available {
                let max = entry.item().max();
                entry.item_mut().set_size(max);
                remaining -= available;
                *frozen_ref = true;
                any_frozen = true;
                trace!("[SEQUENCE-GROW] capped at max {max}");
            }
        }
        if !any_frozen {
            for (entry, is_frozen) in items.iter_mut().zip(&frozen) {
                if !is_frozen {
                    let share = unit * entry.grow();
                    entry.item_mut().grow_by(share);
                }
            }
            break;
        }
    }
}

/// Take `overflow` away from items in proportion to `shrink * basis`.
pub fn distribute_shrinkage(items: &mut [SequenceTrackItem], overflow: f64) {
    debug_assert!(overflow >= 0.0, "shrinkage called with negative overflow");
    let mut remaining = overflow;
    let mut frozen: Vec<bool> = items
        .iter()
        .map(|entry| entry.scaled_shrink_factor() <= 0.0)
        .collect();
    for _ in 0..=items.len() {
        let total_scaled: f64 = items
            .iter()
            .zip(&frozen)
            .filter(|&(_, is_frozen)| !is_frozen)
            .map(|(entry, _)| entry.scaled_shrink_factor())
            .sum();
        if total_scaled <= 0.0 || remaining <= 0.0 {
            break;
        }
        let unit = remaining / total_scaled;
        let mut any_frozen = false;
        for (entry, frozen_ref) in items.iter_mut().zip(frozen.iter_mut()) {
            if *frozen_ref {
                continue;
            }
            let available = entry.available_shrinkage();
            if unit * entry.scaled_shrink_factor() >= available {
                let min = entry.item().min();
                entry.item_mut().set_size(min);
                remaining -= available;
                *frozen_ref = true;
                any_frozen = true;
                trace!("[SEQUENCE-SHRINK] capped at min {min}");
            }
        }
        if !any_frozen {
            for (entry, is_frozen) in items.iter_mut().zip(&frozen) {
                if !is_frozen {
                    let share = unit * entry.scaled_shrink_factor();
                    entry.item_mut().grow_by(-share);
                }
            }
            break;
        }
    }
}
