//! Grow and shrink distribution.

use super::*;
use crate::precision::TOLERANCE;

#[test]
/// A growing item takes all free space while a rigid sibling keeps its basis.
///
/// # Errors
/// Propagates resolution errors.
fn grow_fills_free_space() -> Result<(), TrackError> {
    let items = [
        SequenceTrackItem::new(100.0).with_grow(1.0),
        SequenceTrackItem::new(200.0),
    ];
    let track = sequence(&items, &SequenceOptions::sized(400.0))?;
    assert_pairs(&track, &[(0.0, 200.0), (200.0, 200.0)]);
    Ok(())
}

#[test]
/// Overflow is taken in proportion to `shrink * basis`.
///
/// # Errors
/// Propagates resolution errors.
fn shrink_is_weighted_by_basis() -> Result<(), TrackError> {
    let items = [
        SequenceTrackItem::new(100.0).with_shrink(2.0),
        SequenceTrackItem::new(100.0).with_shrink(1.0),
    ];
    let track = sequence(&items, &SequenceOptions::sized(100.0))?;
    assert_pairs(&track, &[(0.0, 33.3333), (33.3333, 66.6667)]);
    Ok(())
}

#[test]
/// An item capped at its max hands the rest of its share to the others.
///
/// # Errors
/// Propagates resolution errors.
fn capped_growth_is_redistributed() -> Result<(), TrackError> {
    let items = [
        SequenceTrackItem::new(50.0).with_grow(1.0).with_max(60.0),
        SequenceTrackItem::new(50.0).with_grow(1.0),
    ];
    let track = sequence(&items, &SequenceOptions::sized(200.0))?;
    assert_pairs(&track, &[(0.0, 60.0), (60.0, 140.0)]);
    Ok(())
}

#[test]
/// Chained caps resolve over several passes.
///
/// # Errors
/// Propagates resolution errors.
fn chained_caps_resolve() -> Result<(), TrackError> {
    let items = [
        SequenceTrackItem::new(0.0).with_grow(1.0).with_max(10.0),
        SequenceTrackItem::new(0.0).with_grow(1.0).with_max(35.0),
        SequenceTrackItem::new(0.0).with_grow(2.0),
    ];
    let track = sequence(&items, &SequenceOptions::sized(120.0))?;
    // Unit 30 caps the first item, unit 110/3 caps the second, the third takes 75.
    assert_pairs(&track, &[(0.0, 10.0), (10.0, 35.0), (45.0, 75.0)]);
    Ok(())
}

#[test]
/// Shrinking stops at each item's minimum.
///
/// # Errors
/// Propagates resolution errors.
fn shrink_respects_min() -> Result<(), TrackError> {
    let items = [
        SequenceTrackItem::new(100.0).with_shrink(1.0).with_min(90.0),
        SequenceTrackItem::new(100.0).with_shrink(1.0),
    ];
    let track = sequence(&items, &SequenceOptions::sized(120.0))?;
    assert_pairs(&track, &[(0.0, 90.0), (90.0, 30.0)]);
    Ok(())
}

#[test]
/// Rigid items overflow the container instead of shrinking.
///
/// # Errors
/// Propagates resolution errors.
fn rigid_items_overflow() -> Result<(), TrackError> {
    let track = sequence(&rigid(&[80.0, 80.0]), &SequenceOptions::sized(100.0))?;
    assert_pairs(&track, &[(0.0, 80.0), (80.0, 80.0)]);
    Ok(())
}

#[test]
/// Sizes, gaps and offsets add back up to the container size.
///
/// # Errors
/// Propagates resolution errors.
fn conservation_holds() -> Result<(), TrackError> {
    let cases: [(&[SequenceTrackItem], f64, f64); 3] = [
        (
            &[
                SequenceTrackItem::new(10.0).with_grow(1.0).with_start(3.0),
                SequenceTrackItem::new(30.0).with_grow(3.0).with_max(90.0),
                SequenceTrackItem::new(20.0).with_grow(0.5).with_end(7.0),
            ],
            8.0,
            333.0,
        ),
        (
            &[
                SequenceTrackItem::new(120.0).with_shrink(1.0).with_min(100.0),
                SequenceTrackItem::new(80.0).with_shrink(2.0),
                SequenceTrackItem::new(60.0).with_shrink(1.0).with_end(4.0),
            ],
            -2.0,
            190.0,
        ),
        (
            &[
                SequenceTrackItem::new(1.0).with_grow(1.0),
                SequenceTrackItem::new(1.0).with_grow(1.0),
                SequenceTrackItem::new(1.0).with_grow(1.0),
            ],
            0.0,
            100.0,
        ),
    ];
    for (items, gap, size) in cases {
        let options = SequenceOptions {
            gap,
            ..SequenceOptions::sized(size)
        };
        let track = sequence(items, &options)?;
        let sizes: f64 = track.iter().map(|interval| interval.size()).sum();
        let offsets: f64 = items
            .iter()
            .map(|entry| entry.item().definite_start() + entry.item().definite_end())
            .sum();
        let gaps = gap * (items.len() - 1) as f64;
        assert!(
            (sizes + offsets + gaps - size).abs() < 1e-3,
            "sizes {sizes} + offsets {offsets} + gaps {gaps} != {size}"
        );
    }
    Ok(())
}

#[test]
/// Every resolved size stays inside its item's bounds.
///
/// # Errors
/// Propagates resolution errors.
fn sizes_stay_clamped() -> Result<(), TrackError> {
    let items = [
        SequenceTrackItem::new(40.0).with_grow(5.0).with_shrink(5.0).with_min(30.0).with_max(45.0),
        SequenceTrackItem::new(40.0).with_grow(1.0).with_shrink(1.0).with_min(10.0),
        SequenceTrackItem::new(40.0).with_grow(0.1).with_shrink(0.1).with_max(50.0),
    ];
    for size in [0.0, 50.0, 120.0, 121.0, 500.0] {
        let track = sequence(&items, &SequenceOptions::sized(size))?;
        for (interval, entry) in track.iter().zip(&items) {
            let item = entry.item();
            assert!(
                interval.size() >= item.min() - TOLERANCE && interval.size() <= item.max() + TOLERANCE,
                "size {} outside [{}, {}] for container {size}",
                interval.size(),
                item.min(),
                item.max()
            );
        }
    }
    Ok(())
}
