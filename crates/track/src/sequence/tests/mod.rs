//! Tests for main-axis sequence resolution.

use super::*;
use crate::auto::AutoOr;
use crate::precision::approx_eq;

mod distribution_tests;

/// Collect `(start, size)` pairs from a resolved track.
pub fn pairs(track: &Track) -> Vec<(f64, f64)> {
    track
        .iter()
        .map(|interval| (interval.start(), interval.size()))
        .collect()
}

/// Assert every interval matches `expected` within rounding tolerance.
///
/// # Panics
/// Panics if the lengths differ or any start/size pair is off.
pub fn assert_pairs(track: &Track, expected: &[(f64, f64)]) {
    let got = pairs(track);
    assert_eq!(got.len(), expected.len(), "interval count: {got:?}");
    for (index, ((start, size), (want_start, want_size))) in got.iter().zip(expected).enumerate() {
        assert!(
            approx_eq(*start, *want_start) && approx_eq(*size, *want_size),
            "interval {index}: got ({start}, {size}), expected ({want_start}, {want_size})"
        );
    }
}

/// Items of the given bases with no flex factors.
pub fn rigid(bases: &[f64]) -> Vec<SequenceTrackItem> {
    bases.iter().copied().map(SequenceTrackItem::new).collect()
}

#[test]
/// # Panics
/// Panics if an empty list resolves to anything but `EmptyTrack`.
fn empty_items_are_rejected() {
    assert_eq!(
        sequence(&[], &SequenceOptions::sized(100.0)),
        Err(TrackError::EmptyTrack)
    );
}

#[test]
/// # Panics
/// Panics if an out-of-range ratio is accepted.
fn invalid_ratio_is_rejected() {
    let options = SequenceOptions {
        place: 1.5,
        ..SequenceOptions::sized(100.0)
    };
    assert_eq!(
        sequence(&rigid(&[10.0]), &options),
        Err(TrackError::RatioOutOfRange {
            name: "place",
            value: 1.5
        })
    );
}

#[test]
/// Natural sizing lays items back to back at their constrained sizes.
///
/// # Errors
/// Propagates resolution errors.
fn natural_sizing_packs_items() -> Result<(), TrackError> {
    let options = SequenceOptions {
        gap: 10.0,
        ..SequenceOptions::default()
    };
    let track = sequence(&rigid(&[30.0, 40.0]), &options)?;
    assert_pairs(&track, &[(0.0, 30.0), (40.0, 40.0)]);
    assert!(approx_eq(track.size(), 80.0));
    Ok(())
}

#[test]
/// Natural sizing anchors the run at `place * -total`.
///
/// # Errors
/// Propagates resolution errors.
fn natural_sizing_anchors_by_place() -> Result<(), TrackError> {
    let centered = SequenceOptions {
        place: 0.5,
        ..SequenceOptions::default()
    };
    let track = sequence(&rigid(&[30.0, 50.0]), &centered)?;
    assert_pairs(&track, &[(-40.0, 30.0), (-10.0, 50.0)]);

    let infinite = SequenceOptions {
        size: Some(f64::INFINITY),
        place: 1.0,
        ..SequenceOptions::default()
    };
    let track = sequence(&rigid(&[30.0, 50.0]), &infinite)?;
    assert_pairs(&track, &[(-80.0, 30.0), (-50.0, 50.0)]);
    Ok(())
}

#[test]
/// Definite offsets push items apart and count toward the consumed size.
///
/// # Errors
/// Propagates resolution errors.
fn definite_offsets_shift_items() -> Result<(), TrackError> {
    let items = [
        SequenceTrackItem::new(20.0).with_start(5.0).with_end(5.0),
        SequenceTrackItem::new(20.0).with_start(AutoOr::Value(10.0)),
    ];
    let track = sequence(&items, &SequenceOptions::default())?;
    assert_pairs(&track, &[(5.0, 20.0), (40.0, 20.0)]);
    Ok(())
}

#[test]
/// Identical inputs resolve to identical intervals.
///
/// # Errors
/// Propagates resolution errors.
fn resolution_is_deterministic() -> Result<(), TrackError> {
    let items = [
        SequenceTrackItem::new(100.0).with_grow(1.0).with_max(130.0),
        SequenceTrackItem::new(60.0).with_grow(2.0),
        SequenceTrackItem::new(80.0).with_shrink(1.0),
    ];
    let options = SequenceOptions {
        gap: 4.0,
        space: 0.5,
        place: 0.25,
        ..SequenceOptions::sized(333.0)
    };
    let first = sequence(&items, &options)?;
    let second = sequence(&items, &options)?;
    assert_eq!(first, second);
    Ok(())
}
