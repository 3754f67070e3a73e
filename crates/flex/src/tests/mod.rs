//! Tests for flex composition.

use super::*;
use cadre_track::{SequenceTrackItem, approx_eq};


/// A fixed-size item: rigid on the main axis, not stretchable past `cross`.
pub fn fixed(main: f64, cross: f64) -> FlexItem {
    FlexItem::new(
        SequenceTrackItem::new(main),
        StackTrackItem::new(cross).with_max(cross),
    )
}

/// An item whose cross size is left to stretching.
pub fn stretchy(main: f64, cross: f64) -> FlexItem {
    FlexItem::new(SequenceTrackItem::new(main), StackTrackItem::new(cross))
}

pub fn container(main: f64, cross: f64) -> FlexOptions {
    FlexOptions {
        main_size: Some(main),
        cross_size: Some(cross),
        ..FlexOptions::default()
    }
}

/// Assert rectangle origins and sizes as `(x, y, width, height)`.
///
/// # Panics
/// Panics if the count differs or any rectangle is off.
pub fn assert_rects(rects: &[Rect], expected: &[(f64, f64, f64, f64)]) {
    assert_eq!(rects.len(), expected.len(), "rect count: {rects:?}");
    for (index, (rect, &(x, y, width, height))) in rects.iter().zip(expected).enumerate() {
        assert!(
            approx_eq(rect.x, x)
                && approx_eq(rect.y, y)
                && approx_eq(rect.width, width)
                && approx_eq(rect.height, height),
            "rect {index}: got {rect:?}, expected ({x}, {y}, {width}, {height})"
        );
    }
}

#[test]
/// # Errors
/// Propagates resolution errors.
fn empty_items_yield_nothing() -> Result<(), TrackError> {
    let output = layout(&[], &container(100.0, 100.0))?;
    assert!(output.rects.is_empty());
    assert!(output.lines.is_empty());
    Ok(())
}

#[test]
/// # Panics
/// Panics if an invalid container ratio is accepted.
fn invalid_ratio_is_rejected() {
    let options = FlexOptions {
        line_stretch: -0.5,
        ..container(100.0, 100.0)
    };
    assert_eq!(
        layout(&[fixed(10.0, 10.0)], &options),
        Err(TrackError::RatioOutOfRange {
            name: "line_stretch",
            value: -0.5
        })
    );
}

#[test]
/// Column containers map the main axis to `y`.
///
/// # Errors
/// Propagates resolution errors.
fn column_maps_main_to_y() -> Result<(), TrackError> {
    let options = FlexOptions {
        direction: Axis::Column,
        ..container(100.0, 80.0)
    };
    let output = layout(&[fixed(30.0, 20.0), fixed(40.0, 10.0)], &options)?;
    assert_rects(
        &output.rects,
        &[(0.0, 0.0, 20.0, 30.0), (0.0, 30.0, 10.0, 40.0)],
    );
    Ok(())
}
