//! Flex layout: maps frame configuration onto flex items and options.

use cadre_flex::{Axis, FlexItem, FlexOptions, Rect, layout};
use cadre_track::{SequenceTrackItem, StackTrackItem};
use log::debug;

use crate::config::{FlexConfig, FrameConfig};
use crate::error::FrameError;
use crate::sizing::Sizing;

pub fn calculate(
    config: &FlexConfig,
    container: &Rect,
    children: &[&FrameConfig],
) -> Result<Vec<Rect>, FrameError> {
    let axis = config.direction;
    let (main_size, cross_size) = axis.split(container.width, container.height);
    let items: Vec<FlexItem> = children
        .iter()
        .map(|child| flex_item(child, axis, container))
        .collect();
    let options = FlexOptions {
        direction: axis,
        reverse: config.reverse,
        wrap: config.wrap,
        main_size: Some(main_size),
        cross_size: Some(cross_size),
        gap: config.gap.resolve(Some(main_size)).unwrap_or(0.0),
        line_gap: config.line_gap.resolve(Some(cross_size)).unwrap_or(0.0),
        justify: config.justify,
        align_content: config.align_content,
        line_stretch: config.line_stretch,
        align_items: config.align_items,
        stretch_items: config.stretch_items,
    };
    let output = layout(&items, &options)?;
    debug!(
        target: "cadre::frame",
        "[FRAME-FLEX] children={} lines={} container={}x{}",
        children.len(),
        output.lines.len(),
        container.width,
        container.height
    );
    Ok(output.rects)
}

/// A definite cross size is never stretched; an auto one starts at zero and
/// stretches up to its maximum.
fn flex_item(child: &FrameConfig, axis: Axis, container: &Rect) -> FlexItem {
    let sizing = Sizing::resolve(child, Some(container.width), Some(container.height));
    let (main_size, cross_size) = axis.split(sizing.width, sizing.height);
    let (min_main, min_cross) = axis.split(sizing.min_width, sizing.min_height);
    let (max_main, max_cross) = axis.split(sizing.max_width, sizing.max_height);
    // Percentage margins resolve against the container width on both axes.
    let margin_reference = Some(container.width);
    let margin = child.margin.value();

    let main = SequenceTrackItem::new(main_size.unwrap_or(0.0))
        .with_min(min_main)
        .with_max(max_main)
        .with_grow(child.grow.value())
        .with_shrink(child.shrink.value())
        .with_start(margin.start(axis).resolve_offset(margin_reference))
        .with_end(margin.end(axis).resolve_offset(margin_reference));

    let cross_axis = axis.cross();
    let cross_max = cross_size.map_or(max_cross, |size| size.max(min_cross).min(max_cross));
    let cross = StackTrackItem::new(cross_size.unwrap_or(0.0))
        .with_min(min_cross)
        .with_max(cross_max)
        .with_start(margin.start(cross_axis).resolve_offset(margin_reference))
        .with_end(margin.end(cross_axis).resolve_offset(margin_reference))
        .with_place(child.align_self.value())
        .with_stretch(child.stretch_self.value());

    FlexItem::new(main, cross)
}
