use cadre_flex::Rect;

use crate::config::FrameConfig;
use crate::sizing::Sizing;

/// Each child at its own offset plus leading margins, at its clamped size.
pub fn calculate(container: &Rect, children: &[&FrameConfig]) -> Vec<Rect> {
    let (width, height) = (Some(container.width), Some(container.height));
    children
        .iter()
        .map(|child| {
            let sizing = Sizing::resolve(child, width, height);
            let margin = child.margin.value();
            let x = child.x.value().resolve(width).unwrap_or(0.0)
                + margin.left.resolve(width).unwrap_or(0.0);
            let y = child.y.value().resolve(height).unwrap_or(0.0)
                + margin.top.resolve(width).unwrap_or(0.0);
            Rect::new(x, y, sizing.clamped_width(), sizing.clamped_height())
        })
        .collect()
}
