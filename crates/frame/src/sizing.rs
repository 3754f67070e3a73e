//! Resolving a frame's lengths against its container.

use cadre_flex::Rect;
use log::warn;

use crate::config::FrameConfig;
use crate::length::Length;

/// Resolved size constraints of one frame along both axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sizing {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl Sizing {
    /// Resolve `config` against a container of `reference_width` × `reference_height`.
    ///
    /// A missing dimension is derived from the other through the aspect ratio.
    pub fn resolve(
        config: &FrameConfig,
        reference_width: Option<f64>,
        reference_height: Option<f64>,
    ) -> Self {
        let mut width = config.width.value().resolve(reference_width);
        let mut height = config.height.value().resolve(reference_height);
        if let Some(ratio) = config.aspect_ratio.value() {
            match (width, height) {
                (Some(known), None) => height = Some(ratio.height_for(known)),
                (None, Some(known)) => width = Some(ratio.width_for(known)),
                _ => {}
            }
        }
        Self {
            width,
            height,
            min_width: min_bound(config.min_width.value(), reference_width),
            min_height: min_bound(config.min_height.value(), reference_height),
            max_width: max_bound(config.max_width.value(), reference_width),
            max_height: max_bound(config.max_height.value(), reference_height),
        }
    }

    /// Width clamped into its bounds, zero when unresolved.
    pub fn clamped_width(&self) -> f64 {
        clamp(self.width.unwrap_or(0.0), self.min_width, self.max_width)
    }

    pub fn clamped_height(&self) -> f64 {
        clamp(self.height.unwrap_or(0.0), self.min_height, self.max_height)
    }
}

fn min_bound(length: Length, reference: Option<f64>) -> f64 {
    length.resolve(reference).unwrap_or(0.0).max(0.0)
}

fn max_bound(length: Length, reference: Option<f64>) -> f64 {
    length.resolve(reference).unwrap_or(f64::INFINITY)
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Rectangle of a frame without a parent, or `None` when its width or height
/// cannot be resolved without a container.
pub fn root_rect(config: &FrameConfig) -> Option<Rect> {
    let sizing = Sizing::resolve(config, None, None);
    let (Some(_), Some(_)) = (sizing.width, sizing.height) else {
        warn!(
            target: "cadre::frame",
            "[FRAME-ROOT] indefinite root size width={:?} height={:?}",
            config.width.value(),
            config.height.value()
        );
        return None;
    };
    let x = config.x.value().resolve(None).unwrap_or(0.0);
    let y = config.y.value().resolve(None).unwrap_or(0.0);
    Some(Rect::new(
        x,
        y,
        sizing.clamped_width(),
        sizing.clamped_height(),
    ))
}
