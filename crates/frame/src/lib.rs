//! Retained frame tree with lazily recomputed rectangles.
//!
//! Frames own a [`FrameConfig`] and a [`LayoutKind`] that places their
//! children. Mutations mark the affected region dirty; reading a rectangle
//! recomputes only that region, top-down.

mod config;
mod error;
mod layout;
mod length;
mod property;
mod sizing;
mod tree;

pub use cadre_flex::{Axis, Distribution, FlexWrap, Rect};
pub use config::{FlexConfig, FrameConfig, default_config};
pub use error::FrameError;
pub use layout::{Invalidation, Layout, LayoutKind};
pub use length::{AspectRatio, Edges, Length};
pub use property::Property;
pub use sizing::root_rect;
pub use tree::{DirtyState, FrameId, FrameTree, UpdateHook};
