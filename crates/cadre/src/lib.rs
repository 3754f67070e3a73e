//! Cadre lays out rectangles.
//!
//! - [`track`] resolves one axis: items in sequence or stacked in one extent.
//! - [`flex`] composes two tracks into wrapping flexible-box lines.
//! - [`frame`] keeps a retained tree of frames and recomputes only what a
//!   mutation invalidated.
//! - [`scene`] loads JSON scene descriptions into a frame tree.

pub mod scene;

pub use cadre_flex as flex;
pub use cadre_frame as frame;
pub use cadre_track as track;

pub use cadre_frame::{
    FlexConfig, FrameConfig, FrameError, FrameId, FrameTree, LayoutKind, Length, Rect,
};
pub use scene::{FrameSnapshot, LoadedScene, Mutation, NodeSpec, Scene, SceneError};
