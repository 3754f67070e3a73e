use core::fmt;
use std::error::Error;

use cadre_track::TrackError;
use indextree::NodeError;

use crate::tree::FrameId;

/// Errors reported by the frame tree.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameError {
    /// Mutation while the frame's root is in the middle of a recompute pass.
    Reentrant,
    /// Unknown or discarded frame, or a frame that is not a child of the given parent.
    NotFound(FrameId),
    /// Insert position past the end of the child list.
    IndexOutOfBounds { index: usize, len: usize },
    /// The frame already has a parent.
    AlreadyAttached(FrameId),
    /// Inserting a frame under itself or one of its descendants.
    Cycle,
    /// A root frame whose width or height cannot be resolved.
    IndefiniteRoot(FrameId),
    InvalidAspectRatio { width: f64, height: f64 },
    Track(TrackError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reentrant => write!(formatter, "frame tree mutated during a recompute pass"),
            Self::NotFound(id) => write!(formatter, "frame {id} not found"),
            Self::IndexOutOfBounds { index, len } => {
                write!(formatter, "insert index {index} out of bounds for {len} children")
            }
            Self::AlreadyAttached(id) => write!(formatter, "frame {id} already has a parent"),
            Self::Cycle => write!(formatter, "a frame cannot be inserted under its own subtree"),
            Self::IndefiniteRoot(id) => {
                write!(formatter, "root frame {id} needs a definite width and height")
            }
            Self::InvalidAspectRatio { width, height } => {
                write!(formatter, "invalid aspect ratio {width}/{height}")
            }
            Self::Track(error) => write!(formatter, "track resolution failed: {error}"),
        }
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Track(error) => Some(error),
            _ => None,
        }
    }
}

impl From<TrackError> for FrameError {
    fn from(error: TrackError) -> Self {
        Self::Track(error)
    }
}

impl From<NodeError> for FrameError {
    fn from(_: NodeError) -> Self {
        Self::Cycle
    }
}
