//! Layout strategies placing a container's children.

mod absolute;
mod flex;

use cadre_flex::Rect;
use serde::{Deserialize, Serialize};

use crate::config::{FlexConfig, FrameConfig};
use crate::error::FrameError;

/// What a structural change invalidates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Invalidation {
    /// Nothing beyond the change itself.
    None,
    /// The inserted or removed child's subtree.
    Child,
    /// The container, and with it every child.
    Container,
}

/// A strategy that places the children of a container.
pub trait Layout {
    /// Invalidation caused by inserting a child at `index`.
    fn insert(&self, index: usize) -> Invalidation;

    /// Invalidation caused by removing the child at `index`.
    fn remove(&self, index: usize) -> Invalidation;

    /// Rectangles for `children`, relative to the container's origin.
    ///
    /// # Errors
    /// Returns [`FrameError::Track`] when a ratio reaching the resolvers is invalid.
    fn calculate(&self, container: &Rect, children: &[&FrameConfig])
    -> Result<Vec<Rect>, FrameError>;
}

/// The layout of a frame, chosen at construction.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutKind {
    Flex(FlexConfig),
    /// Children positioned by their own `x`/`y`, independent of each other.
    #[default]
    Absolute,
}

impl LayoutKind {
    pub fn flex() -> Self {
        Self::Flex(FlexConfig::default())
    }
}

impl Layout for LayoutKind {
    fn insert(&self, _index: usize) -> Invalidation {
        Invalidation::Child
    }

    fn remove(&self, _index: usize) -> Invalidation {
        match self {
            // Siblings shift into the freed space.
            Self::Flex(_) => Invalidation::Container,
            Self::Absolute => Invalidation::None,
        }
    }

    fn calculate(
        &self,
        container: &Rect,
        children: &[&FrameConfig],
    ) -> Result<Vec<Rect>, FrameError> {
        match self {
            Self::Flex(config) => flex::calculate(config, container, children),
            Self::Absolute => Ok(absolute::calculate(container, children)),
        }
    }
}
