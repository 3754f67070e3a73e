//! The frame tree: arena-owned frames with lazily recomputed rectangles.

mod dirty;
mod setters;
mod update;


use core::fmt;

use cadre_flex::Rect;
use indextree::{Arena, Node, NodeId};
use log::debug;

use crate::config::{FlexConfig, FrameConfig};
use crate::error::FrameError;
use crate::layout::{Invalidation, Layout, LayoutKind};

pub use dirty::DirtyState;

/// Handle to a frame inside a [`FrameTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(NodeId);

impl fmt::Display for FrameId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Callback receiving each frame whose rectangle a pass settled.
pub type UpdateHook = Box<dyn FnMut(FrameId, Rect)>;

#[derive(Debug)]
struct Frame {
    config: FrameConfig,
    layout: LayoutKind,
    /// Relative to the parent's origin.
    rect: Rect,
    state: DirtyState,
}

/// Owns every frame and recomputes rectangles on read.
///
/// Mutations only mark frames dirty. Reading a rectangle (or calling
/// [`FrameTree::update`]) recomputes the dirty region above and below the
/// frame, top-down, and leaves everything else untouched.
pub struct FrameTree {
    arena: Arena<Frame>,
    hook: Option<UpdateHook>,
    nodes_recomputed_last: usize,
    nodes_recomputed_total: u64,
    passes_total: u64,
}

impl Default for FrameTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameTree {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FrameTree")
            .field("frames", &self.arena.len())
            .field("hook", &self.hook.is_some())
            .field("passes_total", &self.passes_total)
            .finish_non_exhaustive()
    }
}

impl FrameTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            hook: None,
            nodes_recomputed_last: 0,
            nodes_recomputed_total: 0,
            passes_total: 0,
        }
    }

    /// Create a detached frame. It is a root until inserted somewhere.
    ///
    /// # Errors
    /// [`FrameError::Track`] if an item ratio of `config` or a ratio of a flex
    /// `layout` is outside `[0, 1]`; nothing is created.
    pub fn create(
        &mut self,
        config: FrameConfig,
        layout: LayoutKind,
    ) -> Result<FrameId, FrameError> {
        config.validate()?;
        if let LayoutKind::Flex(flex) = &layout {
            flex.validate()?;
        }
        let node = self.arena.new_node(Frame {
            config,
            layout,
            rect: Rect::default(),
            state: DirtyState::NeedsUpdate,
        });
        Ok(FrameId(node))
    }

    /// Whether `id` names a live frame.
    pub fn contains(&self, id: FrameId) -> bool {
        self.frame(id).is_ok()
    }

    /// Insert the detached `child` under `parent` at `index`.
    ///
    /// # Errors
    /// - [`FrameError::NotFound`] if either frame is unknown.
    /// - [`FrameError::AlreadyAttached`] if `child` has a parent.
    /// - [`FrameError::Cycle`] if `parent` lies inside `child`'s subtree.
    /// - [`FrameError::IndexOutOfBounds`] if `index` exceeds the child count.
    /// - [`FrameError::Reentrant`] during a recompute pass.
    pub fn insert(&mut self, parent: FrameId, child: FrameId, index: usize) -> Result<(), FrameError> {
        self.ensure_mutable(parent)?;
        self.ensure_mutable(child)?;
        if self.parent(child)?.is_some() {
            return Err(FrameError::AlreadyAttached(child));
        }
        if parent.0.ancestors(&self.arena).any(|node| node == child.0) {
            return Err(FrameError::Cycle);
        }
        let len = parent.0.children(&self.arena).count();
        if index > len {
            return Err(FrameError::IndexOutOfBounds { index, len });
        }
        let sibling = parent.0.children(&self.arena).nth(index);
        match sibling {
            Some(sibling) => sibling.checked_insert_before(child.0, &mut self.arena)?,
            None => parent.0.checked_append(child.0, &mut self.arena)?,
        }
        let invalidation = self.frame(parent)?.layout.insert(index);
        debug!(target: "cadre::frame", "[FRAME-INSERT] {child} under {parent} at {index}");
        self.invalidate(parent, child, invalidation);
        Ok(())
    }

    /// Insert `child` as the last child of `parent`.
    ///
    /// # Errors
    /// As [`FrameTree::insert`].
    pub fn append(&mut self, parent: FrameId, child: FrameId) -> Result<(), FrameError> {
        let len = self.children(parent)?.len();
        self.insert(parent, child, len)
    }

    /// Detach `child` from `parent`. The child becomes a root and may be
    /// inserted elsewhere or discarded.
    ///
    /// # Errors
    /// [`FrameError::NotFound`] if `child` is not a child of `parent`, and
    /// [`FrameError::Reentrant`] during a recompute pass.
    pub fn remove(&mut self, parent: FrameId, child: FrameId) -> Result<(), FrameError> {
        self.ensure_mutable(parent)?;
        let Some(index) = parent
            .0
            .children(&self.arena)
            .position(|node| node == child.0)
        else {
            return Err(FrameError::NotFound(child));
        };
        let invalidation = self.frame(parent)?.layout.remove(index);
        child.0.detach(&mut self.arena);
        debug!(target: "cadre::frame", "[FRAME-REMOVE] {child} from {parent} at {index}");
        self.invalidate(parent, child, invalidation);
        // Read as a root from now on.
        self.mark_dirty(child.0);
        Ok(())
    }

    /// Drop a detached frame and its whole subtree.
    ///
    /// # Errors
    /// [`FrameError::AlreadyAttached`] if the frame still has a parent.
    pub fn discard(&mut self, id: FrameId) -> Result<(), FrameError> {
        self.ensure_mutable(id)?;
        if self.parent(id)?.is_some() {
            return Err(FrameError::AlreadyAttached(id));
        }
        id.0.remove_subtree(&mut self.arena);
        Ok(())
    }

    /// Apply `change` to the frame's configuration and invalidate it if the
    /// closure reports a change.
    ///
    /// # Errors
    /// [`FrameError::NotFound`], [`FrameError::Reentrant`], or
    /// [`FrameError::Track`] if the change leaves an item ratio out of range
    /// (the change is rolled back).
    pub fn configure<F>(&mut self, id: FrameId, change: F) -> Result<bool, FrameError>
    where
        F: FnOnce(&mut FrameConfig) -> bool,
    {
        self.ensure_mutable(id)?;
        let frame = self.frame_mut(id)?;
        let previous = frame.config.clone();
        if !change(&mut frame.config) {
            return Ok(false);
        }
        if let Err(error) = frame.config.validate() {
            frame.config = previous;
            return Err(error.into());
        }
        self.mark_dirty(id.0);
        Ok(true)
    }

    /// Replace the frame's layout strategy.
    ///
    /// # Errors
    /// [`FrameError::Track`] for an invalid flex ratio, plus the errors of
    /// [`FrameTree::configure`].
    pub fn set_layout(&mut self, id: FrameId, layout: LayoutKind) -> Result<bool, FrameError> {
        self.ensure_mutable(id)?;
        if let LayoutKind::Flex(config) = &layout {
            config.validate()?;
        }
        let frame = self.frame_mut(id)?;
        if frame.layout == layout {
            return Ok(false);
        }
        frame.layout = layout;
        self.mark_dirty(id.0);
        Ok(true)
    }

    /// Make the frame a flex container with `config`.
    ///
    /// # Errors
    /// As [`FrameTree::set_layout`].
    pub fn set_flex(&mut self, id: FrameId, config: FlexConfig) -> Result<bool, FrameError> {
        self.set_layout(id, LayoutKind::Flex(config))
    }

    /// Recompute the dirty region containing `id` and return its rectangle.
    ///
    /// # Errors
    /// [`FrameError::NotFound`], or [`FrameError::IndefiniteRoot`] when the
    /// frame's root cannot resolve a definite size.
    pub fn rect(&mut self, id: FrameId) -> Result<Rect, FrameError> {
        self.update(id)?;
        self.cached_rect(id)
    }

    /// Rectangle as last computed, without recomputing.
    ///
    /// # Errors
    /// [`FrameError::NotFound`] for an unknown frame.
    pub fn cached_rect(&self, id: FrameId) -> Result<Rect, FrameError> {
        Ok(self.frame(id)?.rect)
    }

    /// # Errors
    /// [`FrameError::NotFound`] for an unknown frame.
    pub fn state(&self, id: FrameId) -> Result<DirtyState, FrameError> {
        Ok(self.frame(id)?.state)
    }

    /// # Errors
    /// [`FrameError::NotFound`] for an unknown frame.
    pub fn config(&self, id: FrameId) -> Result<&FrameConfig, FrameError> {
        Ok(&self.frame(id)?.config)
    }

    /// # Errors
    /// [`FrameError::NotFound`] for an unknown frame.
    pub fn layout(&self, id: FrameId) -> Result<&LayoutKind, FrameError> {
        Ok(&self.frame(id)?.layout)
    }

    /// # Errors
    /// [`FrameError::NotFound`] for an unknown frame.
    pub fn parent(&self, id: FrameId) -> Result<Option<FrameId>, FrameError> {
        let node = self.node(id)?;
        Ok(node.parent().map(FrameId))
    }

    /// # Errors
    /// [`FrameError::NotFound`] for an unknown frame.
    pub fn children(&self, id: FrameId) -> Result<Vec<FrameId>, FrameError> {
        self.node(id)?;
        Ok(id.0.children(&self.arena).map(FrameId).collect())
    }

    /// Install the callback receiving every rectangle a pass settles.
    pub fn on_updated<F>(&mut self, hook: F)
    where
        F: FnMut(FrameId, Rect) + 'static,
    {
        self.hook = Some(Box::new(hook));
    }

    /// Frames whose own box was recalculated in the last pass.
    pub const fn nodes_recomputed_last(&self) -> usize {
        self.nodes_recomputed_last
    }

    pub const fn nodes_recomputed_total(&self) -> u64 {
        self.nodes_recomputed_total
    }

    pub const fn passes_total(&self) -> u64 {
        self.passes_total
    }

    /// Stale ids of discarded frames are rejected even after their slot is reused.
    fn node(&self, id: FrameId) -> Result<&Node<Frame>, FrameError> {
        if id.0.is_removed(&self.arena) {
            return Err(FrameError::NotFound(id));
        }
        self.arena.get(id.0).ok_or(FrameError::NotFound(id))
    }

    fn frame(&self, id: FrameId) -> Result<&Frame, FrameError> {
        self.node(id).map(Node::get)
    }

    fn frame_mut(&mut self, id: FrameId) -> Result<&mut Frame, FrameError> {
        if id.0.is_removed(&self.arena) {
            return Err(FrameError::NotFound(id));
        }
        self.arena
            .get_mut(id.0)
            .map(Node::get_mut)
            .ok_or(FrameError::NotFound(id))
    }

    /// Refuse mutation while any frame from `id` up to its root is updating.
    fn ensure_mutable(&self, id: FrameId) -> Result<(), FrameError> {
        self.node(id)?;
        let updating = id
            .0
            .ancestors(&self.arena)
            .any(|node| self.state_of(node) == DirtyState::Updating);
        if updating {
            return Err(FrameError::Reentrant);
        }
        Ok(())
    }

    fn invalidate(&mut self, parent: FrameId, child: FrameId, invalidation: Invalidation) {
        match invalidation {
            Invalidation::None => {}
            Invalidation::Child => self.mark_dirty(child.0),
            Invalidation::Container => self.mark_dirty(parent.0),
        }
    }
}
