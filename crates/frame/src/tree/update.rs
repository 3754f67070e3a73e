//! Top-down recompute of the dirty region.

use cadre_flex::Rect;
use indextree::{Node, NodeId};
use log::debug;
use smallvec::SmallVec;

use super::dirty::{DirtyState, Worklist};
use super::{FrameId, FrameTree};
use crate::config::FrameConfig;
use crate::error::FrameError;
use crate::layout::Layout;
use crate::sizing::root_rect;

/// Pending frames and whether each must recompute its whole subtree.
type PassWorklist = SmallVec<(NodeId, bool), 16>;

impl FrameTree {
    /// Recompute the dirty region containing `id` without reading it.
    ///
    /// The pass starts at the highest non-idle frame among `id` and its
    /// ancestors. Frames outside the dirty region keep their stored rectangle.
    ///
    /// # Errors
    /// [`FrameError::NotFound`] for an unknown frame,
    /// [`FrameError::IndefiniteRoot`] if the pass would start at a root
    /// without a definite size (the tree is left as it was), and
    /// [`FrameError::Track`] if a layout meets an invalid ratio.
    pub fn update(&mut self, id: FrameId) -> Result<(), FrameError> {
        self.node(id)?;
        let Some(top) = id
            .0
            .ancestors(&self.arena)
            .filter(|&node| !self.state_of(node).is_idle())
            .last()
        else {
            return Ok(());
        };
        let top_rect = if self.state_of(top) == DirtyState::NeedsUpdate {
            Some(self.own_rect(top)?)
        } else {
            None
        };

        self.passes_total = self.passes_total.saturating_add(1);
        self.nodes_recomputed_last = 0;
        let result = self.run_pass(top, top_rect);
        if result.is_err() {
            self.abort_pass(top);
        }
        self.nodes_recomputed_total = self
            .nodes_recomputed_total
            .saturating_add(self.nodes_recomputed_last as u64);
        debug!(
            target: "cadre::frame",
            "[FRAME-PASS] from {} recomputed={} passes={}",
            FrameId(top),
            self.nodes_recomputed_last,
            self.passes_total
        );
        result
    }

    fn run_pass(&mut self, top: NodeId, top_rect: Option<Rect>) -> Result<(), FrameError> {
        self.set_state(top, DirtyState::Updating);
        let mut worklist = PassWorklist::new();
        worklist.push((top, top_rect.is_some()));
        if let Some(rect) = top_rect {
            self.write_rect(top, rect);
            self.nodes_recomputed_last += 1;
        }
        while let Some((node, force)) = worklist.pop() {
            if node != top {
                self.set_state(node, DirtyState::Updating);
            }
            self.layout_children(node, force, &mut worklist)?;
            if node != top {
                self.settle(node);
            }
        }
        // The pass root is the last frame to leave `Updating`.
        self.settle(top);
        Ok(())
    }

    /// Place the children of `node` and queue the ones that need a visit.
    fn layout_children(
        &mut self,
        node: NodeId,
        force: bool,
        worklist: &mut PassWorklist,
    ) -> Result<(), FrameError> {
        let children: Worklist = node.children(&self.arena).collect();
        if children.is_empty() {
            return Ok(());
        }
        let relayout = force
            || children
                .iter()
                .any(|&child| self.state_of(child) == DirtyState::NeedsUpdate);
        if !relayout {
            // Idle subtrees are provably unaffected.
            for &child in &children {
                if !self.state_of(child).is_idle() {
                    worklist.push((child, false));
                }
            }
            return Ok(());
        }

        let rects = self.child_rects(node)?;
        for (&child, rect) in children.iter().zip(rects) {
            let state = self.state_of(child);
            let previous = self.stored_rect(child);
            if force || state == DirtyState::NeedsUpdate || !previous.same_size(&rect) {
                self.write_rect(child, rect);
                self.nodes_recomputed_last += 1;
                worklist.push((child, true));
            } else if previous != rect {
                // Moved but not resized: descendants are parent-relative.
                self.write_rect(child, rect);
                if state.is_idle() {
                    self.notify(child, rect);
                } else {
                    worklist.push((child, false));
                }
            } else if !state.is_idle() {
                worklist.push((child, false));
            }
        }
        Ok(())
    }

    /// The frame's own rectangle: from its config for a root, from its
    /// parent's layout otherwise.
    fn own_rect(&self, node: NodeId) -> Result<Rect, FrameError> {
        let id = FrameId(node);
        let entry = self.node(id)?;
        let Some(parent) = entry.parent() else {
            return root_rect(&entry.get().config).ok_or(FrameError::IndefiniteRoot(id));
        };
        let index = parent
            .children(&self.arena)
            .position(|child| child == node)
            .ok_or(FrameError::NotFound(id))?;
        self.child_rects(parent)?
            .get(index)
            .copied()
            .ok_or(FrameError::NotFound(id))
    }

    fn child_rects(&self, node: NodeId) -> Result<Vec<Rect>, FrameError> {
        let frame = self.frame(FrameId(node))?;
        let configs: Vec<&FrameConfig> = node
            .children(&self.arena)
            .filter_map(|child| self.arena.get(child))
            .map(|entry| &entry.get().config)
            .collect();
        frame.layout.calculate(&frame.rect, &configs)
    }

    fn stored_rect(&self, node: NodeId) -> Rect {
        self.arena
            .get(node)
            .map_or_else(Rect::default, |entry| entry.get().rect)
    }

    fn write_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(entry) = self.arena.get_mut(node) {
            entry.get_mut().rect = rect;
        }
    }

    fn settle(&mut self, node: NodeId) {
        self.set_state(node, DirtyState::Idle);
        let rect = self.stored_rect(node);
        self.notify(node, rect);
    }

    fn notify(&mut self, node: NodeId, rect: Rect) {
        if let Some(hook) = self.hook.as_mut() {
            hook(FrameId(node), rect);
        }
    }

    /// Leave a failed pass fully dirty so the next read starts over.
    fn abort_pass(&mut self, top: NodeId) {
        self.set_state(top, DirtyState::NeedsUpdate);
        self.visit_descendants(top, |state| {
            *state = DirtyState::NeedsUpdate;
            true
        });
        let parent = self.arena.get(top).and_then(Node::parent);
        if let Some(parent) = parent
            && self.state_of(parent).is_idle()
        {
            self.mark_dirty(top);
        }
    }
}
