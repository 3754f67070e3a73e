//! Dirty-state marking.

use indextree::{Node, NodeId};
use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::FrameTree;

/// Recompute state of one frame.
///
/// A non-idle frame always has a non-idle parent, so the dirty region of a
/// tree is a connected set hanging from its root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DirtyState {
    /// Rectangle and subtree are current.
    #[default]
    Idle,
    /// Own rectangle is current, something below is not.
    DescendantNeedsUpdate,
    /// Own rectangle must be recomputed, and with it every descendant.
    NeedsUpdate,
    /// A recompute pass is running through this frame.
    Updating,
}

impl DirtyState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Explicit traversal stack; most containers have few children.
pub type Worklist = SmallVec<NodeId, 16>;

impl FrameTree {
    pub(super) fn state_of(&self, node: NodeId) -> DirtyState {
        self.arena
            .get(node)
            .map_or(DirtyState::Idle, |entry| entry.get().state)
    }

    pub(super) fn set_state(&mut self, node: NodeId, state: DirtyState) {
        if let Some(entry) = self.arena.get_mut(node) {
            trace!(target: "cadre::frame", "[FRAME-DIRTY] {node} {:?} -> {state:?}", entry.get().state);
            entry.get_mut().state = state;
        }
    }

    /// Mark `node` for a full recompute, flag its ancestors and its idle descendants.
    pub(super) fn mark_dirty(&mut self, node: NodeId) {
        self.set_state(node, DirtyState::NeedsUpdate);
        self.mark_ancestors_dirty(node);
        self.visit_descendants(node, |state| {
            if state.is_idle() {
                *state = DirtyState::NeedsUpdate;
                true
            } else {
                // Already marked subtrees were handled when they were marked.
                false
            }
        });
    }

    /// Flag idle ancestors up to the first one already non-idle.
    fn mark_ancestors_dirty(&mut self, node: NodeId) {
        let mut cursor = self.arena.get(node).and_then(Node::parent);
        while let Some(ancestor) = cursor {
            if !self.state_of(ancestor).is_idle() {
                break;
            }
            self.set_state(ancestor, DirtyState::DescendantNeedsUpdate);
            cursor = self.arena.get(ancestor).and_then(Node::parent);
        }
    }

    /// Walk the descendants of `root` with an explicit worklist.
    ///
    /// `should_descend` sees each frame's state, may rewrite it, and decides
    /// whether that frame's children are visited.
    pub(super) fn visit_descendants<F>(&mut self, root: NodeId, mut should_descend: F)
    where
        F: FnMut(&mut DirtyState) -> bool,
    {
        let mut worklist: Worklist = root.children(&self.arena).collect();
        while let Some(node) = worklist.pop() {
            let Some(entry) = self.arena.get_mut(node) else {
                continue;
            };
            if should_descend(&mut entry.get_mut().state) {
                worklist.extend(node.children(&self.arena));
            }
        }
    }
}
