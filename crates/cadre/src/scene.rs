//! JSON scene descriptions: a frame tree plus a script of mutations.

use core::fmt;
use std::collections::BTreeMap;
use std::error::Error;

use cadre_frame::{FrameConfig, FrameError, FrameId, FrameTree, LayoutKind, Length, Rect};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// A frame and its children, named so mutations can refer to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub config: FrameConfig,
    #[serde(default)]
    pub layout: LayoutKind,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

/// One scripted change to a loaded scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    SetWidth { target: String, value: Length },
    SetHeight { target: String, value: Length },
    SetGrow { target: String, value: f64 },
    SetShrink { target: String, value: f64 },
    /// Replace the whole configuration of a frame.
    Configure { target: String, config: FrameConfig },
    SetLayout { target: String, layout: LayoutKind },
    /// Build `node` and insert it under `parent`, appending when `index` is absent.
    Insert {
        parent: String,
        #[serde(default)]
        index: Option<usize>,
        node: NodeSpec,
    },
    /// Detach `target` and drop its subtree.
    Remove { target: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub root: NodeSpec,
    #[serde(default)]
    pub mutations: Vec<Mutation>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    UnknownFrame(String),
    DuplicateName(String),
    /// Removing a frame that has no parent.
    Detached(String),
    Frame(FrameError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFrame(name) => write!(formatter, "no frame named '{name}'"),
            Self::DuplicateName(name) => write!(formatter, "frame name '{name}' is used twice"),
            Self::Detached(name) => write!(formatter, "frame '{name}' has no parent"),
            Self::Frame(error) => write!(formatter, "{error}"),
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Frame(error) => Some(error),
            Self::UnknownFrame(_) | Self::DuplicateName(_) | Self::Detached(_) => None,
        }
    }
}

impl From<FrameError> for SceneError {
    fn from(error: FrameError) -> Self {
        Self::Frame(error)
    }
}

/// One line of a scene listing.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub name: String,
    pub depth: usize,
    /// Relative to the parent frame.
    pub rect: Rect,
}

/// A scene built into a live [`FrameTree`].
#[derive(Debug)]
pub struct LoadedScene {
    tree: FrameTree,
    root: FrameId,
    frames: BTreeMap<String, FrameId>,
    names: BTreeMap<FrameId, String>,
}

impl LoadedScene {
    /// Create every frame of `scene` and attach it under its parent.
    ///
    /// # Errors
    /// [`SceneError::DuplicateName`] when two frames share a name, and any
    /// structural or configuration [`FrameError`].
    pub fn build(scene: &Scene) -> Result<Self, SceneError> {
        let node = &scene.root;
        let mut tree = FrameTree::new();
        let root = tree.create(node.config.clone(), node.layout)?;
        let mut loaded = Self {
            tree,
            root,
            frames: BTreeMap::new(),
            names: BTreeMap::new(),
        };
        loaded.register(root, node)?;
        info!(
            target: "cadre::scene",
            "[SCENE] built '{}' with {} frames",
            node.name,
            loaded.frames.len()
        );
        Ok(loaded)
    }

    pub const fn tree(&self) -> &FrameTree {
        &self.tree
    }

    pub const fn tree_mut(&mut self) -> &mut FrameTree {
        &mut self.tree
    }

    pub const fn root(&self) -> FrameId {
        self.root
    }

    /// # Errors
    /// [`SceneError::UnknownFrame`] if no live frame carries `name`.
    pub fn frame(&self, name: &str) -> Result<FrameId, SceneError> {
        self.frames
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::UnknownFrame(name.to_owned()))
    }

    /// Current rectangle of the named frame.
    ///
    /// # Errors
    /// [`SceneError::UnknownFrame`], or the recompute error.
    pub fn rect(&mut self, name: &str) -> Result<Rect, SceneError> {
        let id = self.frame(name)?;
        Ok(self.tree.rect(id)?)
    }

    /// Apply one scripted mutation. Returns whether anything changed.
    ///
    /// # Errors
    /// [`SceneError::UnknownFrame`] for an unknown target, or the tree's error.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<bool, SceneError> {
        debug!(target: "cadre::scene", "[SCENE] apply {mutation:?}");
        let changed = match mutation {
            Mutation::SetWidth { target, value } => {
                let id = self.frame(target)?;
                self.tree.set_width(id, *value)?
            }
            Mutation::SetHeight { target, value } => {
                let id = self.frame(target)?;
                self.tree.set_height(id, *value)?
            }
            Mutation::SetGrow { target, value } => {
                let id = self.frame(target)?;
                self.tree.set_grow(id, *value)?
            }
            Mutation::SetShrink { target, value } => {
                let id = self.frame(target)?;
                self.tree.set_shrink(id, *value)?
            }
            Mutation::Configure { target, config } => {
                let id = self.frame(target)?;
                self.tree.configure(id, |current| {
                    if *current == *config {
                        return false;
                    }
                    current.clone_from(config);
                    true
                })?
            }
            Mutation::SetLayout { target, layout } => {
                let id = self.frame(target)?;
                self.tree.set_layout(id, *layout)?
            }
            Mutation::Insert {
                parent,
                index,
                node,
            } => {
                let container = self.frame(parent)?;
                let child = self.create(node)?;
                let inserted = match index {
                    Some(position) => self.tree.insert(container, child, *position),
                    None => self.tree.append(container, child),
                };
                if let Err(error) = inserted {
                    self.forget(child)?;
                    self.tree.discard(child)?;
                    return Err(error.into());
                }
                true
            }
            Mutation::Remove { target } => {
                let id = self.frame(target)?;
                let parent = self
                    .tree
                    .parent(id)?
                    .ok_or_else(|| SceneError::Detached(target.clone()))?;
                self.tree.remove(parent, id)?;
                self.forget(id)?;
                self.tree.discard(id)?;
                true
            }
        };
        Ok(changed)
    }

    /// Every frame in depth-first order, recomputing what is dirty.
    ///
    /// # Errors
    /// The recompute error of the root.
    pub fn snapshot(&mut self) -> Result<Vec<FrameSnapshot>, SceneError> {
        let mut listing = Vec::with_capacity(self.frames.len());
        let mut worklist = vec![(self.root, 0_usize)];
        while let Some((id, depth)) = worklist.pop() {
            let rect = self.tree.rect(id)?;
            let name = self.names.get(&id).cloned().unwrap_or_else(|| id.to_string());
            listing.push(FrameSnapshot { name, depth, rect });
            let children = self.tree.children(id)?;
            worklist.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(listing)
    }

    /// Build `node` as a detached subtree and return its root.
    ///
    /// On error nothing of the subtree stays in the tree or the name maps.
    fn create(&mut self, node: &NodeSpec) -> Result<FrameId, SceneError> {
        if self.frames.contains_key(&node.name) {
            return Err(SceneError::DuplicateName(node.name.clone()));
        }
        let id = self.tree.create(node.config.clone(), node.layout)?;
        if let Err(error) = self.register(id, node) {
            self.forget(id)?;
            self.tree.discard(id)?;
            return Err(error);
        }
        Ok(id)
    }

    /// Name `id` after `node` and build its children under it.
    fn register(&mut self, id: FrameId, node: &NodeSpec) -> Result<(), SceneError> {
        self.frames.insert(node.name.clone(), id);
        self.names.insert(id, node.name.clone());
        for child in &node.children {
            let child_id = self.create(child)?;
            self.tree.append(id, child_id)?;
        }
        Ok(())
    }

    fn forget(&mut self, id: FrameId) -> Result<(), SceneError> {
        let mut worklist = vec![id];
        while let Some(node) = worklist.pop() {
            if let Some(name) = self.names.remove(&node) {
                self.frames.remove(&name);
            }
            worklist.extend(self.tree.children(node)?);
        }
        Ok(())
    }
}
