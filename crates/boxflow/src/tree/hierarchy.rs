//! Parent/child links.
//!
//! Every operation validates all handles, bounds and cycles before it touches the tree, so a
//! failed call leaves the tree as it was.

use css_core::NodeId;
use log::trace;

use super::LayoutTree;
use crate::error::{LayoutError, LayoutResult};

impl LayoutTree {
    /// Append `child` to the children of `parent`, moving it from its old parent if it has one.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] for stale handles and
    /// [`LayoutError::CycleAttempted`] if `child` is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> LayoutResult<()> {
        self.check_adoption(parent, child)?;
        self.detach_from_parent(child);
        self.arena.node_mut(parent)?.children.push(child);
        self.arena.node_mut(child)?.parent = Some(parent);
        self.arena.mark_dirty(parent);
        trace!(target: "boxflow::tree", "add_child: {parent} <- {child}");
        Ok(())
    }

    /// Insert `child` before the child currently at `index`; `index == child_count` appends.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`], [`LayoutError::CycleAttempted`], or
    /// [`LayoutError::ChildIndexOutOfBounds`] if `index` is past the end.
    pub fn insert_child_at_index(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> LayoutResult<()> {
        self.check_adoption(parent, child)?;
        let already_child = self.arena.node(child)?.parent == Some(parent);
        let child_count = self.arena.node(parent)?.children.len() - usize::from(already_child);
        if index > child_count {
            return Err(LayoutError::ChildIndexOutOfBounds {
                parent,
                index,
                child_count,
            });
        }
        self.detach_from_parent(child);
        self.arena.node_mut(parent)?.children.insert(index, child);
        self.arena.node_mut(child)?.parent = Some(parent);
        self.arena.mark_dirty(parent);
        Ok(())
    }

    /// Replace all children of `parent`. Previous children become roots.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] or [`LayoutError::CycleAttempted`] if any of the
    /// new children is unusable, and [`LayoutError::DuplicateChild`] if a handle is listed twice.
    pub fn set_children(&mut self, parent: NodeId, children: &[NodeId]) -> LayoutResult<()> {
        for (index, &child) in children.iter().enumerate() {
            self.check_adoption(parent, child)?;
            if children.iter().take(index).any(|earlier| *earlier == child) {
                return Err(LayoutError::DuplicateChild { parent, child });
            }
        }
        let previous = core::mem::take(&mut self.arena.node_mut(parent)?.children);
        for old in previous {
            if let Some(data) = self.arena.get_mut(old) {
                data.parent = None;
            }
        }
        for &child in children {
            self.detach_from_parent(child);
            if let Some(data) = self.arena.get_mut(child) {
                data.parent = Some(parent);
            }
        }
        self.arena.node_mut(parent)?.children = children.iter().copied().collect();
        self.arena.mark_dirty(parent);
        trace!(target: "boxflow::tree", "set_children: {parent} <- {children:?}");
        Ok(())
    }

    /// Detach `child` from `parent`.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] for stale handles and [`LayoutError::NotAChild`] if
    /// `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> LayoutResult<NodeId> {
        self.arena.node(child)?;
        if !self.arena.node(parent)?.children.contains(&child) {
            return Err(LayoutError::NotAChild { parent, child });
        }
        self.detach(parent, child);
        Ok(child)
    }

    /// Detach the child at `index` and return it.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] or [`LayoutError::ChildIndexOutOfBounds`].
    pub fn remove_child_at_index(&mut self, parent: NodeId, index: usize) -> LayoutResult<NodeId> {
        let child = self.child_at_index(parent, index)?;
        self.detach(parent, child);
        Ok(child)
    }

    /// Put `child` in place of the child at `index` and return the replaced node, now a root.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`], [`LayoutError::ChildIndexOutOfBounds`], or
    /// [`LayoutError::CycleAttempted`].
    pub fn replace_child_at_index(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> LayoutResult<NodeId> {
        let old = self.child_at_index(parent, index)?;
        self.check_adoption(parent, child)?;
        if old == child {
            return Ok(old);
        }
        self.detach_from_parent(child);
        let children = &mut self.arena.node_mut(parent)?.children;
        if let Some(slot) = children.iter_mut().find(|slot| **slot == old) {
            *slot = child;
        }
        if let Some(data) = self.arena.get_mut(old) {
            data.parent = None;
        }
        self.arena.node_mut(child)?.parent = Some(parent);
        self.arena.mark_dirty(parent);
        trace!(target: "boxflow::tree", "replace_child_at_index: {parent}[{index}] {old} -> {child}");
        Ok(old)
    }

    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn children(&self, node: NodeId) -> LayoutResult<&[NodeId]> {
        Ok(&self.arena.node(node)?.children)
    }

    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn child_count(&self, node: NodeId) -> LayoutResult<usize> {
        Ok(self.arena.node(node)?.children.len())
    }

    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] or [`LayoutError::ChildIndexOutOfBounds`].
    pub fn child_at_index(&self, parent: NodeId, index: usize) -> LayoutResult<NodeId> {
        let children = &self.arena.node(parent)?.children;
        children
            .get(index)
            .copied()
            .ok_or(LayoutError::ChildIndexOutOfBounds {
                parent,
                index,
                child_count: children.len(),
            })
    }

    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn parent(&self, node: NodeId) -> LayoutResult<Option<NodeId>> {
        Ok(self.arena.node(node)?.parent)
    }

    fn check_adoption(&self, parent: NodeId, child: NodeId) -> LayoutResult<()> {
        self.arena.node(parent)?;
        self.arena.node(child)?;
        if self.arena.is_ancestor_or_self(child, parent) {
            return Err(LayoutError::CycleAttempted { parent, child });
        }
        Ok(())
    }

    fn detach_from_parent(&mut self, child: NodeId) {
        if let Some(parent) = self.arena.get(child).and_then(|data| data.parent) {
            self.detach(parent, child);
        }
    }

    /// Unlink `child` from `parent` and mark `parent` dirty. Handles are already validated.
    pub(super) fn detach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(data) = self.arena.get_mut(parent) {
            data.children.retain(|existing| *existing != child);
        }
        if let Some(data) = self.arena.get_mut(child) {
            data.parent = None;
        }
        self.arena.mark_dirty(parent);
        trace!(target: "boxflow::tree", "detach: {parent} -/- {child}");
    }
}
