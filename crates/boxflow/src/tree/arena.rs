//! Generational slot storage for nodes.

use css_core::{Cache, Layout, NodeId};
use css_orchestrator::Style;
use smallvec::SmallVec;

use crate::error::{LayoutError, LayoutResult};
use crate::measure::MeasureFunction;

/// Child lists rarely outgrow a handful of entries.
pub type ChildList = SmallVec<NodeId, 4>;

#[derive(Debug)]
pub struct NodeData {
    pub style: Style,
    pub children: ChildList,
    pub parent: Option<NodeId>,
    pub measure: Option<MeasureFunction>,
    pub cache: Cache,
    /// Output of the last layout run, before rounding.
    pub unrounded_layout: Layout,
    /// What embedders read: rounded when the tree rounds.
    pub final_layout: Layout,
    pub dirty: bool,
}

impl NodeData {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            children: ChildList::new(),
            parent: None,
            measure: None,
            cache: Cache::new(),
            unrounded_layout: Layout::ZERO,
            final_layout: Layout::ZERO,
            dirty: true,
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

/// Nodes indexed by [`NodeId`]; a freed slot bumps its generation so old handles go stale.
#[derive(Debug, Default)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl NodeArena {
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free.pop()
            && let Some(slot) = self.slots.get_mut(index as usize)
        {
            slot.data = Some(data);
            return NodeId::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            data: Some(data),
        });
        NodeId::new(index, 0)
    }

    #[inline]
    pub fn get(&self, node: NodeId) -> Option<&NodeData> {
        self.slots
            .get(node.index())
            .filter(|slot| slot.generation == node.generation())
            .and_then(|slot| slot.data.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        self.slots
            .get_mut(node.index())
            .filter(|slot| slot.generation == node.generation())
            .and_then(|slot| slot.data.as_mut())
    }

    /// Like [`Self::get`], but a stale handle is an error.
    pub fn node(&self, node: NodeId) -> LayoutResult<&NodeData> {
        self.get(node).ok_or(LayoutError::InvalidHandle(node))
    }

    pub fn node_mut(&mut self, node: NodeId) -> LayoutResult<&mut NodeData> {
        self.get_mut(node).ok_or(LayoutError::InvalidHandle(node))
    }

    #[cfg(test)]
    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Free the slot of `node` and return what it held.
    pub fn take(&mut self, node: NodeId) -> Option<NodeData> {
        let slot = self
            .slots
            .get_mut(node.index())
            .filter(|slot| slot.generation == node.generation())?;
        let data = slot.data.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(node.index() as u32);
        self.live -= 1;
        Some(data)
    }

    /// Free every slot. Handles handed out before stay stale.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.data.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        self.live = 0;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.live
    }

    pub fn live_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.data
                .as_ref()
                .map(|_| NodeId::new(index as u32, slot.generation))
        })
    }

    /// Flag `node` and all of its ancestors dirty and drop their cached measurements.
    pub fn mark_dirty(&mut self, node: NodeId) {
        let mut current = Some(node);
        while let Some(id) = current {
            let Some(data) = self.get_mut(id) else {
                break;
            };
            data.dirty = true;
            data.cache.clear();
            current = data.parent;
        }
    }

    /// Whether `ancestor` is `node` itself or sits above it.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|data| data.parent);
        }
        false
    }

    /// Visit `root` and its descendants, parents before children.
    pub fn for_each_in_subtree(&mut self, root: NodeId, mut visit: impl FnMut(&mut NodeData)) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if let Some(data) = self.get_mut(node) {
                visit(data);
                stack.extend(data.children.iter().rev().copied());
            }
        }
    }
}
