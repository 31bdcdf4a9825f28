//! The node tree embedders build and lay out.

mod arena;
mod hierarchy;
mod style;

use css_box::{Point, Size};
use css_core::{AvailableSpace, Layout, NodeId, compute_root_layout};
use css_orchestrator::Style;
use log::{debug, warn};

use crate::compute::LayoutPass;
use crate::config::LayoutConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::measure::MeasureFunction;
use crate::round::{copy_unrounded, round_layouts};
use crate::view::LayoutView;

pub(crate) use arena::{NodeArena, NodeData};

/// Owner of every node, its style and its computed layout.
#[derive(Debug, Default)]
pub struct LayoutTree {
    arena: NodeArena,
    config: LayoutConfig,
    /// Root and available space of the last successful run.
    last_run: Option<(NodeId, Size<AvailableSpace>)>,
}

impl LayoutTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub const fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Replace the configuration. Toggling rounding invalidates every layout.
    pub fn set_config(&mut self, config: LayoutConfig) {
        let rounding_changed = config.use_rounding != self.config.use_rounding;
        self.config = config;
        if rounding_changed {
            let nodes: Vec<NodeId> = self.arena.live_nodes().collect();
            for node in nodes {
                self.arena.mark_dirty(node);
            }
            self.last_run = None;
        }
    }

    /// Create a childless node.
    pub fn new_leaf(&mut self, style: Style) -> NodeId {
        let style = sanitized(style);
        let node = self.arena.insert(NodeData::new(style));
        debug!(target: "boxflow::tree", "new_leaf: {node}");
        node
    }

    /// Create a childless node sized by `measure`.
    pub fn new_leaf_with_measure(
        &mut self,
        style: Style,
        measure: impl Into<MeasureFunction>,
    ) -> NodeId {
        let mut data = NodeData::new(sanitized(style));
        data.measure = Some(measure.into());
        let node = self.arena.insert(data);
        debug!(target: "boxflow::tree", "new_leaf_with_measure: {node}");
        node
    }

    /// Create a node adopting `children` in order.
    ///
    /// Children that already have a parent are moved.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if any child is not live and
    /// [`LayoutError::DuplicateChild`] if a child is listed twice. No node is created then.
    pub fn new_with_children(&mut self, style: Style, children: &[NodeId]) -> LayoutResult<NodeId> {
        for &child in children {
            self.arena.node(child)?;
        }
        let node = self.new_leaf(style);
        if let Err(err) = self.set_children(node, children) {
            let _discarded = self.arena.take(node);
            return Err(err);
        }
        Ok(node)
    }

    /// Free `node`. It is detached from its parent and its children become roots.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn remove(&mut self, node: NodeId) -> LayoutResult<NodeId> {
        let parent = self.arena.node(node)?.parent;
        if let Some(parent) = parent {
            self.detach(parent, node);
        }
        let data = self.arena.take(node).ok_or(LayoutError::InvalidHandle(node))?;
        for child in data.children {
            if let Some(child_data) = self.arena.get_mut(child) {
                child_data.parent = None;
            }
        }
        if self.last_run.is_some_and(|(root, _)| root == node) {
            self.last_run = None;
        }
        debug!(target: "boxflow::tree", "remove: {node} (parent={parent:?})");
        Ok(node)
    }

    /// Drop every node. All handles become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.last_run = None;
    }

    #[inline]
    pub const fn total_node_count(&self) -> usize {
        self.arena.len()
    }

    /// Attach, replace or remove the measure function of `node`.
    ///
    /// The function sizes `node` only while it has no children.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn set_measure(
        &mut self,
        node: NodeId,
        measure: Option<MeasureFunction>,
    ) -> LayoutResult<()> {
        self.arena.node_mut(node)?.measure = measure;
        self.arena.mark_dirty(node);
        Ok(())
    }

    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn has_measure(&self, node: NodeId) -> LayoutResult<bool> {
        Ok(self.arena.node(node)?.measure.is_some())
    }

    /// Flag `node` and its ancestors for re-layout.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn mark_dirty(&mut self, node: NodeId) -> LayoutResult<()> {
        self.arena.node(node)?;
        self.arena.mark_dirty(node);
        Ok(())
    }

    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn is_dirty(&self, node: NodeId) -> LayoutResult<bool> {
        Ok(self.arena.node(node)?.dirty)
    }

    /// Final layout of `node`, relative to its parent's border box.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn layout(&self, node: NodeId) -> LayoutResult<&Layout> {
        Ok(&self.arena.node(node)?.final_layout)
    }

    /// Layout of `node` before pixel rounding.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn unrounded_layout(&self, node: NodeId) -> LayoutResult<&Layout> {
        Ok(&self.arena.node(node)?.unrounded_layout)
    }

    /// Lay out the subtree of `root` within `available_space`.
    ///
    /// A clean tree asked for the same space again returns the previous result without running
    /// any algorithm.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `root` is not live, and
    /// [`LayoutError::Measure`] if a measure function failed. After a failure the layouts of the
    /// run are still written, but `root` stays dirty.
    pub fn compute_layout(
        &mut self,
        root: NodeId,
        available_space: Size<AvailableSpace>,
    ) -> LayoutResult<LayoutView> {
        let root_dirty = self.arena.node(root)?.dirty;
        if !root_dirty && self.last_run == Some((root, available_space)) {
            debug!(target: "boxflow::tree", "compute_layout: {root} is clean, reusing layout");
            return self.layout_view(root);
        }

        self.arena.for_each_in_subtree(root, |data| data.cache.clear());
        let mut pass = LayoutPass::new(&mut self.arena, self.config.measure_error_policy);
        compute_root_layout(&mut pass, root, available_space);
        let failure = pass.into_failure();

        if self.config.use_rounding {
            round_layouts(&mut self.arena, root, Point::ZERO);
        } else {
            self.arena.for_each_in_subtree(root, copy_unrounded);
        }

        if let Some(err) = failure {
            warn!(target: "boxflow::tree", "compute_layout: {root} failed: {err:#}");
            self.last_run = None;
            return Err(LayoutError::Measure(err));
        }
        self.arena.for_each_in_subtree(root, |data| data.dirty = false);
        self.last_run = Some((root, available_space));
        debug!(
            target: "boxflow::tree",
            "compute_layout: {root} avail={available_space:?} -> {:?}",
            self.arena.get(root).map(|data| data.final_layout.size)
        );
        self.layout_view(root)
    }

    /// Snapshot of the current layouts of `node` and its descendants.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidHandle`] if `node` is not live.
    pub fn layout_view(&self, node: NodeId) -> LayoutResult<LayoutView> {
        let data = self.arena.node(node)?;
        Ok(LayoutView::from_layout(
            &data.final_layout,
            data.children
                .iter()
                .filter_map(|&child| self.layout_view(child).ok())
                .collect(),
        ))
    }
}

fn sanitized(mut style: Style) -> Style {
    let replaced = style.sanitize();
    if replaced > 0 {
        warn!(target: "boxflow::tree", "style: replaced {replaced} invalid numeric values");
    }
    style
}
