//! The seam between layout algorithms and whatever owns the nodes.

use css_box::{AbsoluteAxis, Point, Size};
use css_orchestrator::Style;
use css_sizing::{AvailableSpace, SizingMode};

use crate::{Cache, Layout, NodeId};

/// What a layout call is asked to produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunMode {
    /// Full layout: size the node and write final layouts for its children.
    PerformLayout,
    /// Only the node's size is wanted. Children layouts are not written.
    ComputeSize,
    /// The node is inside a `display: none` subtree.
    PerformHiddenLayout,
}

/// Which dimension(s) the caller is going to read from a size query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RequestedAxis {
    Horizontal,
    Vertical,
    Both,
}

impl From<AbsoluteAxis> for RequestedAxis {
    fn from(axis: AbsoluteAxis) -> Self {
        match axis {
            AbsoluteAxis::Horizontal => Self::Horizontal,
            AbsoluteAxis::Vertical => Self::Vertical,
        }
    }
}

/// Everything a node needs to lay itself out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutInput {
    pub run_mode: RunMode,
    pub sizing_mode: SizingMode,
    pub axis: RequestedAxis,
    /// Border-box sizes already fixed by the parent.
    pub known_dimensions: Size<Option<f32>>,
    /// Percentage basis (the containing block), `None` when indefinite.
    pub parent_size: Size<Option<f32>>,
    /// Room offered by the parent for the node's margin box.
    pub available_space: Size<AvailableSpace>,
}

impl LayoutInput {
    pub const HIDDEN: Self = Self {
        run_mode: RunMode::PerformHiddenLayout,
        sizing_mode: SizingMode::InherentSize,
        axis: RequestedAxis::Both,
        known_dimensions: Size::NONE,
        parent_size: Size::NONE,
        available_space: Size {
            width: AvailableSpace::MaxContent,
            height: AvailableSpace::MaxContent,
        },
    };
}

/// Result of a layout call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutOutput {
    /// Border-box size.
    pub size: Size<f32>,
    /// Extent of in-flow and absolutely positioned content, for scroll containers.
    pub content_size: Size<f32>,
    /// First baseline per axis, measured from the border-box top/left.
    pub first_baselines: Point<Option<f32>>,
}

impl LayoutOutput {
    pub const HIDDEN: Self = Self::from_outer_size(Size::ZERO);

    #[inline]
    pub const fn from_outer_size(size: Size<f32>) -> Self {
        Self::from_sizes(size, Size::ZERO)
    }

    #[inline]
    pub const fn from_sizes(size: Size<f32>, content_size: Size<f32>) -> Self {
        Self {
            size,
            content_size,
            first_baselines: Point::NONE,
        }
    }
}

/// Access to a node tree from inside a layout algorithm.
pub trait LayoutPartialTree {
    /// Children of `node` in source order.
    fn children(&self, node: NodeId) -> &[NodeId];

    fn child_count(&self, node: NodeId) -> usize {
        self.children(node).len()
    }

    fn style(&self, node: NodeId) -> &Style;

    /// Memo of earlier layout calls for `node`.
    fn cache_mut(&mut self, node: NodeId) -> Option<&mut Cache>;

    /// Record the final (unrounded) layout of `node`.
    fn set_unrounded_layout(&mut self, node: NodeId, layout: &Layout);

    /// Lay out `node` with whichever algorithm its `display` selects.
    fn compute_child_layout(&mut self, node: NodeId, inputs: LayoutInput) -> LayoutOutput;
}

/// Shorthands over [`LayoutPartialTree::compute_child_layout`].
pub trait LayoutPartialTreeExt: LayoutPartialTree {
    /// Border-box size of a child along one axis.
    #[inline]
    fn measure_child_size(
        &mut self,
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        parent_size: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        sizing_mode: SizingMode,
        axis: AbsoluteAxis,
    ) -> f32 {
        self.compute_child_layout(
            node,
            LayoutInput {
                run_mode: RunMode::ComputeSize,
                sizing_mode,
                axis: axis.into(),
                known_dimensions,
                parent_size,
                available_space,
            },
        )
        .size
        .get(axis)
    }

    /// Border-box size of a child in both axes, without writing any layout.
    #[inline]
    fn measure_child(
        &mut self,
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        parent_size: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        sizing_mode: SizingMode,
    ) -> LayoutOutput {
        self.compute_child_layout(
            node,
            LayoutInput {
                run_mode: RunMode::ComputeSize,
                sizing_mode,
                axis: RequestedAxis::Both,
                known_dimensions,
                parent_size,
                available_space,
            },
        )
    }

    /// Full layout of a child; the caller then places it with
    /// [`LayoutPartialTree::set_unrounded_layout`].
    #[inline]
    fn perform_child_layout(
        &mut self,
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        parent_size: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        sizing_mode: SizingMode,
    ) -> LayoutOutput {
        self.compute_child_layout(
            node,
            LayoutInput {
                run_mode: RunMode::PerformLayout,
                sizing_mode,
                axis: RequestedAxis::Both,
                known_dimensions,
                parent_size,
                available_space,
            },
        )
    }
}

impl<Tree: LayoutPartialTree + ?Sized> LayoutPartialTreeExt for Tree {}
