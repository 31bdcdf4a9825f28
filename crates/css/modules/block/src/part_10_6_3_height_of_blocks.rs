//! Spec: CSS 2.2 §10.6.3 Block-level non-replaced elements in normal flow when 'overflow'
//! computes to 'visible', and §10.6.4 for absolutely positioned children.
//! Stacking of block children and the content-based height of the container.

use css_box::{AbsoluteAxis, MaybeMath, Point, Rect, Size};
use css_core::{
    BoxSizes, Layout, LayoutInput, LayoutOutput, LayoutPartialTree, LayoutPartialTreeExt, NodeId,
    RunMode, SizingMode, compute_content_size_contribution,
};
use css_orchestrator::{Display, Overflow, Position};
use css_position::{AbsoluteContext, layout_absolute_child, relative_offset};
use css_sizing::AvailableSpace;
use css_values_units::{LengthPercentageAuto, MaybeResolve};
use log::trace;

use crate::widths::{resolve_horizontal_margins, used_border_box_width};

/// Container-level inputs resolved by the caller.
pub struct BlockContainer {
    /// Border-box sizes fixed by the parent or the container's own style.
    pub known: Size<Option<f32>>,
    pub min_size: Size<Option<f32>>,
    pub max_size: Size<Option<f32>>,
    pub sizes: BoxSizes,
    /// Space offered for the container's width when it is not known.
    pub available_width: AvailableSpace,
    pub run_mode: RunMode,
}

/// An in-flow child and its resolved box model.
struct BlockItem {
    /// Child node.
    node: NodeId,
    /// Index in the parent's child list.
    order: u32,
    /// Border-box size from style, clamped by min/max.
    size: Size<Option<f32>>,
    min_size: Size<Option<f32>>,
    max_size: Size<Option<f32>>,
    /// Margins with `auto` as `None`.
    margin: Rect<Option<f32>>,
    overflow: Point<Overflow>,
}

/// What a child of a block container turned out to be.
enum BlockChild {
    InFlow(BlockItem),
    Absolute { node: NodeId, order: u32 },
    Hidden { node: NodeId, order: u32 },
}

fn collect_children<Tree: LayoutPartialTree + ?Sized>(
    tree: &Tree,
    node: NodeId,
    inner_size: Size<Option<f32>>,
) -> Vec<BlockChild> {
    tree.children(node)
        .iter()
        .enumerate()
        .map(|(index, &child)| {
            let order = index as u32;
            let style = tree.style(child);
            if style.display == Display::None {
                return BlockChild::Hidden { node: child, order };
            }
            if style.position == Position::Absolute {
                return BlockChild::Absolute { node: child, order };
            }
            let sizes = BoxSizes::resolve(style, inner_size);
            BlockChild::InFlow(BlockItem {
                node: child,
                order,
                size: sizes.clamped_size(),
                min_size: sizes.min_size,
                max_size: sizes.max_size,
                margin: style.margin.map(|side| match side {
                    LengthPercentageAuto::Auto => None,
                    LengthPercentageAuto::Length(_) | LengthPercentageAuto::Percent(_) => {
                        Some(side.maybe_resolve(inner_size.width).unwrap_or(0.0))
                    }
                }),
                overflow: style.overflow,
            })
        })
        .collect()
}

/// Widest in-flow child (margin box) when the container's own width is unknown.
fn widest_child<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    children: &[BlockChild],
    available_width: AvailableSpace,
) -> f32 {
    let available = Size {
        width: available_width,
        height: AvailableSpace::MinContent,
    };
    children
        .iter()
        .filter_map(|child| match child {
            BlockChild::InFlow(item) => Some(item),
            BlockChild::Absolute { .. } | BlockChild::Hidden { .. } => None,
        })
        .map(|item| {
            let width = item.size.width.unwrap_or_else(|| {
                tree.measure_child_size(
                    item.node,
                    item.size,
                    Size::NONE,
                    available,
                    SizingMode::InherentSize,
                    AbsoluteAxis::Horizontal,
                )
            });
            width + item.margin.left.unwrap_or(0.0) + item.margin.right.unwrap_or(0.0)
        })
        .fold(0.0, f32::max)
}

/// Stack the children of a block container and size the container.
pub fn layout_block_children<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    node: NodeId,
    container: &BlockContainer,
) -> LayoutOutput {
    let sizes = &container.sizes;
    let inset = sizes.content_box_inset();
    let inner_known = container.known.maybe_sub(inset.sum_axes());
    let children = collect_children(tree, node, inner_known);

    let outer_width = container.known.width.unwrap_or_else(|| {
        let available = container
            .available_width
            .maybe_sub(inset.horizontal_axis_sum());
        (widest_child(tree, &children, available) + inset.horizontal_axis_sum())
            .maybe_clamp(container.min_size.width, container.max_size.width)
    });
    let inner_width = (outer_width - inset.horizontal_axis_sum()).max(0.0);
    let child_parent_size = Size {
        width: Some(inner_width),
        height: inner_known.height,
    };
    let child_available = Size {
        width: AvailableSpace::Definite(inner_width),
        height: AvailableSpace::MinContent,
    };
    let perform = container.run_mode == RunMode::PerformLayout;

    let mut cursor_y = inset.top;
    let mut first_baseline = None;
    let mut content_size = Size::ZERO;
    let mut absolute_children = Vec::new();

    for child in &children {
        let item = match child {
            BlockChild::InFlow(item) => item,
            BlockChild::Absolute { node: child_node, order } => {
                absolute_children.push((*child_node, *order, cursor_y));
                continue;
            }
            BlockChild::Hidden { node: child_node, order } => {
                if perform {
                    tree.compute_child_layout(*child_node, LayoutInput::HIDDEN);
                    tree.set_unrounded_layout(*child_node, &Layout::with_order(*order));
                }
                continue;
            }
        };

        let width = used_border_box_width(
            item.size.width,
            item.min_size.width,
            item.max_size.width,
            inner_width,
            item.margin.left,
            item.margin.right,
        );
        let known = Size {
            width: Some(width),
            height: item.size.height,
        };
        let output = if perform {
            tree.perform_child_layout(
                item.node,
                known,
                child_parent_size,
                child_available,
                SizingMode::InherentSize,
            )
        } else {
            tree.measure_child(
                item.node,
                known,
                child_parent_size,
                child_available,
                SizingMode::InherentSize,
            )
        };
        let margins = resolve_horizontal_margins(
            output.size.width,
            inner_width,
            item.margin.left,
            item.margin.right,
        );
        let margin_top = item.margin.top.unwrap_or(0.0);
        let margin_bottom = item.margin.bottom.unwrap_or(0.0);
        let static_location = Point {
            x: inset.left + margins.left,
            y: cursor_y + margin_top,
        };

        if first_baseline.is_none() {
            first_baseline =
                Some(static_location.y + output.first_baselines.y.unwrap_or(output.size.height));
        }

        if perform {
            let offset = relative_offset(tree.style(item.node), child_parent_size);
            let location = Point {
                x: static_location.x + offset.x,
                y: static_location.y + offset.y,
            };
            let child_sizes = BoxSizes::resolve(tree.style(item.node), child_parent_size);
            tree.set_unrounded_layout(
                item.node,
                &Layout {
                    order: item.order,
                    location,
                    size: output.size,
                    content_size: output.content_size,
                    scrollbar_size: child_sizes.scrollbar_size(),
                    border: child_sizes.border,
                    padding: child_sizes.padding,
                },
            );
            content_size = content_size.f32_max(compute_content_size_contribution(
                location,
                output.size,
                output.content_size,
                item.overflow,
            ));
        }
        trace!(
            target: "css::block",
            "[BLOCK CHILD] child={} y={} size={:?} margins=({}, {}, {margin_top}, {margin_bottom})",
            item.node,
            static_location.y,
            output.size,
            margins.left,
            margins.right
        );
        cursor_y = static_location.y + output.size.height + margin_bottom;
    }

    let content_height = cursor_y + inset.bottom;
    let outer_height = container.known.height.unwrap_or_else(|| {
        content_height.maybe_clamp(container.min_size.height, container.max_size.height)
    });
    let size = Size {
        width: outer_width,
        height: outer_height,
    }
    .f32_max(sizes.padding_border().sum_axes());

    if perform {
        let context = AbsoluteContext::padding_box(
            size,
            sizes.border,
            sizes.padding,
            sizes.scrollbar_size(),
        );
        for (child, order, static_y) in absolute_children {
            let child_context = AbsoluteContext {
                static_origin: Point {
                    x: context.static_origin.x,
                    y: static_y,
                },
                ..context
            };
            let contribution = layout_absolute_child(tree, child, order, &child_context);
            content_size = content_size.f32_max(contribution);
        }
        content_size.width += sizes.padding.right;
        content_size.height += sizes.padding.bottom;
    }

    LayoutOutput {
        size,
        content_size,
        first_baselines: Point {
            x: None,
            y: first_baseline,
        },
    }
}
