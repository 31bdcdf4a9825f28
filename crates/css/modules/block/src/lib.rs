//! Block layout: children stacked along the block axis.
//!
//! Spec: CSS 2.2 §9.4.1 and §10 (visual formatting model details)
//! <https://www.w3.org/TR/CSS22/visuren.html#block-formatting>
//!
//! Margins do not collapse: each child's outer (margin-box) height is stacked below the previous
//! one. Horizontal sizes and margins follow §10.3.3.

#[path = "part_10_3_3_block_widths.rs"]
mod widths;

#[path = "part_10_6_3_height_of_blocks.rs"]
mod heights;

use css_box::{MaybeMath, Size};
use css_core::{BoxSizes, LayoutInput, LayoutOutput, LayoutPartialTree, NodeId, RunMode, SizingMode};
use css_sizing::min_max_definite_size;
use log::debug;

pub use widths::{HorizontalMargins, resolve_horizontal_margins, used_border_box_width};

/// Lay out `node` as a block container.
pub fn compute_block_layout<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    node: NodeId,
    inputs: LayoutInput,
) -> LayoutOutput {
    let LayoutInput {
        known_dimensions,
        parent_size,
        available_space,
        sizing_mode,
        run_mode,
        ..
    } = inputs;
    let sizes = BoxSizes::resolve(tree.style(node), parent_size);

    let (min_size, max_size, clamped_style_size) = match sizing_mode {
        SizingMode::InherentSize => (sizes.min_size, sizes.max_size, sizes.clamped_size()),
        SizingMode::ContentSize => (Size::NONE, Size::NONE, Size::NONE),
    };
    // Blocks stretch to the available width when it is definite.
    let fill_available = Size {
        width: available_space
            .width
            .into_option()
            .maybe_sub(sizes.margin.horizontal_axis_sum()),
        height: None,
    };
    let known = known_dimensions
        .or(min_max_definite_size(min_size, max_size))
        .or(clamped_style_size)
        .or(fill_available)
        .maybe_max(sizes.padding_border().sum_axes());

    if run_mode == RunMode::ComputeSize
        && let (Some(width), Some(height)) = (known.width, known.height)
    {
        return LayoutOutput::from_outer_size(Size { width, height });
    }

    let output = heights::layout_block_children(
        tree,
        node,
        &heights::BlockContainer {
            known,
            min_size,
            max_size,
            sizes,
            available_width: available_space.width,
            run_mode,
        },
    );
    debug!(
        target: "css::block",
        "[BLOCK] node={node} mode={run_mode:?} known={known:?} -> {:?}",
        output.size
    );
    output
}
