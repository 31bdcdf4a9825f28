//! Flex Layout Algorithm
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! ```text
//! 1. container sizes      (chapter 5)
//! 2. collect items        (chapter 6)
//! 3. flex base sizes      base_size
//! 4. break lines          line_breaking
//!    container main size  main_size
//! 5. flexible lengths     flexible_lengths
//! 6. item cross sizes     cross_size
//! 7. line cross sizes     cross_size + baselines (chapter 8)
//! 8. align-content        (chapter 8)
//! 9. stretch / align-self cross_size + (chapter 8)
//! 10. justify-content     (chapter 8)
//! 11. absolute children   final_layout
//! 12. final positions     final_layout
//! ```

mod base_size;
mod cross_size;
mod final_layout;
mod flexible_lengths;
mod line_breaking;
mod main_size;

#[cfg(test)]
mod tests;

pub use base_size::{determine_available_space, determine_flex_base_sizes};
pub use cross_size::{
    calculate_line_cross_sizes, determine_container_cross_size,
    determine_hypothetical_cross_sizes, determine_used_cross_sizes,
};
pub use final_layout::{final_layout_pass, layout_absolute_children, layout_hidden_children};
pub use flexible_lengths::resolve_flexible_lengths;
pub use line_breaking::{FlexLine, collect_flex_lines};
pub use main_size::determine_container_main_size;

use css_box::{MaybeMath, Point, Size};
use css_core::{
    BoxSizes, LayoutInput, LayoutOutput, LayoutPartialTree, NodeId, RunMode, SizingMode,
};
use css_sizing::min_max_definite_size;
use css_values_units::{LengthPercentage, ResolveOrZero};
use log::debug;

use crate::chapter5::FlexContainer;
use crate::chapter6::collect_flex_items;
use crate::chapter8::{
    align_items_in_lines, align_lines, compute_item_baselines, container_first_baseline,
    distribute_remaining_free_space, stretch_lines,
};

/// Lay out `node` as a flex container.
///
/// Under [`RunMode::ComputeSize`] only the container's size is produced; under
/// [`RunMode::PerformLayout`] every child's layout is written through the tree as well.
pub fn compute_flexbox_layout<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    node: NodeId,
    inputs: LayoutInput,
) -> LayoutOutput {
    let LayoutInput {
        known_dimensions,
        parent_size,
        sizing_mode,
        run_mode,
        ..
    } = inputs;
    let style = tree.style(node);
    let sizes = BoxSizes::resolve(style, parent_size);

    // Phase 1: the container's own size, as far as style alone fixes it.
    let (min_size, max_size, clamped_style_size) = match sizing_mode {
        SizingMode::InherentSize => (sizes.min_size, sizes.max_size, sizes.clamped_size()),
        SizingMode::ContentSize => (Size::NONE, Size::NONE, Size::NONE),
    };
    let known = known_dimensions
        .or(min_max_definite_size(min_size, max_size).or(clamped_style_size))
        .maybe_max(sizes.padding_border().sum_axes());

    if run_mode == RunMode::ComputeSize
        && let (Some(width), Some(height)) = (known.width, known.height)
    {
        return LayoutOutput::from_outer_size(Size { width, height });
    }

    let container = FlexContainer::resolve(style, sizes, known, min_size, max_size);
    let gap_style = style.gap;
    let output = layout_flex_container(tree, node, container, gap_style, inputs, known);
    debug!(
        target: "css::flexbox::lines",
        "[FLEX] node={node} mode={run_mode:?} known={known:?} -> {:?}",
        output.size
    );
    output
}

fn layout_flex_container<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    node: NodeId,
    mut container: FlexContainer,
    gap_style: Size<LengthPercentage>,
    inputs: LayoutInput,
    known: Size<Option<f32>>,
) -> LayoutOutput {
    let axis = container.main_axis;

    // Phases 2-3.
    let mut items = collect_flex_items(tree, node, &container);
    let available_space = determine_available_space(known, inputs.available_space, &container);
    determine_flex_base_sizes(tree, &container, available_space, &mut items);

    // Phase 4 and the container's main size.
    let mut lines = collect_flex_lines(&items, &container, available_space.main(axis));
    if let Some(inner_main) = container.node_inner_size.main(axis) {
        container.set_main_size(inner_main + container.content_box_inset.main_axis_sum(axis));
    } else {
        determine_container_main_size(tree, &mut container, available_space, &lines, &mut items);
        // Percentage gaps resolve now that the main size is known.
        let inner_main = container.inner_container_size.main(axis);
        container
            .gap
            .set_main(axis, gap_style.main(axis).resolve_or_zero(Some(inner_main)));
    }

    // Phase 5.
    let inner_main = container.inner_container_size.main(axis);
    let main_gap = container.main_gap();
    for line in &lines {
        resolve_flexible_lengths(line.items_mut(&mut items), axis, main_gap, inner_main);
    }

    // Phases 6-9 (sizing).
    let known_cross = known.cross(axis);
    determine_hypothetical_cross_sizes(tree, &container, available_space, &mut items);
    compute_item_baselines(tree, &container, available_space, &lines, &mut items);
    calculate_line_cross_sizes(&mut lines, &items, &container, known_cross);
    stretch_lines(&mut lines, &container, known_cross);
    determine_used_cross_sizes(&lines, &mut items, &container);

    // Phases 9-10 (placement within lines).
    distribute_remaining_free_space(&lines, &mut items, &container);
    align_items_in_lines(&lines, &mut items, &container);

    let total_line_cross = determine_container_cross_size(&lines, &mut container, known_cross);
    if inputs.run_mode == RunMode::ComputeSize {
        return LayoutOutput::from_outer_size(container.container_size);
    }

    // Phases 8, 11, 12.
    align_lines(&mut lines, &container, total_line_cross);
    let inflow_content = final_layout_pass(tree, &lines, &mut items, &container);
    let absolute_content = layout_absolute_children(tree, node, &container);
    layout_hidden_children(tree, node);

    LayoutOutput {
        size: container.container_size,
        content_size: inflow_content.f32_max(absolute_content),
        first_baselines: Point {
            x: None,
            y: container_first_baseline(&lines, &items, &container),
        },
    }
}
