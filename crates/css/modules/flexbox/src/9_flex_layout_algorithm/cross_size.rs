//! Cross size determination.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-sizing>

use css_box::{MaybeMath, Size};
use css_core::{LayoutPartialTree, LayoutPartialTreeExt};
use css_orchestrator::AlignItems;
use css_sizing::{AvailableSpace, SizingMode, transferred_size};

use super::line_breaking::FlexLine;
use crate::chapter5::{FlexContainer, sum_axis_gaps};
use crate::chapter6::FlexItem;
use crate::chapter8::{baseline_adjusted_outer_cross, line_max_baseline};

/// Phase 6: hypothetical cross size of each item at its resolved main size.
///
/// A definite styled cross size (or one transferred through the aspect ratio from the main size)
/// wins; otherwise the item is measured.
pub fn determine_hypothetical_cross_sizes<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    container: &FlexContainer,
    available_space: Size<AvailableSpace>,
    items: &mut [FlexItem],
) {
    let axis = container.main_axis;
    let cross_is_width = !axis.is_horizontal();
    for item in items.iter_mut() {
        let padding_border = item.padding_border().cross_axis_sum(axis);
        let min = item.min_size.cross(axis);
        let max = item.max_size.cross(axis);
        let main = item.target_size.main(axis);
        let styled = item
            .size
            .cross(axis)
            .or_else(|| transferred_size(Some(main), item.aspect_ratio, cross_is_width))
            .maybe_clamp(min, max)
            .maybe_max(padding_border);
        let inner_cross = styled.unwrap_or_else(|| {
            let cross_space = available_space
                .cross(axis)
                .maybe_clamp(min, max)
                .maybe_max(padding_border);
            tree.measure_child_size(
                item.node,
                Size::from_main_cross(axis, Some(main), None),
                container.node_inner_size,
                Size::from_main_cross(
                    axis,
                    AvailableSpace::Definite(container.container_size.main(axis)),
                    cross_space,
                ),
                SizingMode::ContentSize,
                axis.other_axis(),
            )
            .maybe_clamp(min, max)
            .max(padding_border)
        });
        item.hypothetical_inner_size.set_cross(axis, inner_cross);
        item.hypothetical_outer_size
            .set_cross(axis, inner_cross + item.margin.cross_axis_sum(axis));
    }
}

/// Phase 7: cross size of each line.
///
/// A single line in a container with a definite cross size takes the container's inner cross
/// size; otherwise a line is as tall as its tallest item once baselines are aligned.
pub fn calculate_line_cross_sizes(
    lines: &mut [FlexLine],
    items: &[FlexItem],
    container: &FlexContainer,
    known_cross: Option<f32>,
) {
    let axis = container.main_axis;
    let inset = container.content_box_inset.cross_axis_sum(axis);
    let min_cross = container.min_size.cross(axis);
    let max_cross = container.max_size.cross(axis);
    if !container.is_wrap
        && let Some(cross) = known_cross
        && let Some(line) = lines.first_mut()
    {
        line.cross_size = (cross.maybe_clamp(min_cross, max_cross) - inset).max(0.0);
        return;
    }
    for line in lines.iter_mut() {
        let line_items = line.items(items);
        let max_baseline = line_max_baseline(line_items);
        line.cross_size = line_items
            .iter()
            .map(|item| baseline_adjusted_outer_cross(item, max_baseline, axis))
            .fold(0.0, f32::max);
    }
    if !container.is_wrap
        && let Some(line) = lines.first_mut()
    {
        line.cross_size = line
            .cross_size
            .maybe_clamp(min_cross.maybe_sub(inset), max_cross.maybe_sub(inset));
    }
}

/// Phase 9 (sizing half): used cross size of each item.
///
/// `stretch` items with an `auto` cross size and no auto cross margin fill their line. The
/// stretched size is clamped by the item's max size before any aspect-ratio transfer.
pub fn determine_used_cross_sizes(
    lines: &[FlexLine],
    items: &mut [FlexItem],
    container: &FlexContainer,
) {
    let axis = container.main_axis;
    for line in lines {
        for item in line.items_mut(items) {
            let stretches = item.align_self == AlignItems::Stretch
                && item.size_is_auto.cross(axis)
                && !item.margin_is_auto.cross_start(axis)
                && !item.margin_is_auto.cross_end(axis);
            let cross = if stretches {
                (line.cross_size - item.margin.cross_axis_sum(axis))
                    .maybe_clamp(
                        item.min_size.cross(axis),
                        item.max_size_ignoring_aspect_ratio.cross(axis),
                    )
                    .max(item.padding_border().cross_axis_sum(axis))
            } else {
                item.hypothetical_inner_size.cross(axis)
            };
            item.target_size.set_cross(axis, cross);
            item.outer_target_size
                .set_cross(axis, cross + item.margin.cross_axis_sum(axis));
        }
    }
}

/// §9.4 step 15: the container's used cross size. Returns the sum of the line cross sizes.
pub fn determine_container_cross_size(
    lines: &[FlexLine],
    container: &mut FlexContainer,
    known_cross: Option<f32>,
) -> f32 {
    let axis = container.main_axis;
    let total_lines: f32 = lines.iter().map(|line| line.cross_size).sum();
    let gaps = sum_axis_gaps(container.cross_gap(), lines.len());
    let inset = container.content_box_inset.cross_axis_sum(axis);
    let floor = inset - container.sizes.scrollbar_gutter.cross(axis);
    let outer = known_cross
        .unwrap_or(total_lines + gaps + inset)
        .maybe_clamp(container.min_size.cross(axis), container.max_size.cross(axis))
        .max(floor);
    container.set_cross_size(outer);
    total_lines
}
