//! Baseline alignment within a flex line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#baseline-participation>
//!
//! Baselines are shared per line only; items in different lines never align with each other.

use css_box::{AbsoluteAxis, Size};
use css_core::{LayoutPartialTree, LayoutPartialTreeExt};
use css_orchestrator::AlignItems;
use css_sizing::{AvailableSpace, SizingMode};

use crate::chapter5::FlexContainer;
use crate::chapter6::FlexItem;
use crate::chapter9::FlexLine;

/// Lay out baseline-aligned items of row lines to learn their first baselines.
///
/// Lines with fewer than two participants are skipped: aligning one item is a no-op.
pub fn compute_item_baselines<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    container: &FlexContainer,
    available_space: Size<AvailableSpace>,
    lines: &[FlexLine],
    items: &mut [FlexItem],
) {
    if !container.is_row {
        return;
    }
    for line in lines {
        let line_items = line.items_mut(items);
        let participants = line_items
            .iter()
            .filter(|item| item.align_self == AlignItems::Baseline)
            .count();
        if participants <= 1 {
            continue;
        }
        for item in line_items
            .iter_mut()
            .filter(|item| item.align_self == AlignItems::Baseline)
        {
            let output = tree.perform_child_layout(
                item.node,
                Size {
                    width: Some(item.target_size.width),
                    height: Some(item.hypothetical_inner_size.height),
                },
                container.node_inner_size,
                Size {
                    width: AvailableSpace::Definite(container.container_size.width),
                    height: available_space
                        .height
                        .maybe_set(container.node_outer_size.height),
                },
                SizingMode::ContentSize,
            );
            item.baseline =
                output.first_baselines.y.unwrap_or(output.size.height) + item.margin.top;
        }
    }
}

/// Lowest baseline (from the margin-box top) among the line's baseline-aligned items.
pub fn line_max_baseline(line_items: &[FlexItem]) -> f32 {
    line_items
        .iter()
        .filter(|item| item.align_self == AlignItems::Baseline)
        .map(|item| item.baseline)
        .fold(0.0, f32::max)
}

/// Outer cross size an item needs from its line once its baseline is aligned.
pub fn baseline_adjusted_outer_cross(item: &FlexItem, max_baseline: f32, axis: AbsoluteAxis) -> f32 {
    let outer = item.hypothetical_outer_size.cross(axis);
    if item.align_self == AlignItems::Baseline
        && !item.margin_is_auto.cross_start(axis)
        && !item.margin_is_auto.cross_end(axis)
    {
        max_baseline - item.baseline + outer
    } else {
        outer
    }
}

/// First baseline of the container: that of the first baseline-aligned item of the first line,
/// or of the line's first item. Column containers always use the first item.
///
/// Item baselines must already be in container coordinates (after the final pass).
pub fn container_first_baseline(
    lines: &[FlexLine],
    items: &[FlexItem],
    container: &FlexContainer,
) -> Option<f32> {
    let first_line = lines.first()?.items(items);
    first_line
        .iter()
        .find(|item| container.is_row && item.align_self == AlignItems::Baseline)
        .or_else(|| first_line.first())
        .map(|item| item.baseline)
}
