//! Main-axis alignment of each line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>

use css_core::{apply_alignment_fallback, compute_alignment_offset};
use log::debug;

use super::auto_margins::resolve_main_auto_margins;
use crate::chapter5::{FlexContainer, sum_axis_gaps};
use crate::chapter6::FlexItem;
use crate::chapter7::for_each_in_flow_order;
use crate::chapter9::FlexLine;

/// Phase 10: hand each line's leftover main space to auto margins, or else to `justify-content`.
///
/// Sets `offset_main` of every item: the space before it, gap included.
pub fn distribute_remaining_free_space(
    lines: &[FlexLine],
    items: &mut [FlexItem],
    container: &FlexContainer,
) {
    let axis = container.main_axis;
    let gap = container.main_gap();
    let reverse = container.direction.is_reverse();
    for line in lines {
        let line_items = line.items_mut(items);
        let count = line_items.len();
        let used: f32 = sum_axis_gaps(gap, count)
            + line_items
                .iter()
                .map(|item| item.outer_target_size.main(axis))
                .sum::<f32>();
        let free_space = container.inner_container_size.main(axis) - used;
        if resolve_main_auto_margins(line_items, free_space, axis) {
            // Auto margins took the space; items still sit one gap apart.
            for_each_in_flow_order(line_items, reverse, |position, item| {
                item.offset_main = if position == 0 { 0.0 } else { gap };
            });
            continue;
        }
        let mode = apply_alignment_fallback(free_space, count, container.justify_content, false);
        debug!(
            target: "css::flexbox::lines",
            "[FLEX-JUSTIFY] items={count} free={free_space} mode={mode:?}"
        );
        for_each_in_flow_order(line_items, reverse, |position, item| {
            item.offset_main =
                compute_alignment_offset(free_space, count, gap, mode, reverse, position == 0);
        });
    }
}
