//! Cross-axis alignment of items within their line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>

use css_orchestrator::AlignItems;

use super::auto_margins::resolve_cross_auto_margins;
use super::baseline::line_max_baseline;
use crate::chapter5::FlexContainer;
use crate::chapter6::FlexItem;
use crate::chapter9::FlexLine;

/// Offset of an item inside its line for `align-self`, given the line's free cross space.
///
/// `baseline_shift` moves a baseline-aligned item down to the line's shared baseline. Under
/// `wrap-reverse` the flex-start and flex-end edges of the cross axis swap.
pub fn cross_offset(
    align_self: AlignItems,
    free_space: f32,
    baseline_shift: f32,
    container: &FlexContainer,
) -> f32 {
    let flex_start = if container.is_wrap_reverse {
        free_space
    } else {
        0.0
    };
    match align_self {
        AlignItems::Start => 0.0,
        AlignItems::End => free_space,
        AlignItems::FlexStart | AlignItems::Stretch => flex_start,
        AlignItems::FlexEnd => free_space - flex_start,
        AlignItems::Center => free_space / 2.0,
        // Baselines only align along a horizontal main axis.
        AlignItems::Baseline => {
            if container.is_row {
                baseline_shift
            } else {
                flex_start
            }
        }
    }
}

/// Phase 9 (placement half): cross auto margins first, then `align-self`.
pub fn align_items_in_lines(lines: &[FlexLine], items: &mut [FlexItem], container: &FlexContainer) {
    let axis = container.main_axis;
    for line in lines {
        let line_items = line.items_mut(items);
        let max_baseline = line_max_baseline(line_items);
        for item in line_items.iter_mut() {
            let free_space = line.cross_size - item.outer_target_size.cross(axis);
            if !resolve_cross_auto_margins(item, free_space, axis) {
                item.offset_cross = cross_offset(
                    item.align_self,
                    free_space,
                    max_baseline - item.baseline,
                    container,
                );
            }
        }
    }
}
