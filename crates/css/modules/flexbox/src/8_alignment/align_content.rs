//! Packing flex lines along the cross axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use css_box::MaybeMath;
use css_core::{apply_alignment_fallback, compute_alignment_offset};
use css_orchestrator::AlignContent;
use log::debug;

use crate::chapter5::{FlexContainer, sum_axis_gaps};
use crate::chapter7::for_each_in_flow_order;
use crate::chapter9::FlexLine;

/// `align-content: stretch`: grow every line equally until the lines fill the container's
/// definite (or minimum) inner cross size.
pub fn stretch_lines(
    lines: &mut [FlexLine],
    container: &FlexContainer,
    known_cross: Option<f32>,
) {
    if container.align_content != AlignContent::Stretch || lines.is_empty() {
        return;
    }
    let axis = container.main_axis;
    let min_cross = container.min_size.cross(axis);
    let Some(target) = known_cross
        .or(min_cross)
        .maybe_clamp(min_cross, container.max_size.cross(axis))
        .maybe_sub(container.content_box_inset.cross_axis_sum(axis))
        .map(|inner| inner.max(0.0))
    else {
        return;
    };
    let total: f32 = lines.iter().map(|line| line.cross_size).sum::<f32>()
        + sum_axis_gaps(container.cross_gap(), lines.len());
    if total < target {
        let extra = (target - total) / lines.len() as f32;
        for line in lines.iter_mut() {
            line.cross_size += extra;
        }
        debug!(
            target: "css::flexbox::lines",
            "[FLEX-ALIGN-CONTENT] stretch lines={} extra={extra}",
            lines.len()
        );
    }
}

/// Phase 8: set each line's leading offset per `align-content`.
///
/// `total_cross` is the sum of the lines' cross sizes, gaps excluded.
pub fn align_lines(lines: &mut [FlexLine], container: &FlexContainer, total_cross: f32) {
    let count = lines.len();
    let gap = container.cross_gap();
    let free_space = container.inner_container_size.cross(container.main_axis)
        - total_cross
        - sum_axis_gaps(gap, count);
    let mode = apply_alignment_fallback(free_space, count, container.align_content, false);
    let reverse = container.is_wrap_reverse;
    for_each_in_flow_order(lines, reverse, |position, line| {
        line.offset_cross =
            compute_alignment_offset(free_space, count, gap, mode, reverse, position == 0);
    });
}
