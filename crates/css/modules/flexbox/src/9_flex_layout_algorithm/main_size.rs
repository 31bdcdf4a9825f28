//! Main size determination of a flex container whose main size is not fixed.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-container>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#intrinsic-main-sizes>

use css_box::{AbsoluteAxis, MaybeMath, Size};
use css_core::{LayoutPartialTree, LayoutPartialTreeExt};
use css_sizing::{AvailableSpace, SizingMode};
use log::debug;

use super::base_size::{item_cross_available_space, item_known_dimensions};
use super::line_breaking::FlexLine;
use crate::chapter5::{FlexContainer, sum_axis_gaps};
use crate::chapter6::FlexItem;

/// Use the lines' contents to fix the container's main size, then record it on `container`.
pub fn determine_container_main_size<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    container: &mut FlexContainer,
    available_space: Size<AvailableSpace>,
    lines: &[FlexLine],
    items: &mut [FlexItem],
) {
    let axis = container.main_axis;
    let inset = container.content_box_inset.main_axis_sum(axis);
    let outer = container.node_outer_size.main(axis).unwrap_or_else(|| {
        match available_space.main(axis) {
            AvailableSpace::Definite(room) => {
                let size = longest_line_basis(container, lines, items) + inset;
                // Wrapped lines already fill the room they were broken against.
                if lines.len() > 1 { size.max(room) } else { size }
            }
            AvailableSpace::MinContent if container.is_wrap => {
                longest_line_basis(container, lines, items) + inset
            }
            AvailableSpace::MinContent | AvailableSpace::MaxContent => {
                intrinsic_main_size(tree, container, available_space, lines, items) + inset
            }
        }
    });
    let floor = inset - container.sizes.scrollbar_gutter.main(axis);
    let outer = outer
        .maybe_clamp(container.min_size.main(axis), container.max_size.main(axis))
        .max(floor);
    debug!(
        target: "css::flexbox::resolve",
        "[FLEX-MAIN] space={:?} lines={} -> main={outer}",
        available_space.main(axis),
        lines.len()
    );
    container.set_main_size(outer);
}

/// Longest line measured by flex base sizes (floored by min sizes) plus gaps.
fn longest_line_basis(container: &FlexContainer, lines: &[FlexLine], items: &[FlexItem]) -> f32 {
    let axis = container.main_axis;
    lines
        .iter()
        .map(|line| {
            let line_items = line.items(items);
            let total: f32 = line_items
                .iter()
                .map(|item| {
                    (item.flex_basis.maybe_max(item.min_size.main(axis))
                        + item.margin.main_axis_sum(axis))
                    .max(item.padding_border().main_axis_sum(axis))
                })
                .sum();
            total + sum_axis_gaps(container.main_gap(), line_items.len())
        })
        .fold(0.0, f32::max)
}

/// Min- or max-content main size: the largest line of item contributions (§9.9.1).
fn intrinsic_main_size<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    container: &FlexContainer,
    available_space: Size<AvailableSpace>,
    lines: &[FlexLine],
    items: &mut [FlexItem],
) -> f32 {
    let axis = container.main_axis;
    let mut main_size = 0.0_f32;
    for line in lines {
        let line_items = line.items_mut(items);
        for item in line_items.iter_mut() {
            let contribution = main_content_contribution(tree, container, available_space, item);
            item.content_flex_fraction = content_flex_fraction(item, contribution, axis);
        }
        let total: f32 = line_items
            .iter()
            .map(|item| {
                item.flex_basis + item.margin.main_axis_sum(axis) + flex_contribution(item)
            })
            .sum();
        main_size = main_size.max(total + sum_axis_gaps(container.main_gap(), line_items.len()));
    }
    main_size
}

/// Outer min- or max-content contribution of one item, clamped the way its flex factors allow.
fn main_content_contribution<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    container: &FlexContainer,
    available_space: Size<AvailableSpace>,
    item: &FlexItem,
) -> f32 {
    let axis = container.main_axis;
    let margin = item.margin.main_axis_sum(axis);
    let style_min = item.min_size.main(axis);
    let style_preferred = item.size.main(axis);
    let style_max = item.max_size.main(axis);

    // An item that cannot grow (or shrink) is also capped (or floored) at its basis.
    let clamping_basis = Some(item.flex_basis).maybe_max(style_preferred);
    let basis_min = clamping_basis.filter(|_| item.flex_shrink == 0.0);
    let basis_max = clamping_basis.filter(|_| item.flex_grow == 0.0);
    let min_main = style_min
        .maybe_max(basis_min)
        .or(basis_min)
        .unwrap_or(item.resolved_minimum_main_size)
        .max(item.resolved_minimum_main_size);
    let max_main = style_max
        .maybe_min(basis_max)
        .or(basis_max)
        .unwrap_or(f32::INFINITY);

    if let Some(preferred) = style_preferred
        && (max_main <= min_main || max_main <= preferred)
    {
        return preferred.min(max_main).max(min_main) + margin;
    }
    if max_main <= min_main {
        return min_main + margin;
    }
    if item.is_scroll_container() {
        return item.flex_basis + margin;
    }

    let cross_space = item_cross_available_space(
        item,
        available_space
            .cross(axis)
            .map_definite_value(|room| container.node_inner_size.cross(axis).unwrap_or(room)),
        axis,
    );
    let known = item_known_dimensions(item, cross_space, axis);
    let measured = tree.measure_child_size(
        item.node,
        known,
        container.node_inner_size,
        available_space.with_cross(axis, cross_space),
        SizingMode::InherentSize,
        axis,
    );
    let content = if container.is_row {
        measured
    } else {
        measured.max(item.flex_basis)
    };
    content.maybe_clamp(style_min, style_max) + margin
}

fn content_flex_fraction(item: &FlexItem, contribution: f32, axis: AbsoluteAxis) -> f32 {
    let difference = contribution - (item.flex_basis + item.margin.main_axis_sum(axis));
    if difference > 0.0 {
        difference / item.flex_grow.max(1.0)
    } else if difference < 0.0 {
        difference / (item.flex_shrink * item.inner_flex_basis).max(1.0)
    } else {
        0.0
    }
}

fn flex_contribution(item: &FlexItem) -> f32 {
    let fraction = item.content_flex_fraction;
    if fraction > 0.0 {
        item.flex_grow.max(1.0) * fraction
    } else if fraction < 0.0 {
        (item.flex_shrink * item.inner_flex_basis).max(1.0) * fraction
    } else {
        0.0
    }
}
