//! Auto margins on flex items.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#auto-margins>

use css_box::AbsoluteAxis;

use crate::chapter6::FlexItem;

/// Share positive main-axis free space equally among the line's `auto` main margins.
///
/// Returns `false` (and leaves every margin at zero) when there is nothing to absorb or no auto
/// margin to absorb it; `justify-content` then applies instead.
pub fn resolve_main_auto_margins(
    line_items: &mut [FlexItem],
    free_space: f32,
    axis: AbsoluteAxis,
) -> bool {
    let auto_count: usize = line_items
        .iter()
        .map(|item| {
            usize::from(item.margin_is_auto.main_start(axis))
                + usize::from(item.margin_is_auto.main_end(axis))
        })
        .sum();
    if auto_count == 0 || free_space <= 0.0 {
        return false;
    }
    let share = free_space / auto_count as f32;
    for item in line_items.iter_mut() {
        if item.margin_is_auto.main_start(axis) {
            set_start(item, axis, share);
        }
        if item.margin_is_auto.main_end(axis) {
            set_end(item, axis, share);
        }
    }
    true
}

/// Absorb the item's free cross space into its `auto` cross margins.
///
/// Returns `false` when the item has no auto cross margin, so `align-self` positions it instead.
/// When the item overflows its line the auto margins stay zero and it sits at the line's start.
pub fn resolve_cross_auto_margins(item: &mut FlexItem, free_space: f32, axis: AbsoluteAxis) -> bool {
    let cross = axis.other_axis();
    let start = item.margin_is_auto.cross_start(axis);
    let end = item.margin_is_auto.cross_end(axis);
    if !start && !end {
        return false;
    }
    let free = free_space.max(0.0);
    match (start, end) {
        (true, true) => {
            set_start(item, cross, free / 2.0);
            set_end(item, cross, free / 2.0);
        }
        (true, false) => set_start(item, cross, free),
        _ => set_end(item, cross, free),
    }
    true
}

fn set_start(item: &mut FlexItem, axis: AbsoluteAxis, value: f32) {
    match axis {
        AbsoluteAxis::Horizontal => item.margin.left = value,
        AbsoluteAxis::Vertical => item.margin.top = value,
    }
}

fn set_end(item: &mut FlexItem, axis: AbsoluteAxis, value: f32) {
    match axis {
        AbsoluteAxis::Horizontal => item.margin.right = value,
        AbsoluteAxis::Vertical => item.margin.bottom = value,
    }
}
