//! Tests for justify-content, auto margins, align-self and align-content.

use super::*;
use css_core::AvailableSpace;
use css_orchestrator::{AlignContent, AlignItems};

use crate::chapter8::cross_offset;

/// Items with fixed widths already resolved against `container`, all on one line.
fn resolved_line(container: &FlexContainer, widths: &[f32]) -> (Vec<FlexItem>, Vec<FlexLine>) {
    let mut items: Vec<FlexItem> = widths
        .iter()
        .enumerate()
        .map(|(index, &width)| item(index as u32, width, 0.0, 0.0))
        .collect();
    resolved_widths(&mut items, container);
    let lines = vec![FlexLine::new(0, items.len())];
    (items, lines)
}

/// Give every item a fixed cross size of `height`.
fn with_height(items: &mut [FlexItem], height: f32) {
    for flex_item in items {
        flex_item.size_is_auto.height = false;
        flex_item.hypothetical_inner_size.height = height;
        flex_item.hypothetical_outer_size.height = height;
        flex_item.target_size.height = height;
        flex_item.outer_target_size.height = height;
    }
}

fn offsets_main(items: &[FlexItem]) -> Vec<f32> {
    items.iter().map(|flex_item| flex_item.offset_main).collect()
}

#[test]
/// # Panics
/// Panics if `justify-content: center` does not put half the free space before the first item.
fn justify_center_splits_leading_space() {
    let mut container = row_container(300.0);
    container.justify_content = AlignContent::Center;
    let (mut items, lines) = resolved_line(&container, &[50.0, 50.0]);
    distribute_remaining_free_space(&lines, &mut items, &container);
    assert_eq!(offsets_main(&items), vec![100.0, 0.0]);
}

#[test]
/// # Panics
/// Panics if `space-between` does not split the free space between the items only.
fn justify_space_between() {
    let mut container = row_container(300.0);
    container.justify_content = AlignContent::SpaceBetween;
    let (mut items, lines) = resolved_line(&container, &[50.0, 50.0, 50.0]);
    distribute_remaining_free_space(&lines, &mut items, &container);
    assert_eq!(offsets_main(&items), vec![0.0, 75.0, 75.0]);
}

#[test]
/// # Panics
/// Panics if `row-reverse` does not pack items against the right edge.
fn row_reverse_packs_at_main_start() {
    let style = Style {
        flex_direction: FlexDirection::RowReverse,
        ..Style::DEFAULT
    };
    let container = container_from(&style, 300.0);
    let (mut items, lines) = resolved_line(&container, &[50.0, 50.0]);
    distribute_remaining_free_space(&lines, &mut items, &container);
    // The last item in source order is visited first and takes the leading space.
    assert_eq!(offsets_main(&items), vec![0.0, 200.0]);
}

#[test]
/// # Panics
/// Panics if an auto margin does not absorb the free space ahead of `justify-content`.
fn main_auto_margin_absorbs_free_space() {
    let mut container = row_container(300.0);
    container.justify_content = AlignContent::Center;
    let (mut items, lines) = resolved_line(&container, &[50.0, 50.0]);
    if let Some(first) = items.first_mut() {
        first.margin_is_auto.left = true;
    }
    distribute_remaining_free_space(&lines, &mut items, &container);
    assert_close(items.first().map_or(0.0, |first| first.margin.left), 200.0);
    assert_eq!(offsets_main(&items), vec![0.0, 0.0]);
}

#[test]
/// # Panics
/// Panics if two auto margins on one item do not share the free space equally.
fn auto_margins_on_both_sides_center_item() {
    let container = row_container(300.0);
    let (mut items, lines) = resolved_line(&container, &[100.0]);
    if let Some(first) = items.first_mut() {
        first.margin_is_auto.left = true;
        first.margin_is_auto.right = true;
    }
    distribute_remaining_free_space(&lines, &mut items, &container);
    let margin = items.first().map(|first| first.margin).unwrap_or_default();
    assert_close(margin.left, 100.0);
    assert_close(margin.right, 100.0);
}

#[test]
/// # Panics
/// Panics if `align-self` keywords do not place an item within its line.
fn align_self_positions_within_line() {
    let container = row_container(300.0);
    let (mut items, mut lines) = resolved_line(&container, &[50.0, 50.0, 50.0]);
    with_height(&mut items, 40.0);
    for (flex_item, align) in items
        .iter_mut()
        .zip([AlignItems::FlexStart, AlignItems::Center, AlignItems::FlexEnd])
    {
        flex_item.align_self = align;
    }
    if let Some(line) = lines.first_mut() {
        line.cross_size = 100.0;
    }
    align_items_in_lines(&lines, &mut items, &container);
    let offsets: Vec<f32> = items.iter().map(|flex_item| flex_item.offset_cross).collect();
    assert_eq!(offsets, vec![0.0, 30.0, 60.0]);
}

#[test]
/// # Panics
/// Panics if `wrap-reverse` does not swap the cross-start edge for `flex-start`.
fn wrap_reverse_flips_flex_start() {
    let style = Style {
        flex_wrap: FlexWrap::WrapReverse,
        ..Style::DEFAULT
    };
    let container = container_from(&style, 300.0);
    let offset = cross_offset(AlignItems::FlexStart, 60.0, 0.0, &container);
    assert_close(offset, 60.0);
    let end = cross_offset(AlignItems::FlexEnd, 60.0, 0.0, &container);
    assert_close(end, 0.0);
}

#[test]
/// # Panics
/// Panics if cross auto margins do not center an item inside its line.
fn cross_auto_margins_center_item() {
    let container = row_container(300.0);
    let (mut items, mut lines) = resolved_line(&container, &[50.0]);
    with_height(&mut items, 40.0);
    if let Some(first) = items.first_mut() {
        first.margin_is_auto.top = true;
        first.margin_is_auto.bottom = true;
    }
    if let Some(line) = lines.first_mut() {
        line.cross_size = 100.0;
    }
    align_items_in_lines(&lines, &mut items, &container);
    let first = items.first().cloned().unwrap_or_else(|| item(0, 0.0, 0.0, 0.0));
    assert_close(first.margin.top, 30.0);
    assert_close(first.margin.bottom, 30.0);
    assert_close(first.offset_cross, 0.0);
}

#[test]
/// # Panics
/// Panics if a stretched item does not fill its line minus margins, or a sized item stretches.
fn stretch_fills_line_cross_size() {
    let container = row_container(300.0);
    let (mut items, mut lines) = resolved_line(&container, &[50.0, 50.0]);
    if let Some(first) = items.first_mut() {
        first.margin.top = 10.0;
    }
    if let Some(second) = items.get_mut(1) {
        second.size_is_auto.height = false;
        second.hypothetical_inner_size.height = 40.0;
    }
    if let Some(line) = lines.first_mut() {
        line.cross_size = 100.0;
    }
    determine_used_cross_sizes(&lines, &mut items, &container);
    let heights: Vec<f32> = items.iter().map(|flex_item| flex_item.target_size.height).collect();
    assert_eq!(heights, vec![90.0, 40.0]);
}

#[test]
/// # Panics
/// Panics if a single line does not take a definite container cross size.
fn single_line_takes_definite_cross_size() {
    let container = row_container(300.0);
    let (mut items, mut lines) = resolved_line(&container, &[50.0]);
    with_height(&mut items, 20.0);
    calculate_line_cross_sizes(&mut lines, &items, &container, Some(80.0));
    assert_close(lines.first().map_or(0.0, |line| line.cross_size), 80.0);
}

#[test]
/// # Panics
/// Panics if wrapped lines are not as tall as their tallest item.
fn wrapped_lines_fit_tallest_item() {
    let container = wrapping_row_container(100.0, 0.0);
    let mut items = vec![
        item(1, 60.0, 0.0, 1.0),
        item(2, 60.0, 0.0, 1.0),
        item(3, 30.0, 0.0, 1.0),
    ];
    for (flex_item, height) in items.iter_mut().zip([10.0, 25.0, 35.0]) {
        flex_item.hypothetical_outer_size.height = height;
    }
    let mut lines = collect_flex_lines(&items, &container, AvailableSpace::Definite(100.0));
    calculate_line_cross_sizes(&mut lines, &items, &container, None);
    let sizes: Vec<f32> = lines.iter().map(|line| line.cross_size).collect();
    assert_eq!(sizes, vec![10.0, 35.0]);
}

#[test]
/// # Panics
/// Panics if `align-content: stretch` does not share the leftover cross space between lines.
fn align_content_stretch_grows_lines() {
    let container = wrapping_row_container(300.0, 0.0);
    let mut lines = vec![FlexLine::new(0, 1), FlexLine::new(1, 2)];
    for line in &mut lines {
        line.cross_size = 50.0;
    }
    stretch_lines(&mut lines, &container, Some(300.0));
    let sizes: Vec<f32> = lines.iter().map(|line| line.cross_size).collect();
    assert_eq!(sizes, vec![150.0, 150.0]);
}

#[test]
/// # Panics
/// Panics if `align-content: center` does not offset the first line by half the free space.
fn align_content_center_offsets_lines() {
    let mut container = wrapping_row_container(300.0, 0.0);
    container.align_content = AlignContent::Center;
    container.set_cross_size(300.0);
    let mut lines = vec![FlexLine::new(0, 1), FlexLine::new(1, 2)];
    for line in &mut lines {
        line.cross_size = 50.0;
    }
    align_lines(&mut lines, &container, 100.0);
    let offsets: Vec<f32> = lines.iter().map(|line| line.offset_cross).collect();
    assert_eq!(offsets, vec![100.0, 0.0]);
}
