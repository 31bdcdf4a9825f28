//! Tests for the tree-independent phases of the flex layout algorithm.

use super::*;
use css_box::{AbsoluteAxis, Size};
use css_core::{BoxSizes, NodeId};
use css_orchestrator::{FlexDirection, FlexWrap, Style};
use css_values_units::LengthPercentage;

use crate::chapter5::FlexContainer;
use crate::chapter6::{FlexItem, FreezeState};

mod alignment_tests;

/// Item along the horizontal axis whose hypothetical size equals its flex basis.
pub fn item(index: u32, basis: f32, grow: f32, shrink: f32) -> FlexItem {
    let mut flex_item = FlexItem::new(NodeId::new(index, 0), index);
    flex_item.flex_grow = grow;
    flex_item.flex_shrink = shrink;
    flex_item.flex_basis = basis;
    flex_item.inner_flex_basis = basis;
    flex_item.hypothetical_inner_size.width = basis;
    flex_item.hypothetical_outer_size.width = basis;
    flex_item
}

/// Container whose border box is `main` long, built from `style`.
pub fn container_from(style: &Style, main: f32) -> FlexContainer {
    let axis = style.flex_direction.main_axis();
    let known = Size::from_main_cross(axis, Some(main), None);
    let mut container = FlexContainer::resolve(
        style,
        BoxSizes::resolve(style, Size::NONE),
        known,
        Size::NONE,
        Size::NONE,
    );
    container.set_main_size(main);
    container
}

pub fn row_container(width: f32) -> FlexContainer {
    container_from(&Style::DEFAULT, width)
}

pub fn wrapping_row_container(width: f32, column_gap: f32) -> FlexContainer {
    let style = Style {
        flex_wrap: FlexWrap::Wrap,
        gap: Size {
            width: LengthPercentage::Length(column_gap),
            height: LengthPercentage::Length(0.0),
        },
        ..Style::DEFAULT
    };
    container_from(&style, width)
}

/// Main sizes of `items` after resolving them as one line of `container`.
pub fn resolved_widths(items: &mut [FlexItem], container: &FlexContainer) -> Vec<f32> {
    resolve_flexible_lengths(
        items,
        AbsoluteAxis::Horizontal,
        container.main_gap(),
        container.inner_container_size.width,
    );
    items.iter().map(|flex_item| flex_item.target_size.width).collect()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[test]
/// # Panics
/// Panics if a column container does not take the vertical axis as its main axis.
fn column_container_uses_vertical_main_axis() {
    let style = Style {
        flex_direction: FlexDirection::Column,
        ..Style::DEFAULT
    };
    let container = container_from(&style, 120.0);
    assert_eq!(container.main_axis, AbsoluteAxis::Vertical);
    assert_close(container.inner_container_size.height, 120.0);
    assert_eq!(FreezeState::default(), FreezeState::Unfrozen);
}
