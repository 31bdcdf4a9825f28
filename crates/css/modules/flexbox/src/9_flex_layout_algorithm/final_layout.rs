//! Writing final layouts: in-flow items, absolutely positioned children and hidden children.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#abspos-items>

use css_box::{Point, Size};
use css_core::{
    Layout, LayoutInput, LayoutPartialTree, LayoutPartialTreeExt, NodeId,
    compute_content_size_contribution,
};
use css_orchestrator::{AlignContent, AlignItems, Display, Position};
use css_position::{AbsoluteContext, layout_absolute_child, relative_offset};
use css_sizing::{AvailableSpace, SizingMode};
use log::trace;

use super::line_breaking::FlexLine;
use crate::chapter5::FlexContainer;
use crate::chapter6::FlexItem;
use crate::chapter7::for_each_in_flow_order;

/// Phase 12: lay out every item at its target size and record its position.
///
/// Returns the in-flow content size. Afterwards each item's `baseline` is its first baseline in
/// the container's coordinates.
pub fn final_layout_pass<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    lines: &[FlexLine],
    items: &mut [FlexItem],
    container: &FlexContainer,
) -> Size<f32> {
    let axis = container.main_axis;
    let reverse_main = container.direction.is_reverse();
    let mut ordered_lines: Vec<&FlexLine> = lines.iter().collect();
    if container.is_wrap_reverse {
        ordered_lines.reverse();
    }

    let mut content_size = Size::ZERO;
    let mut cross_cursor = container.content_box_inset.cross_start(axis);
    for line in ordered_lines {
        cross_cursor += line.offset_cross;
        let mut main_cursor = container.content_box_inset.main_start(axis);
        for_each_in_flow_order(line.items_mut(items), reverse_main, |_, item| {
            let contribution = place_item(tree, item, &mut main_cursor, cross_cursor, container);
            content_size = content_size.f32_max(contribution);
        });
        cross_cursor += line.cross_size;
    }
    content_size.width += container.sizes.padding.right;
    content_size.height += container.sizes.padding.bottom;
    content_size
}

fn place_item<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    item: &mut FlexItem,
    main_cursor: &mut f32,
    cross_cursor: f32,
    container: &FlexContainer,
) -> Size<f32> {
    let axis = container.main_axis;
    let output = tree.perform_child_layout(
        item.node,
        item.target_size.map(Some),
        container.node_inner_size,
        container.container_size.map(AvailableSpace::Definite),
        SizingMode::ContentSize,
    );
    let size = output.size;
    let flow_position = Point::from_main_cross(
        axis,
        *main_cursor + item.offset_main + item.margin.main_start(axis),
        cross_cursor + item.offset_cross + item.margin.cross_start(axis),
    );
    // Relative offsets move the box only; the cursor advances from the unshifted position.
    let location = flow_position + relative_offset(tree.style(item.node), container.node_inner_size);
    item.baseline = flow_position.y + output.first_baselines.y.unwrap_or(size.height);

    trace!(
        target: "css::flexbox::lines",
        "[FLEX-PLACE] node={} at={location:?} size={size:?}",
        item.node
    );
    tree.set_unrounded_layout(
        item.node,
        &Layout {
            order: item.order,
            location,
            size,
            content_size: output.content_size,
            scrollbar_size: item.scrollbar_size(),
            border: item.border,
            padding: item.padding,
        },
    );
    *main_cursor += item.offset_main + item.margin.main_axis_sum(axis) + size.main(axis);
    compute_content_size_contribution(location, size, output.content_size, item.overflow)
}

/// Phase 11: place `position: absolute` children against the container's padding box.
///
/// Children with both insets `auto` in an axis take their static position from
/// `justify-content` (main axis) and `align-self` (cross axis). Returns their content size
/// contribution; they never affect the container's own size.
pub fn layout_absolute_children<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    node: NodeId,
    container: &FlexContainer,
) -> Size<f32> {
    let context = AbsoluteContext::padding_box(
        container.container_size,
        container.sizes.border,
        container.sizes.padding,
        container.sizes.scrollbar_size(),
    );
    let children = tree.children(node).to_vec();
    let mut content_size = Size::ZERO;
    for (order, child) in children.into_iter().enumerate() {
        let style = tree.style(child);
        if style.display == Display::None || style.position != Position::Absolute {
            continue;
        }
        let align_self = style.align_self.unwrap_or(container.align_items);
        let child_context = context.with_static_alignment(static_alignment(container, align_self));
        let contribution = layout_absolute_child(tree, child, order as u32, &child_context);
        content_size = content_size.f32_max(contribution);
    }
    content_size
}

/// Physical alignment of an absolutely positioned child's static position.
fn static_alignment(container: &FlexContainer, align_self: AlignItems) -> Point<AlignItems> {
    let (main_start, main_end) = if container.direction.is_reverse() {
        (AlignItems::End, AlignItems::Start)
    } else {
        (AlignItems::Start, AlignItems::End)
    };
    let main = match container.justify_content {
        AlignContent::Start => AlignItems::Start,
        AlignContent::End => AlignItems::End,
        AlignContent::FlexStart | AlignContent::Stretch | AlignContent::SpaceBetween => main_start,
        AlignContent::FlexEnd => main_end,
        AlignContent::Center | AlignContent::SpaceAround | AlignContent::SpaceEvenly => {
            AlignItems::Center
        }
    };
    let (cross_start, cross_end) = if container.is_wrap_reverse {
        (AlignItems::End, AlignItems::Start)
    } else {
        (AlignItems::Start, AlignItems::End)
    };
    let cross = match align_self {
        AlignItems::FlexStart | AlignItems::Stretch | AlignItems::Baseline => cross_start,
        AlignItems::FlexEnd => cross_end,
        AlignItems::Start | AlignItems::End | AlignItems::Center => align_self,
    };
    Point::from_main_cross(container.main_axis, main, cross)
}

/// Give `display: none` children (and their subtrees) zero layouts.
pub fn layout_hidden_children<Tree: LayoutPartialTree + ?Sized>(tree: &mut Tree, node: NodeId) {
    let children = tree.children(node).to_vec();
    for (order, child) in children.into_iter().enumerate() {
        if tree.style(child).display == Display::None {
            tree.compute_child_layout(child, LayoutInput::HIDDEN);
            tree.set_unrounded_layout(child, &Layout::with_order(order as u32));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_core::BoxSizes;
    use css_orchestrator::{FlexDirection, Style};

    fn container(direction: FlexDirection) -> FlexContainer {
        let style = Style {
            flex_direction: direction,
            ..Style::DEFAULT
        };
        FlexContainer::resolve(
            &style,
            BoxSizes::resolve(&style, Size::NONE),
            Size::NONE,
            Size::NONE,
            Size::NONE,
        )
    }

    #[test]
    /// # Panics
    /// Panics if the static position of an absolute child ignores the flex direction.
    fn static_alignment_follows_direction() {
        let mut row_reverse = container(FlexDirection::RowReverse);
        row_reverse.justify_content = AlignContent::FlexStart;
        let alignment = static_alignment(&row_reverse, AlignItems::Center);
        assert_eq!(alignment.x, AlignItems::End);
        assert_eq!(alignment.y, AlignItems::Center);

        let column = container(FlexDirection::Column);
        let column_alignment = static_alignment(&column, AlignItems::FlexEnd);
        assert_eq!(column_alignment.x, AlignItems::End);
        assert_eq!(column_alignment.y, AlignItems::Start);
    }
}
