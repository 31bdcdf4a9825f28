//! Line length determination: available space, flex base size and hypothetical main size.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#line-sizing>

use css_box::{AbsoluteAxis, MaybeMath, Size};
use css_core::{LayoutPartialTree, LayoutPartialTreeExt};
use css_orchestrator::AlignItems;
use css_sizing::{AvailableSpace, SizingMode, automatic_minimum_size, transferred_size};
use log::trace;

use crate::chapter5::FlexContainer;
use crate::chapter6::FlexItem;

/// §9.2 step 2: room for the items inside the container's content box.
pub fn determine_available_space(
    known_dimensions: Size<Option<f32>>,
    outer_available_space: Size<AvailableSpace>,
    container: &FlexContainer,
) -> Size<AvailableSpace> {
    let inset = container.content_box_inset.sum_axes();
    let margin = container.sizes.margin.sum_axes();
    let resolve = |known: Option<f32>, outer: AvailableSpace, edges: f32, margins: f32| {
        known.map_or_else(
            || outer.maybe_sub(margins).maybe_sub(edges),
            |size| AvailableSpace::Definite(size - edges),
        )
    };
    let mut space = Size {
        width: resolve(
            known_dimensions.width,
            outer_available_space.width,
            inset.width,
            margin.width,
        ),
        height: resolve(
            known_dimensions.height,
            outer_available_space.height,
            inset.height,
            margin.height,
        ),
    };
    // An indefinite container still wraps at its max main size.
    let axis = container.main_axis;
    if known_dimensions.main(axis).is_none()
        && let Some(max_main) = container.max_size.main(axis)
    {
        let limit = max_main - inset.main(axis);
        space.set_main(axis, space.main(axis).map_definite_value(|room| room.min(limit)));
    }
    space
}

/// Cross-axis room offered to an item, narrowed to its own (outer) cross min/max.
pub fn item_cross_available_space(
    item: &FlexItem,
    cross_space: AvailableSpace,
    axis: AbsoluteAxis,
) -> AvailableSpace {
    let margin = item.margin.cross_axis_sum(axis);
    let min = item.min_size.cross(axis).maybe_add(margin);
    let max = item.max_size.cross(axis).maybe_add(margin);
    match cross_space {
        AvailableSpace::Definite(room) => AvailableSpace::Definite(room.maybe_clamp(min, max)),
        AvailableSpace::MinContent => min.map_or(AvailableSpace::MinContent, AvailableSpace::Definite),
        AvailableSpace::MaxContent => max.map_or(AvailableSpace::MaxContent, AvailableSpace::Definite),
    }
}

/// Sizes an item is measured with: its styled cross size, or the stretched line when it
/// stretches. The main size is always left open.
pub fn item_known_dimensions(
    item: &FlexItem,
    cross_space: AvailableSpace,
    axis: AbsoluteAxis,
) -> Size<Option<f32>> {
    let mut known = item.size.with_main(axis, None);
    if item.align_self == AlignItems::Stretch && known.cross(axis).is_none() {
        known.set_cross(
            axis,
            cross_space
                .into_option()
                .maybe_sub(item.margin.cross_axis_sum(axis)),
        );
    }
    known
}

/// §9.2 step 3: flex base size and hypothetical main size of every item.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-item>
pub fn determine_flex_base_sizes<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    container: &FlexContainer,
    available_space: Size<AvailableSpace>,
    items: &mut [FlexItem],
) {
    let axis = container.main_axis;
    let main_is_width = axis.is_horizontal();
    let parent_size = container.node_inner_size;
    for item in items.iter_mut() {
        let cross_space = item_cross_available_space(item, available_space.cross(axis), axis);
        let known = item_known_dimensions(item, cross_space, axis);

        // A: definite flex-basis. B: styled main size, or the size transferred from a definite
        // cross size. E: max-content (min-content under a min-content constraint).
        let flex_basis = item
            .specified_flex_basis
            .or(item.size.main(axis))
            .or_else(|| transferred_size(known.cross(axis), item.aspect_ratio, main_is_width))
            .unwrap_or_else(|| {
                let main_space = match available_space.main(axis) {
                    AvailableSpace::MinContent => AvailableSpace::MinContent,
                    AvailableSpace::MaxContent | AvailableSpace::Definite(_) => {
                        AvailableSpace::MaxContent
                    }
                };
                tree.measure_child_size(
                    item.node,
                    known,
                    parent_size,
                    Size::from_main_cross(axis, main_space, cross_space),
                    SizingMode::ContentSize,
                    axis,
                )
            });

        let main_padding_border = item.padding_border().main_axis_sum(axis);
        item.flex_basis = flex_basis.max(main_padding_border);
        item.inner_flex_basis = item.flex_basis - main_padding_border;

        let minimum = item.min_size.main(axis).unwrap_or_else(|| {
            let min_content = tree.measure_child_size(
                item.node,
                known,
                parent_size,
                Size::from_main_cross(axis, AvailableSpace::MinContent, cross_space),
                SizingMode::ContentSize,
                axis,
            );
            automatic_minimum_size(
                min_content,
                item.size.main(axis),
                transferred_size(known.cross(axis), item.aspect_ratio, main_is_width),
                item.max_size.main(axis),
            )
        });
        item.resolved_minimum_main_size = minimum.max(main_padding_border);

        let hypothetical = item
            .flex_basis
            .maybe_clamp(Some(item.resolved_minimum_main_size), item.max_size.main(axis));
        item.hypothetical_inner_size.set_main(axis, hypothetical);
        item.hypothetical_outer_size
            .set_main(axis, hypothetical + item.margin.main_axis_sum(axis));
        trace!(
            target: "css::flexbox::resolve",
            "[FLEX-BASE] node={} basis={} min={} hypothetical={hypothetical}",
            item.node,
            item.flex_basis,
            item.resolved_minimum_main_size
        );
    }
}
