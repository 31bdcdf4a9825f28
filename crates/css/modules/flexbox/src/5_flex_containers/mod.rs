//! Flex Containers: container properties resolved once per layout call
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use css_box::{AbsoluteAxis, MaybeMath, Rect, Size};
use css_core::BoxSizes;
use css_orchestrator::{AlignContent, AlignItems, FlexDirection, FlexWrap, Style};
use css_values_units::ResolveOrZero;

/// Container-level values every phase of the flex algorithm reads.
///
/// The `container_size` fields start at zero and are filled in once the main size (§9.3) and
/// the cross size (§9.4 step 15) are known.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexContainer {
    pub direction: FlexDirection,
    pub main_axis: AbsoluteAxis,
    pub is_row: bool,
    pub is_wrap: bool,
    pub is_wrap_reverse: bool,
    pub sizes: BoxSizes,
    /// Min/max border-box sizes; `None` when sizing by content.
    pub min_size: Size<Option<f32>>,
    pub max_size: Size<Option<f32>>,
    /// Padding, border and scrollbar gutter.
    pub content_box_inset: Rect<f32>,
    /// `width` is the gap between columns (main gap of a row container).
    pub gap: Size<f32>,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub justify_content: AlignContent,
    pub node_outer_size: Size<Option<f32>>,
    pub node_inner_size: Size<Option<f32>>,
    pub container_size: Size<f32>,
    pub inner_container_size: Size<f32>,
}

impl FlexContainer {
    /// Resolve the container's style against its own known border-box size.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
    pub fn resolve(
        style: &Style,
        sizes: BoxSizes,
        known_dimensions: Size<Option<f32>>,
        min_size: Size<Option<f32>>,
        max_size: Size<Option<f32>>,
    ) -> Self {
        let direction = style.flex_direction;
        let content_box_inset = sizes.content_box_inset();
        let node_inner_size = known_dimensions
            .maybe_sub(content_box_inset.sum_axes())
            .map(|size| size.map(|value| value.max(0.0)));
        Self {
            direction,
            main_axis: direction.main_axis(),
            is_row: direction.is_row(),
            is_wrap: style.flex_wrap != FlexWrap::NoWrap,
            is_wrap_reverse: style.flex_wrap == FlexWrap::WrapReverse,
            sizes,
            min_size,
            max_size,
            content_box_inset,
            gap: style.gap.resolve_or_zero(node_inner_size),
            align_items: style.align_items.unwrap_or(AlignItems::Stretch),
            align_content: style.align_content.unwrap_or(AlignContent::Stretch),
            justify_content: style.justify_content.unwrap_or(AlignContent::FlexStart),
            node_outer_size: known_dimensions,
            node_inner_size,
            container_size: Size::ZERO,
            inner_container_size: Size::ZERO,
        }
    }

    #[inline]
    pub const fn main_gap(&self) -> f32 {
        self.gap.main(self.main_axis)
    }

    #[inline]
    pub const fn cross_gap(&self) -> f32 {
        self.gap.cross(self.main_axis)
    }

    /// Record the used main size, given as the outer (border-box) size.
    pub fn set_main_size(&mut self, outer_main: f32) {
        let axis = self.main_axis;
        let inner = (outer_main - self.content_box_inset.main_axis_sum(axis)).max(0.0);
        self.container_size.set_main(axis, outer_main);
        self.inner_container_size.set_main(axis, inner);
        self.node_outer_size.set_main(axis, Some(outer_main));
        self.node_inner_size.set_main(axis, Some(inner));
    }

    /// Record the used cross size, given as the outer (border-box) size.
    pub fn set_cross_size(&mut self, outer_cross: f32) {
        let axis = self.main_axis;
        let inner = (outer_cross - self.content_box_inset.cross_axis_sum(axis)).max(0.0);
        self.container_size.set_cross(axis, outer_cross);
        self.inner_container_size.set_cross(axis, inner);
    }
}

/// Total space taken by the gaps between `count` boxes.
#[inline]
pub fn sum_axis_gaps(gap: f32, count: usize) -> f32 {
    if count <= 1 {
        0.0
    } else {
        gap * (count - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::LengthPercentage;

    fn container(style: &Style, known: Size<Option<f32>>) -> FlexContainer {
        let sizes = BoxSizes::resolve(style, Size::NONE);
        FlexContainer::resolve(style, sizes, known, Size::NONE, Size::NONE)
    }

    #[test]
    /// # Panics
    /// Panics if percentage gaps do not resolve against the inner size, or fall back to 0.
    fn percentage_gaps_resolve_against_inner_size() {
        let style = Style {
            gap: Size {
                width: LengthPercentage::Percent(0.1),
                height: LengthPercentage::Percent(0.1),
            },
            ..Style::DEFAULT
        };
        let flex = container(
            &style,
            Size {
                width: Some(200.0),
                height: None,
            },
        );
        assert!((flex.gap.width - 20.0).abs() < 0.01);
        assert_eq!(flex.gap.height, 0.0);
    }

    #[test]
    /// # Panics
    /// Panics if the container's defaults are not row / nowrap / stretch / flex-start.
    fn defaults_follow_initial_values() {
        let flex = container(&Style::DEFAULT, Size::NONE);
        assert!(flex.is_row);
        assert!(!flex.is_wrap);
        assert_eq!(flex.align_items, AlignItems::Stretch);
        assert_eq!(flex.align_content, AlignContent::Stretch);
        assert_eq!(flex.justify_content, AlignContent::FlexStart);
    }

    #[test]
    /// # Panics
    /// Panics if gaps are counted for a single box or miscounted for several.
    fn gaps_only_between_boxes() {
        assert_eq!(sum_axis_gaps(10.0, 0), 0.0);
        assert_eq!(sum_axis_gaps(10.0, 1), 0.0);
        assert_eq!(sum_axis_gaps(10.0, 4), 30.0);
    }
}
