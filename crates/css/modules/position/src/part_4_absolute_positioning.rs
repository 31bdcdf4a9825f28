//! Spec: CSS Position 3 §4 Absolute positioning, CSS 2.2 §10.3.7 / §10.6.4
//! <https://www.w3.org/TR/css-position-3/#abspos-insets>

use css_box::{MaybeMath, Point, Rect, Size};
use css_core::{
    BoxSizes, Layout, LayoutPartialTree, LayoutPartialTreeExt, NodeId,
    compute_content_size_contribution,
};
use css_orchestrator::AlignItems;
use css_sizing::{AvailableSpace, SizingMode, maybe_apply_aspect_ratio};
use css_values_units::{LengthPercentageAuto, MaybeResolve};
use log::debug;

/// Where an absolutely positioned child may go, in its parent's border-box coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AbsoluteContext {
    /// Origin of the box the insets refer to (the parent's padding box or a grid area).
    pub inset_origin: Point<f32>,
    pub inset_size: Size<f32>,
    /// Box the child is aligned within when both insets of an axis are `auto`.
    pub static_origin: Point<f32>,
    pub static_size: Size<f32>,
    /// Alignment inside the static box (`x` horizontal).
    pub static_alignment: Point<AlignItems>,
}

impl AbsoluteContext {
    /// Context whose insets refer to the padding box of a parent with the given border-box size,
    /// and whose static position is the start of the parent's content box.
    pub fn padding_box(
        parent_size: Size<f32>,
        border: Rect<f32>,
        padding: Rect<f32>,
        scrollbar: Size<f32>,
    ) -> Self {
        let inset_size = Size {
            width: (parent_size.width - border.horizontal_axis_sum() - scrollbar.width).max(0.0),
            height: (parent_size.height - border.vertical_axis_sum() - scrollbar.height).max(0.0),
        };
        Self {
            inset_origin: Point {
                x: border.left,
                y: border.top,
            },
            inset_size,
            static_origin: Point {
                x: border.left + padding.left,
                y: border.top + padding.top,
            },
            static_size: Size {
                width: (inset_size.width - padding.horizontal_axis_sum()).max(0.0),
                height: (inset_size.height - padding.vertical_axis_sum()).max(0.0),
            },
            static_alignment: Point {
                x: AlignItems::Start,
                y: AlignItems::Start,
            },
        }
    }

    #[must_use]
    pub const fn with_static_alignment(mut self, alignment: Point<AlignItems>) -> Self {
        self.static_alignment = alignment;
        self
    }
}

/// Offset of a box of `size` inside `free_space` of room under a self-alignment keyword.
#[inline]
fn static_offset(free_space: f32, alignment: AlignItems) -> f32 {
    match alignment {
        AlignItems::Start | AlignItems::FlexStart | AlignItems::Baseline | AlignItems::Stretch => 0.0,
        AlignItems::End | AlignItems::FlexEnd => free_space,
        AlignItems::Center => free_space / 2.0,
    }
}

/// Margins with `auto` kept as `None`.
fn optional_margins(margin: Rect<LengthPercentageAuto>, containing_width: f32) -> Rect<Option<f32>> {
    margin.map(|side| match side {
        LengthPercentageAuto::Auto => None,
        LengthPercentageAuto::Length(_) | LengthPercentageAuto::Percent(_) => {
            Some(side.maybe_resolve(containing_width).unwrap_or(0.0))
        }
    })
}

/// Resolve `auto` margins of one axis from the space left between two definite insets.
///
/// Two `auto` margins center the box; one absorbs everything; none leaves the box over-constrained
/// and the end inset is ignored.
fn resolve_auto_margins(
    start: Option<f32>,
    end: Option<f32>,
    free_space: Option<f32>,
) -> (f32, f32) {
    match (start, end, free_space) {
        (None, None, Some(free)) if free >= 0.0 => (free / 2.0, free / 2.0),
        (None, None, Some(free)) => (0.0, free),
        (None, Some(end), Some(free)) => (free, end),
        (Some(start), None, Some(free)) => (start, free),
        (start, end, _) => (start.unwrap_or(0.0), end.unwrap_or(0.0)),
    }
}

/// Size, place and record an absolutely positioned child.
///
/// Returns the child's contribution to the parent's content size.
pub fn layout_absolute_child<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    child: NodeId,
    order: u32,
    context: &AbsoluteContext,
) -> Size<f32> {
    let containing = context.inset_size;
    let style = tree.style(child);
    let overflow = style.overflow;
    let sizes = BoxSizes::resolve(style, containing.map(Some));
    let margin = optional_margins(style.margin, containing.width);
    let left = style.inset.left.maybe_resolve(containing.width);
    let right = style.inset.right.maybe_resolve(containing.width);
    let top = style.inset.top.maybe_resolve(containing.height);
    let bottom = style.inset.bottom.maybe_resolve(containing.height);

    let fixed_margin = margin.map(|side| side.unwrap_or(0.0));
    let mut known = sizes.clamped_size();
    if known.width.is_none()
        && let (Some(start), Some(end)) = (left, right)
    {
        known.width = Some(
            (containing.width - start - end - fixed_margin.horizontal_axis_sum())
                .maybe_clamp(sizes.min_size.width, sizes.max_size.width)
                .max(0.0),
        );
    }
    if known.height.is_none()
        && let (Some(start), Some(end)) = (top, bottom)
    {
        known.height = Some(
            (containing.height - start - end - fixed_margin.vertical_axis_sum())
                .maybe_clamp(sizes.min_size.height, sizes.max_size.height)
                .max(0.0),
        );
    }
    let known = maybe_apply_aspect_ratio(known, sizes.aspect_ratio);

    let available = Size {
        width: AvailableSpace::Definite(
            (containing.width
                - left.unwrap_or(0.0)
                - right.unwrap_or(0.0)
                - fixed_margin.horizontal_axis_sum())
            .max(0.0),
        ),
        height: AvailableSpace::Definite(
            (containing.height
                - top.unwrap_or(0.0)
                - bottom.unwrap_or(0.0)
                - fixed_margin.vertical_axis_sum())
            .max(0.0),
        ),
    };
    let measured = tree.measure_child(
        child,
        known,
        containing.map(Some),
        available,
        SizingMode::InherentSize,
    );
    let final_size = known
        .unwrap_or(measured.size)
        .maybe_clamp(sizes.min_size, sizes.max_size);
    let output = tree.perform_child_layout(
        child,
        final_size.map(Some),
        containing.map(Some),
        available,
        SizingMode::InherentSize,
    );
    let size = output.size;

    let free_width = left.zip(right).map(|(start, end)| {
        containing.width - start - end - size.width - fixed_margin.horizontal_axis_sum()
    });
    let free_height = top.zip(bottom).map(|(start, end)| {
        containing.height - start - end - size.height - fixed_margin.vertical_axis_sum()
    });
    let (margin_left, margin_right) = resolve_auto_margins(margin.left, margin.right, free_width);
    let (margin_top, margin_bottom) = resolve_auto_margins(margin.top, margin.bottom, free_height);

    let location = Point {
        x: match (left, right) {
            (Some(start), _) => context.inset_origin.x + start + margin_left,
            (None, Some(end)) => {
                context.inset_origin.x + containing.width - end - margin_right - size.width
            }
            (None, None) => {
                let free = context.static_size.width - size.width - margin_left - margin_right;
                context.static_origin.x + margin_left + static_offset(free, context.static_alignment.x)
            }
        },
        y: match (top, bottom) {
            (Some(start), _) => context.inset_origin.y + start + margin_top,
            (None, Some(end)) => {
                context.inset_origin.y + containing.height - end - margin_bottom - size.height
            }
            (None, None) => {
                let free = context.static_size.height - size.height - margin_top - margin_bottom;
                context.static_origin.y + margin_top + static_offset(free, context.static_alignment.y)
            }
        },
    };

    debug!(
        target: "css::position",
        "[ABSPOS] child={child} insets=({left:?},{right:?},{top:?},{bottom:?}) size={size:?} at={location:?}"
    );

    tree.set_unrounded_layout(
        child,
        &Layout {
            order,
            location,
            size,
            content_size: output.content_size,
            scrollbar_size: sizes.scrollbar_size(),
            border: sizes.border,
            padding: sizes.padding,
        },
    );

    compute_content_size_contribution(location, size, output.content_size, overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if auto margins between definite insets are not split or absorbed correctly.
    fn auto_margins_share_free_space() {
        assert_eq!(resolve_auto_margins(None, None, Some(20.0)), (10.0, 10.0));
        assert_eq!(resolve_auto_margins(Some(4.0), None, Some(20.0)), (4.0, 20.0));
        assert_eq!(resolve_auto_margins(None, None, None), (0.0, 0.0));
        assert_eq!(resolve_auto_margins(None, None, Some(-6.0)), (0.0, -6.0));
    }

    #[test]
    /// # Panics
    /// Panics if the padding box excludes padding or includes borders.
    fn padding_box_context_excludes_border() {
        let border = Rect {
            left: 2.0,
            right: 2.0,
            top: 1.0,
            bottom: 1.0,
        };
        let padding = Rect {
            left: 10.0,
            right: 10.0,
            top: 0.0,
            bottom: 0.0,
        };
        let context = AbsoluteContext::padding_box(
            Size {
                width: 100.0,
                height: 50.0,
            },
            border,
            padding,
            Size::ZERO,
        );
        assert_eq!(context.inset_origin, Point { x: 2.0, y: 1.0 });
        assert_eq!(context.inset_size.width, 96.0);
        assert_eq!(context.static_origin.x, 12.0);
        assert_eq!(context.static_size.width, 76.0);
    }

    #[test]
    /// # Panics
    /// Panics if static alignment puts an end-aligned box anywhere but flush with the end.
    fn static_alignment_offsets() {
        assert_eq!(static_offset(30.0, AlignItems::End), 30.0);
        assert_eq!(static_offset(30.0, AlignItems::Center), 15.0);
        assert_eq!(static_offset(30.0, AlignItems::Stretch), 0.0);
    }
}
