//! Flex Items: per-item state carried through the layout algorithm
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use css_box::{MaybeMath, Point, Rect, Size};
use css_core::{BoxSizes, LayoutPartialTree, NodeId};
use css_orchestrator::{AlignItems, BoxSizing, Overflow, Style};
use css_values_units::{Dimension, LengthPercentageAuto, MaybeResolve};

use crate::chapter4::is_flex_item;
use crate::chapter5::FlexContainer;

/// Where an item stands in the flexible length loop (§9.7).
///
/// An item only ever moves out of `Unfrozen`; once frozen its target main size is final for the
/// current line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FreezeState {
    #[default]
    Unfrozen,
    /// Clamped up to its minimum main size.
    FrozenAtMin,
    /// Clamped down to its maximum main size.
    FrozenAtMax,
    /// Frozen at its hypothetical size before any free space was handed out (inflexible item, or
    /// a loop iteration with no net violation).
    FrozenForViolation,
}

impl FreezeState {
    #[inline]
    pub const fn is_frozen(self) -> bool {
        !matches!(self, Self::Unfrozen)
    }
}

/// One in-flow child of a flex container.
///
/// Sizes are border-box sizes; "outer" sizes add the margins.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexItem {
    pub node: NodeId,
    /// Index among the container's children.
    pub order: u32,
    pub size: Size<Option<f32>>,
    pub min_size: Size<Option<f32>>,
    pub max_size: Size<Option<f32>>,
    /// Used by `align-self: stretch`, which ignores the aspect-ratio transfer of the max size.
    pub max_size_ignoring_aspect_ratio: Size<Option<f32>>,
    pub aspect_ratio: Option<f32>,
    /// Whether the styled size in each axis is `auto`.
    pub size_is_auto: Size<bool>,
    pub align_self: AlignItems,
    pub overflow: Point<Overflow>,
    pub scrollbar_width: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    /// `flex-basis` resolved to a border-box size, `None` for `auto`.
    pub specified_flex_basis: Option<f32>,
    pub margin: Rect<f32>,
    pub margin_is_auto: Rect<bool>,
    pub padding: Rect<f32>,
    pub border: Rect<f32>,

    pub flex_basis: f32,
    /// Flex basis minus padding and border; weights the shrink distribution.
    pub inner_flex_basis: f32,
    pub resolved_minimum_main_size: f32,
    pub hypothetical_inner_size: Size<f32>,
    pub hypothetical_outer_size: Size<f32>,
    pub target_size: Size<f32>,
    pub outer_target_size: Size<f32>,
    pub freeze: FreezeState,
    pub violation: f32,
    /// Contribution to an intrinsically sized container's main size per unit of flex.
    pub content_flex_fraction: f32,
    /// First baseline, from the item's margin-box top until the final pass, then from the
    /// container's border-box top.
    pub baseline: f32,
    pub offset_main: f32,
    pub offset_cross: f32,
}

impl FlexItem {
    /// Item with no box model, no constraints and the initial flex factors (`0 1 auto`).
    pub fn new(node: NodeId, order: u32) -> Self {
        Self {
            node,
            order,
            size: Size::NONE,
            min_size: Size::NONE,
            max_size: Size::NONE,
            max_size_ignoring_aspect_ratio: Size::NONE,
            aspect_ratio: None,
            size_is_auto: Size {
                width: true,
                height: true,
            },
            align_self: AlignItems::Stretch,
            overflow: Point {
                x: Overflow::Visible,
                y: Overflow::Visible,
            },
            scrollbar_width: 0.0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            specified_flex_basis: None,
            margin: Rect::ZERO,
            margin_is_auto: Rect {
                left: false,
                right: false,
                top: false,
                bottom: false,
            },
            padding: Rect::ZERO,
            border: Rect::ZERO,
            flex_basis: 0.0,
            inner_flex_basis: 0.0,
            resolved_minimum_main_size: 0.0,
            hypothetical_inner_size: Size::ZERO,
            hypothetical_outer_size: Size::ZERO,
            target_size: Size::ZERO,
            outer_target_size: Size::ZERO,
            freeze: FreezeState::Unfrozen,
            violation: 0.0,
            content_flex_fraction: 0.0,
            baseline: 0.0,
            offset_main: 0.0,
            offset_cross: 0.0,
        }
    }

    /// Resolve a child's style against the container's inner size.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#min-size-auto>
    pub fn from_style(node: NodeId, order: u32, style: &Style, container: &FlexContainer) -> Self {
        let inner = container.node_inner_size;
        let sizes = BoxSizes::resolve(style, inner);
        let padding_border = sizes.padding_border().sum_axes();
        let box_sizing_adjustment = match style.box_sizing {
            BoxSizing::ContentBox => padding_border,
            BoxSizing::BorderBox => Size::ZERO,
        };
        // `overflow` other than visible/clip turns the automatic minimum size into 0.
        let automatic_min = Size {
            width: style.overflow.x.maybe_into_automatic_min_size(),
            height: style.overflow.y.maybe_into_automatic_min_size(),
        };
        let main_axis = container.main_axis;
        let is_auto = |side: LengthPercentageAuto| side == LengthPercentageAuto::Auto;
        let mut item = Self::new(node, order);
        item.size = sizes.size;
        item.min_size = sizes.min_size.or(automatic_min);
        item.max_size = sizes.max_size;
        item.max_size_ignoring_aspect_ratio = style
            .max_size
            .maybe_resolve(inner)
            .maybe_add(box_sizing_adjustment);
        item.aspect_ratio = sizes.aspect_ratio;
        item.size_is_auto = style.size.map(|size| size == Dimension::Auto);
        item.align_self = style.align_self.unwrap_or(container.align_items);
        item.overflow = style.overflow;
        item.scrollbar_width = style.scrollbar_width;
        item.flex_grow = style.flex_grow;
        item.flex_shrink = style.flex_shrink;
        item.specified_flex_basis = style
            .flex_basis
            .maybe_resolve(inner.main(main_axis))
            .maybe_add(box_sizing_adjustment.main(main_axis));
        item.margin = sizes.margin;
        item.margin_is_auto = Rect {
            left: is_auto(style.margin.left),
            right: is_auto(style.margin.right),
            top: is_auto(style.margin.top),
            bottom: is_auto(style.margin.bottom),
        };
        item.padding = sizes.padding;
        item.border = sizes.border;
        item
    }

    #[inline]
    pub fn padding_border(&self) -> Rect<f32> {
        self.padding + self.border
    }

    #[inline]
    pub fn is_scroll_container(&self) -> bool {
        self.overflow.x.is_scroll_container() || self.overflow.y.is_scroll_container()
    }

    /// Scrollbar space reserved inside the item (`width` is the vertical scrollbar).
    #[inline]
    pub fn scrollbar_size(&self) -> Size<f32> {
        Size {
            width: if self.overflow.y == Overflow::Scroll {
                self.scrollbar_width
            } else {
                0.0
            },
            height: if self.overflow.x == Overflow::Scroll {
                self.scrollbar_width
            } else {
                0.0
            },
        }
    }
}

/// Phase 2: the in-flow children of `node`, in source order.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-anon-box>
pub fn collect_flex_items<Tree: LayoutPartialTree + ?Sized>(
    tree: &Tree,
    node: NodeId,
    container: &FlexContainer,
) -> Vec<FlexItem> {
    tree.children(node)
        .iter()
        .enumerate()
        .filter_map(|(index, &child)| {
            let style = tree.style(child);
            is_flex_item(style)
                .then(|| FlexItem::from_style(child, index as u32, style, container))
        })
        .collect()
}
