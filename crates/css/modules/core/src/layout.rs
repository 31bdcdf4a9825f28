use css_box::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Final placement of one node, relative to its parent's border box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Index of the node within its parent's child list.
    pub order: u32,
    /// Top-left corner of the border box. Negative under relative offsets or negative margins.
    pub location: Point<f32>,
    /// Border-box size.
    pub size: Size<f32>,
    /// Extent of the node's content, including overflowing children.
    pub content_size: Size<f32>,
    /// Space reserved for scrollbars (`width` is the vertical scrollbar).
    pub scrollbar_size: Size<f32>,
    pub border: Rect<f32>,
    pub padding: Rect<f32>,
}

impl Layout {
    pub const ZERO: Self = Self::with_order(0);

    #[inline]
    pub const fn with_order(order: u32) -> Self {
        Self {
            order,
            location: Point::ZERO,
            size: Size::ZERO,
            content_size: Size::ZERO,
            scrollbar_size: Size::ZERO,
            border: Rect::ZERO,
            padding: Rect::ZERO,
        }
    }

    /// Width of the content box.
    #[inline]
    pub fn content_box_width(&self) -> f32 {
        (self.size.width
            - self.padding.horizontal_axis_sum()
            - self.border.horizontal_axis_sum()
            - self.scrollbar_size.width)
            .max(0.0)
    }

    /// Height of the content box.
    #[inline]
    pub fn content_box_height(&self) -> f32 {
        (self.size.height
            - self.padding.vertical_axis_sum()
            - self.border.vertical_axis_sum()
            - self.scrollbar_size.height)
            .max(0.0)
    }
}
