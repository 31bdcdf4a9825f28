//! Resolution of a node's box model against its containing block.

use css_box::{MaybeMath, Point, Rect, Size};
use css_orchestrator::{BoxSizing, Style};
use css_sizing::{apply_box_sizing_to_size, maybe_apply_aspect_ratio};
use css_values_units::{Dimension, MaybeResolve, ResolveOrZero};

/// Margins, padding, border and size constraints of one node, in pixels.
///
/// Sizes are border-box sizes with `box-sizing` and aspect ratio already applied; they stay `None`
/// where the style is `auto` or a percentage of an indefinite basis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxSizes {
    /// Resolved margins, `auto` as 0.
    pub margin: Rect<f32>,
    pub padding: Rect<f32>,
    pub border: Rect<f32>,
    /// Scrollbar space per axis (`x` reserves a column on the right).
    pub scrollbar_gutter: Point<f32>,
    pub size: Size<Option<f32>>,
    pub min_size: Size<Option<f32>>,
    pub max_size: Size<Option<f32>>,
    pub aspect_ratio: Option<f32>,
}

impl BoxSizes {
    /// Resolve `style` against the containing block `parent_size`.
    ///
    /// Margin, padding and border percentages all refer to the containing block's width.
    pub fn resolve(style: &Style, parent_size: Size<Option<f32>>) -> Self {
        let margin = style.margin.resolve_or_zero(parent_size.width);
        let padding = style.padding.resolve_or_zero(parent_size.width);
        let border = style.border.resolve_or_zero(parent_size.width);
        let padding_border = (padding + border).sum_axes();
        let box_sizing_adjustment = match style.box_sizing {
            BoxSizing::ContentBox => padding_border,
            BoxSizing::BorderBox => Size::ZERO,
        };
        let aspect_ratio = style.aspect_ratio;
        let resolve = |size: Size<Dimension>| {
            apply_box_sizing_to_size(
                maybe_apply_aspect_ratio(size.maybe_resolve(parent_size), aspect_ratio),
                BoxSizing::ContentBox,
                box_sizing_adjustment,
            )
        };
        Self {
            margin,
            padding,
            border,
            scrollbar_gutter: style.scrollbar_gutter(),
            size: resolve(style.size),
            min_size: resolve(style.min_size),
            max_size: resolve(style.max_size),
            aspect_ratio,
        }
    }

    #[inline]
    pub fn padding_border(&self) -> Rect<f32> {
        self.padding + self.border
    }

    /// Padding, border and scrollbar gutter: the distance from border box to content box.
    #[inline]
    pub fn content_box_inset(&self) -> Rect<f32> {
        let mut inset = self.padding_border();
        inset.right += self.scrollbar_gutter.x;
        inset.bottom += self.scrollbar_gutter.y;
        inset
    }

    /// Styled size clamped by min/max, where set.
    #[inline]
    pub fn clamped_size(&self) -> Size<Option<f32>> {
        self.size.maybe_clamp(self.min_size, self.max_size)
    }

    /// Scrollbar space as a layout size (`width` is the vertical scrollbar).
    #[inline]
    pub const fn scrollbar_size(&self) -> Size<f32> {
        Size {
            width: self.scrollbar_gutter.x,
            height: self.scrollbar_gutter.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::LengthPercentage;

    #[test]
    /// # Panics
    /// Panics if content-box sizing does not add padding and border to the border-box size.
    fn content_box_sizes_include_padding_and_border() {
        let style = Style {
            box_sizing: BoxSizing::ContentBox,
            size: Size {
                width: Dimension::Length(100.0),
                height: Dimension::Auto,
            },
            padding: Rect {
                left: LengthPercentage::Length(10.0),
                right: LengthPercentage::Length(10.0),
                top: LengthPercentage::ZERO,
                bottom: LengthPercentage::ZERO,
            },
            ..Style::default()
        };
        let sizes = BoxSizes::resolve(&style, Size::NONE);
        assert_eq!(sizes.size.width, Some(120.0));
        assert_eq!(sizes.size.height, None);
    }

    #[test]
    /// # Panics
    /// Panics if percentage padding resolves against anything but the containing block width.
    fn percentage_padding_uses_parent_width() {
        let style = Style {
            padding: Rect {
                left: LengthPercentage::ZERO,
                right: LengthPercentage::ZERO,
                top: LengthPercentage::Percent(0.1),
                bottom: LengthPercentage::ZERO,
            },
            ..Style::default()
        };
        let sizes = BoxSizes::resolve(&style, Size::new(200.0, 50.0));
        assert_eq!(sizes.padding.top, 20.0);
    }
}
