use css_box::{Point, Size};
use css_orchestrator::Overflow;

/// How far a child at `location` extends its parent's scrollable overflow.
///
/// A child that does not clip adds its own overflowing content. Empty children add nothing.
#[inline]
pub fn compute_content_size_contribution(
    location: Point<f32>,
    size: Size<f32>,
    content_size: Size<f32>,
    overflow: Point<Overflow>,
) -> Size<f32> {
    let extent = Size {
        width: match overflow.x {
            Overflow::Visible => size.width.max(content_size.width),
            Overflow::Clip | Overflow::Hidden | Overflow::Scroll => size.width,
        },
        height: match overflow.y {
            Overflow::Visible => size.height.max(content_size.height),
            Overflow::Clip | Overflow::Hidden | Overflow::Scroll => size.height,
        },
    };
    if extent.width > 0.0 && extent.height > 0.0 {
        Size {
            width: location.x + extent.width,
            height: location.y + extent.height,
        }
    } else {
        Size::ZERO
    }
}
