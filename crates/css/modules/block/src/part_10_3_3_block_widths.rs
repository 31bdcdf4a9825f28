//! Spec: CSS 2.2 §10.3.3 Block-level, non-replaced elements in normal flow
//! Horizontal solving: used width and margins from the containing block width.

use css_box::MaybeMath;

/// Resolved horizontal margins of a block in normal flow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HorizontalMargins {
    /// Used margin-left in pixels.
    pub left: f32,
    /// Used margin-right in pixels.
    pub right: f32,
}

/// Used border-box width of a block child.
///
/// An `auto` width fills the containing block minus the non-auto margins, then min/max apply.
#[inline]
pub fn used_border_box_width(
    specified: Option<f32>,
    min: Option<f32>,
    max: Option<f32>,
    containing_width: f32,
    margin_left: Option<f32>,
    margin_right: Option<f32>,
) -> f32 {
    let fill = containing_width - margin_left.unwrap_or(0.0) - margin_right.unwrap_or(0.0);
    specified.unwrap_or(fill).maybe_clamp(min, max).max(0.0)
}

/// Solve `margin-left + width + margin-right = containing width` for the margins.
///
/// `None` margins are `auto`. Two auto margins center the box. One auto margin absorbs the
/// remainder. With none the equation is over-constrained and margin-right is recomputed
/// (left-to-right direction). Negative remainders are allowed: the box overflows.
pub fn resolve_horizontal_margins(
    border_box_width: f32,
    containing_width: f32,
    margin_left: Option<f32>,
    margin_right: Option<f32>,
) -> HorizontalMargins {
    match (margin_left, margin_right) {
        (None, None) => {
            let free = containing_width - border_box_width;
            if free > 0.0 {
                HorizontalMargins {
                    left: free / 2.0,
                    right: free / 2.0,
                }
            } else {
                HorizontalMargins {
                    left: 0.0,
                    right: free,
                }
            }
        }
        (None, Some(right)) => HorizontalMargins {
            left: containing_width - border_box_width - right,
            right,
        },
        (Some(left), None | Some(_)) => HorizontalMargins {
            left,
            right: containing_width - border_box_width - left,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if two auto margins do not center a fixed-width block.
    fn auto_margins_center() {
        let margins = resolve_horizontal_margins(60.0, 100.0, None, None);
        assert_eq!(margins, HorizontalMargins { left: 20.0, right: 20.0 });
    }

    #[test]
    /// # Panics
    /// Panics if a single auto margin does not absorb the remaining space.
    fn single_auto_margin_absorbs_remainder() {
        let margins = resolve_horizontal_margins(60.0, 100.0, None, Some(10.0));
        assert_eq!(margins.left, 30.0);
        assert_eq!(margins.right, 10.0);
    }

    #[test]
    /// # Panics
    /// Panics if an over-constrained block does not recompute margin-right.
    fn over_constrained_recomputes_right_margin() {
        let margins = resolve_horizontal_margins(60.0, 100.0, Some(10.0), Some(10.0));
        assert_eq!(margins.left, 10.0);
        assert_eq!(margins.right, 30.0);
    }

    #[test]
    /// # Panics
    /// Panics if an auto width does not fill the containing block or ignores max-width.
    fn auto_width_fills_then_clamps() {
        assert_eq!(
            used_border_box_width(None, None, None, 100.0, Some(10.0), None),
            90.0
        );
        assert_eq!(
            used_border_box_width(None, None, Some(50.0), 100.0, Some(10.0), None),
            50.0
        );
        assert_eq!(
            used_border_box_width(Some(30.0), Some(40.0), None, 100.0, None, None),
            40.0
        );
    }
}
